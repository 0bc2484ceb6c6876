//! Collection manager error types.

use taskdeck_api::ApiError;

use crate::types::FieldErrors;

/// Errors reported by the task collection manager.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// API call failed (transport or server-side domain error).
    #[error("{0}")]
    Api(ApiError),

    /// No session token is stored; nothing was sent.
    #[error("not logged in")]
    MissingSession,

    /// The server rejected the session. The stored token has been cleared;
    /// the user must log in again.
    #[error("session expired: {message}")]
    SessionExpired {
        /// Server-provided reason.
        message: String,
    },

    /// Client-side validation failed; no request was issued.
    #[error("validation failed")]
    Validation(FieldErrors),

    /// The given task id is not in the collection.
    #[error("unknown task id: {0}")]
    UnknownTask(String),

    /// The given subtask id is not in the parent task.
    #[error("unknown subtask id: {0}")]
    UnknownSubtask(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
