//! Form submission error types.

use taskdeck_api::ApiError;
use taskdeck_auth::AuthError;

/// Errors from submitting a form.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// Required fields were empty; no request was issued.
    #[error("required fields are empty")]
    Validation,

    /// The API call failed. The form's user-facing message is set.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Persisting the session token failed after a successful login.
    #[error(transparent)]
    Session(#[from] AuthError),
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
