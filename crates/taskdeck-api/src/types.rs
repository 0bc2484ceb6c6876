//! Request and response body types for the task API.

use serde::{Deserialize, Serialize};

/// Username/password pair for register and login.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: String,
}

/// Successful login payload.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent authenticated calls.
    pub token: String,
}

/// Registration confirmation payload.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RegisterResponse {
    /// Optional server confirmation message.
    #[serde(default)]
    pub message: Option<String>,
}

/// Body for `POST /api/tasks`.
#[derive(Clone, Debug, Serialize)]
pub struct TaskCreate {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
}

/// Body for `PUT /api/tasks/{id}`. Absent fields are left unchanged.
#[derive(Clone, Debug, Default, Serialize)]
pub struct TaskUpdate {
    /// New title, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New completion state, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Body for `POST /api/tasks/{id}/subtasks`.
#[derive(Clone, Debug, Serialize)]
pub struct SubtaskCreate {
    /// Subtask title.
    pub title: String,
}

/// Body for `PUT /api/tasks/{id}/subtasks/{subtaskId}`.
#[derive(Clone, Debug, Serialize)]
pub struct SubtaskUpdate {
    /// New completion state.
    pub completed: bool,
}

/// Error payload shape used by the server (`{"error": "..."}`).
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
