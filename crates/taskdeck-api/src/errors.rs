//! API client error types.

/// Errors that can occur when talking to the task API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network or transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No session token is stored; the request was never issued.
    #[error("no session token stored")]
    MissingToken,

    /// The server rejected the session (HTTP 401 / invalid token).
    #[error("unauthorized: {message}")]
    Unauthorized {
        /// Server-provided reason.
        message: String,
    },

    /// Server-side domain error (any other non-2xx status).
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Server-provided message, or the status text when absent.
        message: String,
    },
}

impl ApiError {
    /// Whether this failure invalidates the current session.
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_display() {
        let err = ApiError::Unauthorized {
            message: "Invalid token".to_string(),
        };
        assert_eq!(err.to_string(), "unauthorized: Invalid token");
        assert!(err.is_auth_failure());
    }

    #[test]
    fn api_error_display() {
        let err = ApiError::Api {
            status: 400,
            message: "Username already exists".to_string(),
        };
        assert_eq!(err.to_string(), "API error (400): Username already exists");
        assert!(!err.is_auth_failure());
    }

    #[test]
    fn missing_token_is_not_auth_failure() {
        assert!(!ApiError::MissingToken.is_auth_failure());
    }
}
