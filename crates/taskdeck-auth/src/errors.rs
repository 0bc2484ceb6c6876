//! Session storage error types.

/// Errors that can occur while reading or writing the session file.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let auth_err = AuthError::from(io_err);
        assert!(auth_err.to_string().contains("not found"));
    }
}
