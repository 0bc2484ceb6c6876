//! Session file document types.

use serde::{Deserialize, Serialize};

/// Current session file format version.
pub const SESSION_FILE_VERSION: u32 = 1;

/// On-disk session document.
///
/// Versioned so future format changes can be detected; unsupported
/// versions are treated as "no session" on load.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionFile {
    /// Format version.
    pub version: u32,
    /// Bearer token, if a user is logged in.
    pub token: Option<String>,
    /// RFC 3339 timestamp of the last write.
    pub last_updated: String,
}

impl SessionFile {
    /// Create an empty session document at the current version.
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: SESSION_FILE_VERSION,
            token: None,
            last_updated: String::new(),
        }
    }
}

impl Default for SessionFile {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
