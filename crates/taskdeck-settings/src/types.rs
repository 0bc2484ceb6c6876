//! Settings document types.

use serde::{Deserialize, Serialize};

/// Remote API settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiSettings {
    /// Base URL of the task API server.
    pub base_url: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_ms: 30_000,
        }
    }
}

/// Top-level taskdeck settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskdeckSettings {
    /// Remote API settings.
    pub api: ApiSettings,
    /// Directory holding the session file and other client state.
    pub data_dir: String,
}

impl Default for TaskdeckSettings {
    fn default() -> Self {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
        Self {
            api: ApiSettings::default(),
            data_dir: format!("{home}/.taskdeck"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
