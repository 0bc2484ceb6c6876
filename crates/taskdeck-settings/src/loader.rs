//! Settings loading with deep merge and environment variable overrides.
//!
//! Loading flow:
//! 1. Start with compiled [`TaskdeckSettings::default()`]
//! 2. If `~/.taskdeck/settings.json` exists, deep-merge user values over defaults
//! 3. Apply environment variable overrides (highest priority)
//!
//! Deep merge rules:
//! - Objects are merged recursively (source overrides target per-key)
//! - Arrays and primitives are replaced entirely by source
//! - Null values in source are skipped (preserving target)

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::errors::Result;
use crate::types::TaskdeckSettings;

/// Resolve the path to the settings file (`~/.taskdeck/settings.json`).
pub fn settings_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".taskdeck").join("settings.json")
}

/// Load settings from the default path with env var overrides.
pub fn load_settings() -> Result<TaskdeckSettings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific path with env var overrides.
///
/// If the file does not exist, returns defaults. If the file contains
/// invalid JSON, returns an error.
pub fn load_settings_from_path(path: &Path) -> Result<TaskdeckSettings> {
    let defaults = serde_json::to_value(TaskdeckSettings::default())?;

    let merged = if path.exists() {
        debug!(?path, "loading settings from file");
        let content = std::fs::read_to_string(path)?;
        let user: Value = serde_json::from_str(&content)?;
        deep_merge(defaults, user)
    } else {
        debug!(?path, "settings file not found, using defaults");
        defaults
    };

    let mut settings: TaskdeckSettings = serde_json::from_value(merged)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Recursive deep merge of two JSON values.
///
/// - Objects are merged recursively (source overrides target per-key)
/// - Arrays and primitives are replaced entirely by source
/// - Null values in source are skipped (preserving target)
pub fn deep_merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target_map), Value::Object(source_map)) => {
            for (key, source_val) in source_map {
                if source_val.is_null() {
                    continue;
                }
                let merged = if let Some(target_val) = target_map.remove(&key) {
                    deep_merge(target_val, source_val)
                } else {
                    source_val
                };
                let _ = target_map.insert(key, merged);
            }
            Value::Object(target_map)
        }
        (_, source) => source,
    }
}

/// Apply environment variable overrides to loaded settings.
///
/// Invalid values are silently ignored (fall back to file/default).
pub fn apply_env_overrides(settings: &mut TaskdeckSettings) {
    if let Some(v) = read_env_string("TASKDECK_BASE_URL") {
        settings.api.base_url = v;
    }
    if let Some(v) = read_env_u64("TASKDECK_TIMEOUT_MS", 1_000, 600_000) {
        settings.api.timeout_ms = v;
    }
    if let Some(v) = read_env_string("TASKDECK_DATA_DIR") {
        settings.data_dir = v;
    }
}

// ── Pure parsing functions (testable without env vars) ──────────────────────

/// Parse a string as a `u64` within a range.
pub fn parse_u64_range(val: &str, min: u64, max: u64) -> Option<u64> {
    let n: u64 = val.parse().ok()?;
    (n >= min && n <= max).then_some(n)
}

// ── Env var readers (thin wrappers) ─────────────────────────────────────────

fn read_env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn read_env_u64(name: &str, min: u64, max: u64) -> Option<u64> {
    let val = std::env::var(name).ok()?;
    let result = parse_u64_range(&val, min, max);
    if result.is_none() {
        tracing::warn!(key = name, value = %val, "invalid u64 env var, ignoring");
    }
    result
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── deep_merge ──────────────────────────────────────────────────

    #[test]
    fn merge_simple_override() {
        let target = serde_json::json!({"a": 1, "b": 2});
        let source = serde_json::json!({"a": 10});
        let merged = deep_merge(target, source);
        assert_eq!(merged["a"], 10);
        assert_eq!(merged["b"], 2);
    }

    #[test]
    fn merge_nested_override() {
        let target = serde_json::json!({
            "api": {"baseUrl": "http://localhost:5000", "timeoutMs": 30000}
        });
        let source = serde_json::json!({
            "api": {"baseUrl": "https://tasks.example.com"}
        });
        let merged = deep_merge(target, source);
        assert_eq!(merged["api"]["baseUrl"], "https://tasks.example.com");
        assert_eq!(merged["api"]["timeoutMs"], 30000);
    }

    #[test]
    fn merge_array_replace() {
        let target = serde_json::json!({"items": [1, 2, 3]});
        let source = serde_json::json!({"items": [4, 5]});
        let merged = deep_merge(target, source);
        assert_eq!(merged["items"], serde_json::json!([4, 5]));
    }

    #[test]
    fn merge_null_preserves_target() {
        let target = serde_json::json!({"a": 1, "b": 2});
        let source = serde_json::json!({"a": null});
        let merged = deep_merge(target, source);
        assert_eq!(merged["a"], 1);
    }

    #[test]
    fn merge_new_keys_added() {
        let target = serde_json::json!({"a": 1});
        let source = serde_json::json!({"b": 2});
        let merged = deep_merge(target, source);
        assert_eq!(merged["a"], 1);
        assert_eq!(merged["b"], 2);
    }

    // ── parse helpers ───────────────────────────────────────────────

    #[test]
    fn parse_u64_in_range() {
        assert_eq!(parse_u64_range("5000", 1_000, 600_000), Some(5000));
    }

    #[test]
    fn parse_u64_out_of_range() {
        assert_eq!(parse_u64_range("10", 1_000, 600_000), None);
        assert_eq!(parse_u64_range("999999999", 1_000, 600_000), None);
    }

    #[test]
    fn parse_u64_invalid() {
        assert_eq!(parse_u64_range("abc", 0, 100), None);
        assert_eq!(parse_u64_range("-5", 0, 100), None);
    }

    // ── file loading ────────────────────────────────────────────────

    #[test]
    fn load_missing_file_returns_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let settings = load_settings_from_path(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings.api.base_url, "http://localhost:5000");
    }

    #[test]
    fn load_partial_file_merges_over_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"api":{"baseUrl":"http://10.0.0.2:5000"}}"#).unwrap();

        let settings = load_settings_from_path(&path).unwrap();
        assert_eq!(settings.api.base_url, "http://10.0.0.2:5000");
        assert_eq!(settings.api.timeout_ms, 30_000);
    }

    #[test]
    fn load_invalid_json_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{bad json").unwrap();
        assert!(load_settings_from_path(&path).is_err());
    }
}
