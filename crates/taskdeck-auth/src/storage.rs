//! Session file I/O and the [`SessionStore`] context object.
//!
//! Reads and writes `<data_dir>/session.json` with secure file
//! permissions (0o600).

use std::path::{Path, PathBuf};

use crate::errors::AuthError;
use crate::types::{SESSION_FILE_VERSION, SessionFile};

/// Session file name under the data directory.
const SESSION_FILE_NAME: &str = "session.json";

/// Get the session file path under the given data directory.
pub fn session_file_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SESSION_FILE_NAME)
}

/// Load the session document from file.
///
/// Returns `None` if the file doesn't exist, is invalid, or has an
/// unsupported version.
pub fn load_session(path: &Path) -> Option<SessionFile> {
    let data = match std::fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!("failed to read session file: {e}");
            return None;
        }
    };

    match serde_json::from_str::<SessionFile>(&data) {
        Ok(session) if session.version == SESSION_FILE_VERSION => Some(session),
        Ok(session) => {
            tracing::warn!("unsupported session file version: {}", session.version);
            None
        }
        Err(e) => {
            tracing::warn!("failed to parse session file: {e}");
            None
        }
    }
}

/// Save the session document to file.
///
/// Creates parent directories if needed. Sets file permissions to 0o600.
pub fn save_session(path: &Path, session: &mut SessionFile) -> Result<(), AuthError> {
    session.last_updated = chrono::Utc::now().to_rfc3339();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(session)?;
    std::fs::write(path, &json)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o600);
        let _ = std::fs::set_permissions(path, perms);
    }

    Ok(())
}

/// The session context object shared by the API client and the task
/// collection manager.
///
/// Every [`token`](SessionStore::token) call reads the file fresh, so a
/// token written by one component is visible to the next call issued by
/// any other. In-flight requests keep whatever token they were built with.
#[derive(Clone, Debug)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store rooted at the given data directory.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: session_file_path(data_dir),
        }
    }

    /// Path of the underlying session file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current bearer token, if any. Reads the file on every call.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        load_session(&self.path)?.token
    }

    /// Whether a token is currently stored.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persist a new bearer token.
    pub fn set_token(&self, token: &str) -> Result<(), AuthError> {
        let mut session = load_session(&self.path).unwrap_or_default();
        session.token = Some(token.to_string());
        save_session(&self.path, &mut session)
    }

    /// Delete the stored session. Missing file is not an error.
    pub fn clear(&self) -> Result<(), AuthError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::Io(e)),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_path(dir: &TempDir) -> PathBuf {
        dir.path().join("session.json")
    }

    #[test]
    fn session_file_path_construction() {
        let p = session_file_path(Path::new("/home/user/.taskdeck"));
        assert_eq!(p, PathBuf::from("/home/user/.taskdeck/session.json"));
    }

    #[test]
    fn load_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        assert!(load_session(&test_path(&dir)).is_none());
    }

    #[test]
    fn load_invalid_json_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = test_path(&dir);
        std::fs::write(&path, "not json").unwrap();
        assert!(load_session(&path).is_none());
    }

    #[test]
    fn load_wrong_version_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = test_path(&dir);
        std::fs::write(
            &path,
            r#"{"version":2,"token":"tok","lastUpdated":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(load_session(&path).is_none());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = test_path(&dir);

        let mut session = SessionFile::new();
        session.token = Some("tok-123".to_string());
        save_session(&path, &mut session).unwrap();

        let loaded = load_session(&path).unwrap();
        assert_eq!(loaded.version, SESSION_FILE_VERSION);
        assert_eq!(loaded.token.as_deref(), Some("tok-123"));
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("dir").join("session.json");
        let mut session = SessionFile::new();
        save_session(&path, &mut session).unwrap();
        assert!(path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn save_sets_permissions_0600() {
        use std::os::unix::fs::PermissionsExt;
        let dir = TempDir::new().unwrap();
        let path = test_path(&dir);
        let mut session = SessionFile::new();
        save_session(&path, &mut session).unwrap();
        let perms = std::fs::metadata(&path).unwrap().permissions();
        assert_eq!(perms.mode() & 0o777, 0o600);
    }

    #[test]
    fn store_set_and_get_token() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());

        assert!(store.token().is_none());
        assert!(!store.is_authenticated());

        store.set_token("bearer-1").unwrap();
        assert_eq!(store.token().as_deref(), Some("bearer-1"));
        assert!(store.is_authenticated());
    }

    #[test]
    fn store_reads_fresh_on_every_call() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        store.set_token("old").unwrap();

        // A second store over the same directory simulates another component
        // writing the token; the first store must observe it.
        let other = SessionStore::new(dir.path());
        other.set_token("new").unwrap();

        assert_eq!(store.token().as_deref(), Some("new"));
    }

    #[test]
    fn store_clear_removes_token() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        store.set_token("tok").unwrap();

        store.clear().unwrap();
        assert!(store.token().is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn store_clear_noop_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        assert!(store.clear().is_ok());
    }
}
