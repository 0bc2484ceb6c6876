//! # taskdeck-auth
//!
//! Durable bearer-token storage for the taskdeck client.
//!
//! The session token proves an authenticated user and is attached to every
//! protected request. It is persisted to `<data_dir>/session.json` with
//! secure file permissions and survives process restarts; logout deletes it.
//!
//! [`SessionStore`] is the single authoritative read/write surface for the
//! token. Both the API client and the task collection manager hold the same
//! store (via `Arc`) instead of reaching into ad-hoc global state. Reads go
//! to disk on every call, so a token change takes effect on the next
//! request issued.

#![deny(unsafe_code)]

pub mod errors;
pub mod storage;
pub mod types;

pub use errors::AuthError;
pub use storage::{SessionStore, load_session, save_session, session_file_path};
pub use types::SessionFile;
