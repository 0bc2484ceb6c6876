//! # taskdeck-tasks
//!
//! The task collection manager: owns the authoritative in-memory list of
//! tasks, mediates every mutation through the API client, and derives
//! filtered/sorted views on demand.
//!
//! Mutations are confirmation-gated: local state changes only after the
//! server confirms, and the server's returned representation wins. A failed
//! mutation leaves the collection exactly as it was, except that edit mode
//! survives a failed save so the user can retry.
//!
//! There is no per-task mutual exclusion and no request fencing: while one
//! request is in flight the caller may issue another for the same task, and
//! responses apply in arrival order.

#![deny(unsafe_code)]

pub mod errors;
pub mod manager;
pub mod types;
pub mod view;

pub use errors::TaskError;
pub use manager::TaskManager;
pub use types::{EditState, FieldErrors, TaskFilter, TaskSort};
pub use view::derive_view;
