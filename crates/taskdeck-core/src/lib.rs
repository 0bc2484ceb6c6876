//! # taskdeck-core
//!
//! Domain types shared across the taskdeck workspace, plus tracing
//! subscriber setup.
//!
//! The types mirror the server's wire format: entities are identified by a
//! `_id` JSON field and timestamps are ISO-8601 `createdAt` strings.

#![deny(unsafe_code)]

pub mod logging;
pub mod types;

pub use logging::init_subscriber;
pub use types::{Subtask, Task};
