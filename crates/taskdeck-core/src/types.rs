//! Task and subtask domain types.
//!
//! Both types are server-owned: identifiers and creation timestamps are
//! assigned by the API and never fabricated client-side. Serde attributes
//! map the server's Mongo-style `_id` field and camelCase keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task as represented by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque server-assigned identifier, immutable once created.
    #[serde(rename = "_id")]
    pub id: String,
    /// User-editable title.
    pub title: String,
    /// User-editable description.
    pub description: String,
    /// Completion state. Defaults to `false` when absent on the wire.
    #[serde(default)]
    pub completed: bool,
    /// Server-assigned creation timestamp, immutable.
    pub created_at: DateTime<Utc>,
    /// Subtasks owned exclusively by this task. Absent on the wire means empty.
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

/// A subtask owned by a parent [`Task`]. No independent lifecycle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subtask {
    /// Opaque server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Subtask title.
    pub title: String,
    /// Completion state. Defaults to `false` when absent on the wire.
    #[serde(default)]
    pub completed: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
