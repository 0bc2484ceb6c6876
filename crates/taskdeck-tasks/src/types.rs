//! View parameters, edit state, and validation error types.

use std::fmt;
use std::str::FromStr;

/// Which tasks a derived view includes.
///
/// A view parameter only: filtering never mutates the collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TaskFilter {
    /// Keep everything.
    #[default]
    All,
    /// Keep only completed tasks.
    Completed,
    /// Keep only not-yet-completed tasks.
    NotCompleted,
}

impl FromStr for TaskFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "completed" => Ok(Self::Completed),
            "notCompleted" => Ok(Self::NotCompleted),
            other => Err(format!("unknown filter: {other}")),
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::NotCompleted => "notCompleted",
        };
        f.write_str(s)
    }
}

/// How a derived view is ordered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TaskSort {
    /// Creation timestamp, most recent first.
    #[default]
    Date,
    /// Title, case-insensitive lexicographic, ascending.
    Title,
}

impl FromStr for TaskSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(Self::Date),
            "title" => Ok(Self::Title),
            other => Err(format!("unknown sort: {other}")),
        }
    }
}

impl fmt::Display for TaskSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Date => "date",
            Self::Title => "title",
        };
        f.write_str(s)
    }
}

/// Pending inline-edit state for a single task.
///
/// At most one task is in edit mode at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditState {
    /// Id of the task being edited.
    pub task_id: String,
    /// Pending title buffer.
    pub title: String,
    /// Pending description buffer.
    pub description: String,
}

/// Field-level validation errors for title/description inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    /// Error for the title field, if any.
    pub title: Option<String>,
    /// Error for the description field, if any.
    pub description: Option<String>,
}

impl FieldErrors {
    /// Whether no field error is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
