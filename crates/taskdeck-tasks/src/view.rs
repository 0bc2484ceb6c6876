//! Pure view derivation over the task collection.
//!
//! Filtering and sorting are projections: they borrow the collection and
//! never reorder or mutate it.

use taskdeck_core::Task;

use crate::types::{TaskFilter, TaskSort};

/// Derive a filtered, sorted view of the collection.
///
/// `Date` orders by creation timestamp descending (most recent first);
/// `Title` orders case-insensitively ascending. The sort is stable, so
/// title ties keep their relative input order.
pub fn derive_view(tasks: &[Task], filter: TaskFilter, sort: TaskSort) -> Vec<&Task> {
    let mut view: Vec<&Task> = tasks
        .iter()
        .filter(|task| match filter {
            TaskFilter::All => true,
            TaskFilter::Completed => task.completed,
            TaskFilter::NotCompleted => !task.completed,
        })
        .collect();

    match sort {
        TaskSort::Date => view.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        TaskSort::Title => {
            view.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
    }

    view
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
