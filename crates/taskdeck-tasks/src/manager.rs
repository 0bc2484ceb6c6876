//! The task collection manager.
//!
//! Owns the in-memory collection and all mutation paths. Every mutation is
//! confirmation-gated: the request goes out, and local state changes only
//! when the server's response arrives, with the server's representation
//! replacing the local one. Failures are fire-and-report: no retry, no
//! queueing, and no partial application.
//!
//! An auth rejection on any operation clears the session store as a side
//! effect and surfaces [`TaskError::SessionExpired`]; the caller decides
//! how to route the user back to login.

use std::sync::Arc;

use tracing::{debug, warn};

use taskdeck_api::{ApiClient, ApiError, SubtaskCreate, SubtaskUpdate, TaskCreate, TaskUpdate};
use taskdeck_auth::SessionStore;
use taskdeck_core::Task;

use crate::errors::TaskError;
use crate::types::{EditState, FieldErrors, TaskFilter, TaskSort};
use crate::view::derive_view;

/// In-memory task collection with confirmation-gated mutations.
pub struct TaskManager {
    api: ApiClient,
    session: Arc<SessionStore>,
    tasks: Vec<Task>,
    filter: TaskFilter,
    sort: TaskSort,
    edit: Option<EditState>,
    field_errors: FieldErrors,
}

impl TaskManager {
    /// Create a manager over the given API client and session context.
    #[must_use]
    pub fn new(api: ApiClient, session: Arc<SessionStore>) -> Self {
        Self {
            api,
            session,
            tasks: Vec::new(),
            filter: TaskFilter::default(),
            sort: TaskSort::default(),
            edit: None,
            field_errors: FieldErrors::default(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Read surface
    // ─────────────────────────────────────────────────────────────────────

    /// The collection in server order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Currently-selected filter.
    #[must_use]
    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    /// Currently-selected sort key.
    #[must_use]
    pub fn sort(&self) -> TaskSort {
        self.sort
    }

    /// Select the filter for derived views.
    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    /// Select the sort key for derived views.
    pub fn set_sort(&mut self, sort: TaskSort) {
        self.sort = sort;
    }

    /// The task currently in inline-edit mode, if any.
    #[must_use]
    pub fn editing(&self) -> Option<&EditState> {
        self.edit.as_ref()
    }

    /// Mutable access to the pending edit buffer.
    pub fn editing_mut(&mut self) -> Option<&mut EditState> {
        self.edit.as_mut()
    }

    /// Field-level validation errors from the last `create`/`update`.
    #[must_use]
    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    /// Derive the view for the currently-selected filter and sort.
    #[must_use]
    pub fn visible(&self) -> Vec<&Task> {
        derive_view(&self.tasks, self.filter, self.sort)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Network-backed operations
    // ─────────────────────────────────────────────────────────────────────

    /// Fetch the full collection and replace local state with it.
    ///
    /// Total overwrite, not a merge. With no stored token nothing is sent
    /// and the collection is untouched.
    pub async fn load(&mut self) -> Result<(), TaskError> {
        match self.api.list_tasks().await {
            Ok(tasks) => {
                debug!(count = tasks.len(), "collection loaded");
                self.tasks = tasks;
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Create a task and append the server's result to the collection.
    ///
    /// Title and description must be non-blank; a validation failure sets
    /// field errors and returns without issuing a request.
    pub async fn create(&mut self, title: &str, description: &str) -> Result<(), TaskError> {
        let errors = validate_fields(title, description);
        if !errors.is_empty() {
            self.field_errors = errors.clone();
            return Err(TaskError::Validation(errors));
        }

        let body = TaskCreate {
            title: title.to_string(),
            description: description.to_string(),
        };
        match self.api.create_task(&body).await {
            Ok(task) => {
                debug!(id = %task.id, "task created");
                self.field_errors = FieldErrors::default();
                self.tasks.push(task);
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Save new title/description for a task.
    ///
    /// On success the server's task replaces the local entry and edit mode
    /// ends. On failure edit mode stays active so the user can retry.
    pub async fn update(
        &mut self,
        id: &str,
        title: &str,
        description: &str,
    ) -> Result<(), TaskError> {
        let errors = validate_fields(title, description);
        if !errors.is_empty() {
            self.field_errors = errors.clone();
            return Err(TaskError::Validation(errors));
        }

        let body = TaskUpdate {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            completed: None,
        };
        match self.api.update_task(id, &body).await {
            Ok(task) => {
                self.replace_task(task);
                self.edit = None;
                self.field_errors = FieldErrors::default();
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Delete a task. Removed locally only after the server confirms.
    pub async fn remove(&mut self, id: &str) -> Result<(), TaskError> {
        match self.api.delete_task(id).await {
            Ok(()) => {
                self.tasks.retain(|t| t.id != id);
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Toggle a task's completion state.
    ///
    /// Sends the negation of the current local value. Two rapid toggles on
    /// the same task race: responses apply in arrival order, and the last
    /// one wins.
    pub async fn toggle_completion(&mut self, id: &str) -> Result<(), TaskError> {
        let current = self
            .get(id)
            .map(|t| t.completed)
            .ok_or_else(|| TaskError::UnknownTask(id.to_string()))?;

        let body = TaskUpdate {
            completed: Some(!current),
            ..TaskUpdate::default()
        };
        match self.api.update_task(id, &body).await {
            Ok(task) => {
                self.replace_task(task);
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Add a subtask to a task; the server's updated parent replaces the
    /// local entry.
    ///
    /// Subtask titles are not validated client-side; the server decides.
    pub async fn add_subtask(&mut self, task_id: &str, title: &str) -> Result<(), TaskError> {
        let body = SubtaskCreate {
            title: title.to_string(),
        };
        match self.api.add_subtask(task_id, &body).await {
            Ok(task) => {
                self.replace_task(task);
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Toggle a subtask's completion state.
    ///
    /// Sends the negation of the subtask's current local value. On success
    /// only the matching subtask entry is spliced in; sibling subtasks and
    /// other tasks are untouched. Same race caveat as
    /// [`toggle_completion`](Self::toggle_completion).
    pub async fn toggle_subtask_completion(
        &mut self,
        task_id: &str,
        subtask_id: &str,
    ) -> Result<(), TaskError> {
        let task = self
            .get(task_id)
            .ok_or_else(|| TaskError::UnknownTask(task_id.to_string()))?;
        let current = task
            .subtasks
            .iter()
            .find(|s| s.id == subtask_id)
            .map(|s| s.completed)
            .ok_or_else(|| TaskError::UnknownSubtask(subtask_id.to_string()))?;

        let body = SubtaskUpdate {
            completed: !current,
        };
        match self.api.update_subtask(task_id, subtask_id, &body).await {
            Ok(subtask) => {
                if let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) {
                    if let Some(slot) = task.subtasks.iter_mut().find(|s| s.id == subtask_id) {
                        *slot = subtask;
                    }
                }
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Local-only transitions
    // ─────────────────────────────────────────────────────────────────────

    /// Enter inline-edit mode for a task, seeding the buffer from its
    /// current title and description.
    ///
    /// A new `start_edit` silently replaces any edit already in progress;
    /// the previous buffer is discarded without confirmation.
    pub fn start_edit(&mut self, id: &str) -> Result<(), TaskError> {
        let task = self
            .get(id)
            .ok_or_else(|| TaskError::UnknownTask(id.to_string()))?;
        self.edit = Some(EditState {
            task_id: task.id.clone(),
            title: task.title.clone(),
            description: task.description.clone(),
        });
        Ok(())
    }

    /// Leave edit mode, discarding the buffer and any field errors.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
        self.field_errors = FieldErrors::default();
    }

    // ─────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────

    /// Replace the collection entry matching the server task's id.
    ///
    /// No-op if the id is no longer present (e.g. a response arriving after
    /// a delete): last server response for an id wins, but a response never
    /// resurrects an entry.
    fn replace_task(&mut self, task: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *slot = task;
        }
    }

    /// Map an API failure, clearing the session on auth rejection.
    fn fail(&self, err: ApiError) -> TaskError {
        match err {
            ApiError::MissingToken => TaskError::MissingSession,
            ApiError::Unauthorized { message } => {
                if let Err(e) = self.session.clear() {
                    warn!(error = %e, "failed to clear session after auth rejection");
                }
                TaskError::SessionExpired { message }
            }
            other => TaskError::Api(other),
        }
    }
}

/// Validate title/description inputs for create and update.
fn validate_fields(title: &str, description: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if title.trim().is_empty() {
        errors.title = Some("Title is required".to_string());
    }
    if description.trim().is_empty() {
        errors.description = Some("Description is required".to_string());
    }
    errors
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
