//! The API client.
//!
//! One method per server operation. Authenticated methods read the bearer
//! token from the session store immediately before sending, so a token
//! change (login, logout) takes effect on the next call issued, never on
//! in-flight ones.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use taskdeck_auth::SessionStore;
use taskdeck_core::{Subtask, Task};

use crate::errors::ApiError;
use crate::types::{
    Credentials, ErrorBody, LoginResponse, RegisterResponse, SubtaskCreate, SubtaskUpdate,
    TaskCreate, TaskUpdate,
};

/// API client configuration.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Base URL of the task API server, without a trailing slash.
    pub base_url: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_ms: 30_000,
        }
    }
}

/// HTTP client for the task API.
pub struct ApiClient {
    config: ApiConfig,
    http: reqwest::Client,
    session: Arc<SessionStore>,
}

impl ApiClient {
    /// Create a new client with its own HTTP connection pool.
    pub fn new(config: ApiConfig, session: Arc<SessionStore>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self::with_client(config, session, http))
    }

    /// Create a new client with a shared HTTP client.
    #[must_use]
    pub fn with_client(
        config: ApiConfig,
        session: Arc<SessionStore>,
        http: reqwest::Client,
    ) -> Self {
        Self {
            config,
            http,
            session,
        }
    }

    /// Base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // ─────────────────────────────────────────────────────────────────────
    // Auth endpoints (no token)
    // ─────────────────────────────────────────────────────────────────────

    /// Register a new account.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<RegisterResponse, ApiError> {
        let url = format!("{}/api/auth/register", self.config.base_url);
        let body = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self.http.post(&url).json(&body).send().await?;
        Self::decode(response).await
    }

    /// Log in and obtain a bearer token.
    ///
    /// The caller decides where the token goes; this method does not write
    /// to the session store.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = format!("{}/api/auth/login", self.config.base_url);
        let body = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self.http.post(&url).json(&body).send().await?;
        Self::decode(response).await
    }

    // ─────────────────────────────────────────────────────────────────────
    // Task endpoints (bearer token)
    // ─────────────────────────────────────────────────────────────────────

    /// Fetch the full task collection for the current session.
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let token = self.bearer_token()?;
        let url = format!("{}/api/tasks", self.config.base_url);
        let response = self.http.get(&url).bearer_auth(token).send().await?;
        let tasks: Vec<Task> = Self::decode(response).await?;
        debug!(count = tasks.len(), "fetched task collection");
        Ok(tasks)
    }

    /// Create a task. The server assigns id and creation timestamp.
    pub async fn create_task(&self, body: &TaskCreate) -> Result<Task, ApiError> {
        let token = self.bearer_token()?;
        let url = format!("{}/api/tasks", self.config.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Update a task. Returns the server's representation.
    pub async fn update_task(&self, id: &str, body: &TaskUpdate) -> Result<Task, ApiError> {
        let token = self.bearer_token()?;
        let url = format!("{}/api/tasks/{id}", self.config.base_url);
        let response = self
            .http
            .put(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Delete a task. The response body is ignored on success.
    pub async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        let token = self.bearer_token()?;
        let url = format!("{}/api/tasks/{id}", self.config.base_url);
        let response = self.http.delete(&url).bearer_auth(token).send().await?;

        let status = response.status();
        if status.is_success() {
            debug!(%id, "task deleted");
            return Ok(());
        }
        let body = response.text().await?;
        Err(Self::error_from(status, &body))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Subtask endpoints (bearer token)
    // ─────────────────────────────────────────────────────────────────────

    /// Add a subtask to a task. Returns the updated parent task.
    pub async fn add_subtask(&self, task_id: &str, body: &SubtaskCreate) -> Result<Task, ApiError> {
        let token = self.bearer_token()?;
        let url = format!("{}/api/tasks/{task_id}/subtasks", self.config.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Update a subtask's completion state. Returns the updated subtask.
    pub async fn update_subtask(
        &self,
        task_id: &str,
        subtask_id: &str,
        body: &SubtaskUpdate,
    ) -> Result<Subtask, ApiError> {
        let token = self.bearer_token()?;
        let url = format!(
            "{}/api/tasks/{task_id}/subtasks/{subtask_id}",
            self.config.base_url
        );
        let response = self
            .http
            .put(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    // ─────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────

    /// Read the bearer token fresh from the session store.
    fn bearer_token(&self) -> Result<String, ApiError> {
        self.session.token().ok_or(ApiError::MissingToken)
    }

    /// Decode a response: 2xx bodies parse as `T`, everything else maps to
    /// a typed error.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(Self::error_from(status, &body))
        }
    }

    /// Map a non-2xx response to an [`ApiError`].
    ///
    /// The server reports failures as `{"error": "..."}`; fall back to the
    /// raw body or the status text when that shape is absent.
    fn error_from(status: StatusCode, body: &str) -> ApiError {
        let message = serde_json::from_str::<ErrorBody>(body).map_or_else(
            |_| {
                if body.trim().is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                } else {
                    body.to_string()
                }
            },
            |parsed| parsed.error,
        );

        if status == StatusCode::UNAUTHORIZED {
            ApiError::Unauthorized { message }
        } else {
            ApiError::Api {
                status: status.as_u16(),
                message,
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
