//! Login form model.

use tracing::debug;

use taskdeck_api::ApiClient;
use taskdeck_auth::SessionStore;

use crate::errors::FormError;

/// Login form state.
///
/// On a successful submit the returned token is persisted through the
/// session store, making the session visible to every component sharing it.
#[derive(Debug, Default)]
pub struct LoginForm {
    /// Username input.
    pub username: String,
    /// Password input.
    pub password: String,
    /// User-facing error message from the last submit, if any.
    pub error: Option<String>,
}

impl LoginForm {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the form.
    ///
    /// Empty fields fail validation without a request. Any API failure is
    /// reported as invalid credentials, matching the server's opaque
    /// login error.
    pub async fn submit(
        &mut self,
        api: &ApiClient,
        session: &SessionStore,
    ) -> Result<(), FormError> {
        if self.username.is_empty() || self.password.is_empty() {
            self.error = Some("Username and password are required".to_string());
            return Err(FormError::Validation);
        }

        match api.login(&self.username, &self.password).await {
            Ok(response) => {
                session.set_token(&response.token)?;
                self.error = None;
                debug!(username = %self.username, "login succeeded");
                Ok(())
            }
            Err(e) => {
                self.error = Some("Invalid credentials".to_string());
                Err(FormError::Api(e))
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use taskdeck_api::ApiConfig;

    fn client_for(server: &MockServer, session: &Arc<SessionStore>) -> ApiClient {
        let config = ApiConfig {
            base_url: server.uri(),
            ..ApiConfig::default()
        };
        ApiClient::with_client(config, session.clone(), reqwest::Client::new())
    }

    #[tokio::test]
    async fn successful_login_stores_the_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(body_json(serde_json::json!({
                "username": "alice",
                "password": "secret"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": "tok-1"})),
            )
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let session = Arc::new(SessionStore::new(dir.path()));
        let api = client_for(&server, &session);

        let mut form = LoginForm::new();
        form.username = "alice".to_string();
        form.password = "secret".to_string();

        form.submit(&api, &session).await.unwrap();
        assert_eq!(session.token().as_deref(), Some("tok-1"));
        assert!(form.error.is_none());
    }

    #[tokio::test]
    async fn failed_login_reports_invalid_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"error": "Invalid credentials"})),
            )
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let session = Arc::new(SessionStore::new(dir.path()));
        let api = client_for(&server, &session);

        let mut form = LoginForm::new();
        form.username = "alice".to_string();
        form.password = "wrong".to_string();

        let err = form.submit(&api, &session).await.unwrap_err();
        assert!(matches!(err, FormError::Api(_)));
        assert_eq!(form.error.as_deref(), Some("Invalid credentials"));
        assert!(session.token().is_none());
    }

    #[tokio::test]
    async fn empty_fields_never_hit_the_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let session = Arc::new(SessionStore::new(dir.path()));
        let api = client_for(&server, &session);

        let mut form = LoginForm::new();
        let err = form.submit(&api, &session).await.unwrap_err();
        assert!(matches!(err, FormError::Validation));
        assert!(form.error.is_some());
    }
}
