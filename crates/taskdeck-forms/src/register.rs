//! Registration form model.

use tracing::debug;

use taskdeck_api::{ApiClient, ApiError};

use crate::errors::FormError;

/// Registration form state.
#[derive(Debug, Default)]
pub struct RegisterForm {
    /// Username input.
    pub username: String,
    /// Password input.
    pub password: String,
    /// User-facing error message from the last submit, if any.
    pub error: Option<String>,
    /// User-facing success message, if the last submit succeeded.
    pub success: Option<String>,
}

impl RegisterForm {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the form.
    ///
    /// A duplicate username (HTTP 400) gets a specific message; every
    /// other failure gets the generic one.
    pub async fn submit(&mut self, api: &ApiClient) -> Result<(), FormError> {
        if self.username.is_empty() || self.password.is_empty() {
            self.error = Some("Username and password are required".to_string());
            self.success = None;
            return Err(FormError::Validation);
        }

        match api.register(&self.username, &self.password).await {
            Ok(_) => {
                self.success = Some("User registered successfully".to_string());
                self.error = None;
                debug!(username = %self.username, "registration succeeded");
                Ok(())
            }
            Err(e) => {
                self.error = Some(match &e {
                    ApiError::Api { status: 400, .. } => "Username already exists".to_string(),
                    _ => "Error registering user".to_string(),
                });
                self.success = None;
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
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use taskdeck_api::ApiConfig;
    use taskdeck_auth::SessionStore;

    fn client_for(server: &MockServer, dir: &TempDir) -> ApiClient {
        let config = ApiConfig {
            base_url: server.uri(),
            ..ApiConfig::default()
        };
        let session = Arc::new(SessionStore::new(dir.path()));
        ApiClient::with_client(config, session, reqwest::Client::new())
    }

    #[tokio::test]
    async fn successful_registration_sets_success_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/register"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({"message": "registered"})),
            )
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let api = client_for(&server, &dir);

        let mut form = RegisterForm::new();
        form.username = "alice".to_string();
        form.password = "secret".to_string();

        form.submit(&api).await.unwrap();
        assert_eq!(form.success.as_deref(), Some("User registered successfully"));
        assert!(form.error.is_none());
    }

    #[tokio::test]
    async fn duplicate_username_gets_a_specific_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/register"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"error": "Username already exists"})),
            )
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let api = client_for(&server, &dir);

        let mut form = RegisterForm::new();
        form.username = "alice".to_string();
        form.password = "secret".to_string();

        let err = form.submit(&api).await.unwrap_err();
        assert!(matches!(err, FormError::Api(ApiError::Api { status: 400, .. })));
        assert_eq!(form.error.as_deref(), Some("Username already exists"));
        assert!(form.success.is_none());
    }

    #[tokio::test]
    async fn other_failures_get_the_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/register"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let api = client_for(&server, &dir);

        let mut form = RegisterForm::new();
        form.username = "alice".to_string();
        form.password = "secret".to_string();

        let err = form.submit(&api).await.unwrap_err();
        assert!(matches!(err, FormError::Api(_)));
        assert_eq!(form.error.as_deref(), Some("Error registering user"));
    }

    #[tokio::test]
    async fn empty_fields_never_hit_the_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/register"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let api = client_for(&server, &dir);

        let mut form = RegisterForm::new();
        let err = form.submit(&api).await.unwrap_err();
        assert!(matches!(err, FormError::Validation));
    }
}
