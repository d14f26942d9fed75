//! HttpAuthClient - REST implementation of `AuthService`.

use crate::api_client::ApiClient;
use crate::schema::LoginFailureBody;
use async_trait::async_trait;
use dca_core::auth::{AuthError, AuthService, Credentials, LoginResponse};

const LOGIN_PATH: &str = "login";

/// Authenticates against `POST /api/login`.
#[derive(Clone, Debug)]
pub struct HttpAuthClient {
    api: ApiClient,
}

impl HttpAuthClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthService for HttpAuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError> {
        let url = self.api.url(LOGIN_PATH);
        tracing::debug!(%url, username = %credentials.username, "POST login");

        let response = self
            .api
            .client()
            .post(&url)
            .json(credentials)
            .send()
            .await
            .map_err(|err| AuthError::Transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| AuthError::Transport(format!("failed to read body: {err}")))?;

        // Both branches need a JSON body; anything else is malformed
        if status.is_success() {
            serde_json::from_str::<LoginResponse>(&body)
                .map_err(|e| AuthError::Malformed(e.to_string()))
        } else {
            let failure: LoginFailureBody =
                serde_json::from_str(&body).map_err(|e| AuthError::Malformed(e.to_string()))?;
            Err(AuthError::Rejected {
                message: failure.message.filter(|m| !m.is_empty()),
            })
        }
    }
}
