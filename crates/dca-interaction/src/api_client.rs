//! Shared HTTP plumbing for the case backend.

use dca_core::DcaError;
use dca_core::config::AppConfig;
use reqwest::Client;

/// A `reqwest` client bound to the configured API base URL.
///
/// Cheap to clone; the case and auth clients share one connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client from configuration. The timeout is only applied when
    /// `request_timeout_secs` is set.
    pub fn from_config(config: &AppConfig) -> Result<Self, DcaError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| DcaError::http(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(client, &config.api_base_url))
    }

    /// Wraps an existing client (for testing or custom TLS setups).
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// Joins a relative endpoint path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
