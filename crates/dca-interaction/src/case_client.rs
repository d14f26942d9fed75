//! HttpCaseClient - REST implementation of `CaseSource`.
//!
//! Issues one authenticated GET per call and classifies every non-ideal
//! outcome into a `FetchError`; deciding what to show instead is left to the
//! dashboards.

use crate::api_client::ApiClient;
use crate::schema::{CasesEnvelope, HealthStatus, MetricsEnvelope, ServerMetrics};
use async_trait::async_trait;
use dca_core::case::{AssignedCase, Case, CaseEndpoint, CaseSource, FetchError};
use serde::de::DeserializeOwned;

const HEALTH_PATH: &str = "health";
const METRICS_PATH: &str = "admin/metrics";

/// Case source backed by the case-management REST API.
#[derive(Clone, Debug)]
pub struct HttpCaseClient {
    api: ApiClient,
}

impl HttpCaseClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    async fn fetch_cases<T: DeserializeOwned>(
        &self,
        endpoint: CaseEndpoint,
        token: &str,
    ) -> Result<Vec<T>, FetchError> {
        let body = self.get_text(endpoint.path(), Some(token)).await?;
        parse_cases(&body)
    }

    /// Probes `GET /api/health`. Not part of the dashboard flow.
    pub async fn health(&self) -> Result<HealthStatus, FetchError> {
        let body = self.get_text(HEALTH_PATH, None).await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Schema(e.to_string()))
    }

    /// Fetches the server-side admin aggregates from `GET /api/admin/metrics`.
    pub async fn admin_metrics(&self, token: &str) -> Result<ServerMetrics, FetchError> {
        let body = self.get_text(METRICS_PATH, Some(token)).await?;
        let envelope: MetricsEnvelope =
            serde_json::from_str(&body).map_err(|e| FetchError::Schema(e.to_string()))?;
        if !envelope.success {
            return Err(FetchError::Unsuccessful);
        }
        envelope.metrics.ok_or(FetchError::MissingPayload("metrics"))
    }

    async fn get_text(&self, path: &str, token: Option<&str>) -> Result<String, FetchError> {
        let url = self.api.url(path);
        tracing::debug!(%url, "GET");

        let mut request = self.api.client().get(&url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|err| FetchError::Transport(format!("failed to read body: {err}")))
    }
}

#[async_trait]
impl CaseSource for HttpCaseClient {
    async fn admin_cases(&self, token: &str) -> Result<Vec<Case>, FetchError> {
        self.fetch_cases(CaseEndpoint::Admin, token).await
    }

    async fn dca_cases(&self, token: &str) -> Result<Vec<AssignedCase>, FetchError> {
        self.fetch_cases(CaseEndpoint::Dca, token).await
    }
}

/// Validates a case list body: it must parse, say `success: true`, and carry
/// a `cases` array.
fn parse_cases<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, FetchError> {
    let envelope: CasesEnvelope<T> =
        serde_json::from_str(body).map_err(|e| FetchError::Schema(e.to_string()))?;

    if !envelope.success {
        return Err(FetchError::Unsuccessful);
    }

    envelope.cases.ok_or(FetchError::MissingCases)
}
