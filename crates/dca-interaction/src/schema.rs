//! Wire schemas of the case backend.
//!
//! Payloads are parsed into these types before any field is trusted; a body
//! that does not fit is a schema mismatch, never a partially read success.

use serde::{Deserialize, Serialize};

/// `GET /api/admin/cases` and `GET /api/dca/cases` body.
#[derive(Debug, Deserialize)]
pub(crate) struct CasesEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub cases: Option<Vec<T>>,
}

/// Non-success `POST /api/login` body.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LoginFailureBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /api/health` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub csv_loaded: bool,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Server-side aggregates from `GET /api/admin/metrics`.
///
/// `avg_recovery_probability` is a fraction (0..=1), unlike the percentage
/// the dashboard computes locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerMetrics {
    pub total_cases: u64,
    pub high_priority_cases: u64,
    pub avg_recovery_probability: f64,
    pub cases_at_risk: u64,
    #[serde(default)]
    pub active_cases: Option<u64>,
    #[serde(default)]
    pub resolved_cases: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MetricsEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub metrics: Option<ServerMetrics>,
}
