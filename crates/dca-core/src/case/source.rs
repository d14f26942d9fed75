//! Case source trait.
//!
//! Defines the interface the dashboards use to fetch case lists.

use super::model::{AssignedCase, Case};
use async_trait::async_trait;
use thiserror::Error;

/// Remote case endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseEndpoint {
    /// `GET /api/admin/cases`: every case.
    Admin,
    /// `GET /api/dca/cases`: cases assigned to the signed-in agency.
    Dca,
}

impl CaseEndpoint {
    /// Path relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            CaseEndpoint::Admin => "admin/cases",
            CaseEndpoint::Dca => "dca/cases",
        }
    }
}

/// Why a case fetch produced no usable list.
///
/// Every variant leads the dashboards to the mock dataset; the variant only
/// feeds diagnostics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never produced a response (connection refused, timeout...).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered with a non-success HTTP status.
    #[error("HTTP status {0}")]
    Status(u16),

    /// The payload reported `success: false`.
    #[error("server reported success=false")]
    Unsuccessful,

    /// The payload carried no `cases` list.
    #[error("response carried no case list")]
    MissingCases,

    /// The payload lacked another required object, named here.
    #[error("response carried no {0}")]
    MissingPayload(&'static str),

    /// The payload did not match the expected schema.
    #[error("response schema mismatch: {0}")]
    Schema(String),
}

/// An abstract source of case lists.
///
/// The production implementation talks HTTP; tests substitute fakes.
#[async_trait]
pub trait CaseSource: Send + Sync {
    /// Fetches every case for the admin dashboard.
    ///
    /// # Arguments
    ///
    /// * `token` - Session token, sent as a bearer credential
    async fn admin_cases(&self, token: &str) -> Result<Vec<Case>, FetchError>;

    /// Fetches the cases assigned to the signed-in agency.
    ///
    /// # Arguments
    ///
    /// * `token` - Session token, sent as a bearer credential
    async fn dca_cases(&self, token: &str) -> Result<Vec<AssignedCase>, FetchError>;
}
