//! Remote collaborators of the DCA console: case backend and authentication.

pub mod api_client;
pub mod auth_client;
pub mod case_client;
pub mod schema;

pub use api_client::ApiClient;
pub use auth_client::HttpAuthClient;
pub use case_client::HttpCaseClient;
pub use schema::{HealthStatus, ServerMetrics};
