//! Case domain module.
//!
//! # Module Structure
//!
//! - `model`: case records, priorities and recovery status buckets
//! - `filter`: the single-select priority filter
//! - `stats`: admin dashboard aggregates
//! - `source`: the `CaseSource` trait and fetch failure classification

mod filter;
mod model;
mod source;
mod stats;

// Re-export public API
pub use filter::{ParseFilterError, PriorityFilter};
pub use model::{AssignedCase, Case, CaseRecord, Priority, RecoveryStatus};
pub use source::{CaseEndpoint, CaseSource, FetchError};
pub use stats::{AT_RISK_DAYS, CaseStats};
