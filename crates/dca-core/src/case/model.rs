//! Case domain models.
//!
//! Both record kinds are read-only snapshots returned by the case backend.
//! `ai_priority` is supplied by the backend scoring model and is never
//! recomputed from `recovery_probability` on this side.

use serde::{Deserialize, Serialize};
use std::fmt;

/// AI recovery priority assigned by the backend.
///
/// The label describes recovery likelihood, not risk severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// All priorities in display order.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Wire name, as sent by the backend (`"High"`, `"Medium"`, `"Low"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Fixed display label used in tables and filter options.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High Recovery Priority",
            Priority::Medium => "Moderate Recovery Priority",
            Priority::Low => "Low Recovery Probability",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recovery status bucket derived from the recovery probability.
///
/// Only the admin view shows this bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryStatus {
    LikelyRecoverable,
    ModerateRisk,
    HighRisk,
}

impl RecoveryStatus {
    /// Buckets a probability: `>= 0.8` likely, `< 0.4` high risk, else moderate.
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 0.8 {
            RecoveryStatus::LikelyRecoverable
        } else if probability < 0.4 {
            RecoveryStatus::HighRisk
        } else {
            RecoveryStatus::ModerateRisk
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecoveryStatus::LikelyRecoverable => "Likely Recoverable",
            RecoveryStatus::ModerateRisk => "Moderate Risk",
            RecoveryStatus::HighRisk => "High Risk",
        }
    }
}

impl fmt::Display for RecoveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A debt case as listed on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub id: u64,
    pub debtor_name: String,
    pub amount: f64,
    pub status: String,
    #[serde(default)]
    pub recovery_probability: Option<f64>,
    pub ai_priority: Priority,
    pub days_overdue: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub past_defaults: Option<u32>,
}

impl Case {
    /// Recovery status bucket; a missing probability counts as 0.
    pub fn recovery_status(&self) -> RecoveryStatus {
        RecoveryStatus::from_probability(self.recovery_probability.unwrap_or(0.0))
    }
}

/// A case assigned to the signed-in agency, as listed on the DCA dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedCase {
    pub id: u64,
    pub amount: f64,
    pub days_overdue: u32,
    pub ai_priority: Priority,
    pub recovery_probability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Fields shared by every case kind, used by filtering and statistics.
pub trait CaseRecord {
    fn id(&self) -> u64;
    fn priority(&self) -> Priority;
    fn recovery_probability(&self) -> Option<f64>;
    fn days_overdue(&self) -> u32;
    fn amount(&self) -> f64;
}

impl CaseRecord for Case {
    fn id(&self) -> u64 {
        self.id
    }

    fn priority(&self) -> Priority {
        self.ai_priority
    }

    fn recovery_probability(&self) -> Option<f64> {
        self.recovery_probability
    }

    fn days_overdue(&self) -> u32 {
        self.days_overdue
    }

    fn amount(&self) -> f64 {
        self.amount
    }
}

impl CaseRecord for AssignedCase {
    fn id(&self) -> u64 {
        self.id
    }

    fn priority(&self) -> Priority {
        self.ai_priority
    }

    fn recovery_probability(&self) -> Option<f64> {
        Some(self.recovery_probability)
    }

    fn days_overdue(&self) -> u32 {
        self.days_overdue
    }

    fn amount(&self) -> f64 {
        self.amount
    }
}
