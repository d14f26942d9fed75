//! Aggregate statistics shown above the admin case table.

use super::model::{CaseRecord, Priority};

/// Cases overdue by more than this many days count as at risk.
pub const AT_RISK_DAYS: u32 = 90;

/// Admin dashboard KPIs, always computed over the unfiltered list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CaseStats {
    pub total_cases: usize,
    pub high_priority_cases: usize,
    /// Mean recovery probability as a percentage (0..=100).
    pub avg_recovery_percent: f64,
    pub cases_at_risk: usize,
}

impl CaseStats {
    /// Computes the four KPIs. Missing probabilities count as 0 and an
    /// empty list yields an average of 0.
    pub fn compute<C: CaseRecord>(cases: &[C]) -> Self {
        let total_cases = cases.len();
        let high_priority_cases = cases
            .iter()
            .filter(|c| c.priority() == Priority::High)
            .count();
        let cases_at_risk = cases
            .iter()
            .filter(|c| c.days_overdue() > AT_RISK_DAYS)
            .count();

        let avg_recovery_percent = if total_cases == 0 {
            0.0
        } else {
            let sum: f64 = cases
                .iter()
                .map(|c| c.recovery_probability().unwrap_or(0.0))
                .sum();
            sum / total_cases as f64 * 100.0
        };

        Self {
            total_cases,
            high_priority_cases,
            avg_recovery_percent,
            cases_at_risk,
        }
    }

    /// Average formatted to one decimal place, e.g. `"66.5%"`.
    pub fn avg_recovery_display(&self) -> String {
        format!("{:.1}%", self.avg_recovery_percent)
    }
}
