//! Priority filter applied to an already loaded case list.

use super::model::{CaseRecord, Priority};
use std::fmt;
use std::str::FromStr;

/// Single-select priority filter: `All`, `High`, `Medium` or `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    /// Every selectable value, in the order the selector lists them.
    pub const OPTIONS: [PriorityFilter; 4] = [
        PriorityFilter::All,
        PriorityFilter::Only(Priority::High),
        PriorityFilter::Only(Priority::Medium),
        PriorityFilter::Only(Priority::Low),
    ];

    /// Returns true if a row with `priority` passes this filter.
    pub fn matches(&self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(selected) => *selected == priority,
        }
    }

    /// Returns the rows that pass the filter, keeping their relative order.
    pub fn apply<'a, C: CaseRecord>(&self, cases: &'a [C]) -> Vec<&'a C> {
        cases.iter().filter(|c| self.matches(c.priority())).collect()
    }

    /// Option value (`"All"`, `"High"`, ...).
    pub fn value(&self) -> &'static str {
        match self {
            PriorityFilter::All => "All",
            PriorityFilter::Only(p) => p.as_str(),
        }
    }

    /// Option label shown next to the value in the selector.
    pub fn label(&self) -> &'static str {
        match self {
            PriorityFilter::All => "All",
            PriorityFilter::Only(p) => p.label(),
        }
    }
}

impl fmt::Display for PriorityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Error returned when a filter value is not one of the four options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown priority filter '{0}' (expected All, High, Medium or Low)")]
pub struct ParseFilterError(pub String);

impl FromStr for PriorityFilter {
    type Err = ParseFilterError;

    /// Values are matched exactly, like the backend enum.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(PriorityFilter::All),
            "High" => Ok(PriorityFilter::Only(Priority::High)),
            "Medium" => Ok(PriorityFilter::Only(Priority::Medium)),
            "Low" => Ok(PriorityFilter::Only(Priority::Low)),
            other => Err(ParseFilterError(other.to_string())),
        }
    }
}
