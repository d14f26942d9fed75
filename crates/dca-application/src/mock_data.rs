//! Fixed fallback datasets.
//!
//! Shown whenever the case backend is unreachable or returns no usable list,
//! so the dashboards can be exercised without a live backend.

use dca_core::case::{AssignedCase, Case, Priority};

/// Eight cases for the admin dashboard.
pub fn mock_admin_cases() -> Vec<Case> {
    vec![
        admin(1, "John Smith", 15000.0, "active", 0.85, Priority::High, 120),
        admin(2, "Sarah Johnson", 8500.0, "active", 0.62, Priority::Medium, 45),
        admin(3, "Michael Brown", 22000.0, "active", 0.34, Priority::Low, 15),
        admin(4, "Emily Davis", 18500.0, "active", 0.78, Priority::High, 95),
        admin(5, "David Wilson", 12000.0, "resolved", 0.92, Priority::Medium, 30),
        admin(6, "Lisa Martinez", 9500.0, "active", 0.55, Priority::Medium, 60),
        admin(7, "James Anderson", 28000.0, "active", 0.28, Priority::Low, 10),
        admin(8, "Jessica Taylor", 16500.0, "active", 0.88, Priority::High, 105),
    ]
}

/// Seven cases for the DCA dashboard, grouped by priority.
pub fn mock_assigned_cases() -> Vec<AssignedCase> {
    vec![
        assigned(101, 15000.0, 120, Priority::High, 0.85),
        assigned(104, 18500.0, 95, Priority::High, 0.78),
        assigned(108, 16500.0, 105, Priority::High, 0.88),
        assigned(102, 8500.0, 45, Priority::Medium, 0.62),
        assigned(106, 9500.0, 60, Priority::Medium, 0.55),
        assigned(103, 22000.0, 15, Priority::Low, 0.34),
        assigned(107, 28000.0, 10, Priority::Low, 0.28),
    ]
}

fn admin(
    id: u64,
    debtor_name: &str,
    amount: f64,
    status: &str,
    recovery_probability: f64,
    ai_priority: Priority,
    days_overdue: u32,
) -> Case {
    Case {
        id,
        debtor_name: debtor_name.to_string(),
        amount,
        status: status.to_string(),
        recovery_probability: Some(recovery_probability),
        ai_priority,
        days_overdue,
        region: None,
        past_defaults: None,
    }
}

fn assigned(
    id: u64,
    amount: f64,
    days_overdue: u32,
    ai_priority: Priority,
    recovery_probability: f64,
) -> AssignedCase {
    AssignedCase {
        id,
        amount,
        days_overdue,
        ai_priority,
        recovery_probability,
        region: None,
    }
}
