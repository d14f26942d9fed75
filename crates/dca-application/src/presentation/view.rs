//! Screen view models for the two dashboards.

use super::format::{format_amount, format_days, format_probability};
use super::table::{Cell, CellStyle, Table};
use crate::dashboard::DashboardState;
use dca_core::case::{AssignedCase, Case, PriorityFilter};

pub const ADMIN_TITLE: &str = "AI-Driven DCA Management System";
pub const DCA_TITLE: &str = "DCA Dashboard – Assigned Cases";
pub const DCA_SUBTITLE: &str =
    "View and act on cases assigned to your agency based on AI recovery priority.";
pub const PRIORITY_NOTE: &str = "AI priority reflects recovery likelihood, not risk severity.";
pub const ADMIN_LOADING: &str = "Loading cases...";
pub const DCA_LOADING: &str = "Loading assigned cases...";
pub const ADMIN_EMPTY: &str = "No cases found";
pub const DCA_EMPTY: &str = "No cases match the selected filter";

const ADMIN_HEADERS: [&str; 7] = [
    "ID",
    "Debtor Name",
    "Amount",
    "Days Overdue",
    "Recovery Priority",
    "Recovery Probability",
    "Recovery Status",
];

const DCA_HEADERS: [&str; 5] = [
    "Case ID",
    "Amount Due",
    "Days Overdue",
    "Recovery Priority",
    "Recovery Probability",
];

/// Body of a dashboard: a loading line or the case table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewBody {
    Loading(&'static str),
    Table(Table),
}

/// Everything a front end needs to draw one dashboard screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    /// `"Welcome, <user>"` or `"Agent: <user>"`.
    pub user_line: String,
    /// KPI cards as label/value pairs. Empty on the DCA screen.
    pub stats: Vec<(&'static str, String)>,
    pub heading: String,
    pub filter: PriorityFilter,
    pub note: &'static str,
    /// Set when the rows come from the fallback dataset.
    pub offline: bool,
    pub body: ViewBody,
}

impl ScreenView {
    /// Renders the whole screen as lines of text.
    pub fn render_with<F>(&self, paint: F) -> Vec<String>
    where
        F: Fn(CellStyle, &str) -> String,
    {
        let mut lines = vec![paint(CellStyle::Header, self.title)];
        if let Some(subtitle) = self.subtitle {
            lines.push(subtitle.to_string());
        }
        lines.push(self.user_line.clone());
        lines.push(String::new());

        if !self.stats.is_empty() {
            for (label, value) in &self.stats {
                lines.push(format!("{:<26}{}", format!("{}:", label), value));
            }
            lines.push(String::new());
        }

        lines.push(paint(CellStyle::Header, &self.heading));
        lines.push(format!(
            "Filter by Recovery Priority: {}",
            self.filter.label()
        ));
        lines.push(format!("Note: {}", self.note));
        if self.offline {
            lines.push(paint(
                CellStyle::Muted,
                "(backend unavailable, showing sample data)",
            ));
        }
        lines.push(String::new());

        match &self.body {
            ViewBody::Loading(text) => lines.push(paint(CellStyle::Muted, *text)),
            ViewBody::Table(table) => lines.extend(table.render_with(&paint)),
        }
        lines
    }

    pub fn render_plain(&self) -> Vec<String> {
        self.render_with(|_, text| text.to_string())
    }
}

/// Builds the admin screen: KPIs over every case, table over the filtered rows.
pub fn admin_view(state: &DashboardState<Case>) -> ScreenView {
    let body = if state.is_loading() {
        ViewBody::Loading(ADMIN_LOADING)
    } else {
        let mut table = Table::new(ADMIN_HEADERS.to_vec(), ADMIN_EMPTY);
        for case in state.visible() {
            let status = case.recovery_status();
            table.push_row(vec![
                Cell::plain(case.id.to_string()),
                Cell::plain(case.debtor_name.clone()),
                Cell::plain(format_amount(case.amount)),
                Cell::plain(format_days(case.days_overdue)),
                Cell::styled(
                    case.ai_priority.label(),
                    CellStyle::Priority(case.ai_priority),
                ),
                Cell::plain(format_probability(case.recovery_probability)),
                Cell::styled(status.label(), CellStyle::Status(status)),
            ]);
        }
        ViewBody::Table(table)
    };

    let stats = state.stats();
    ScreenView {
        title: ADMIN_TITLE,
        subtitle: None,
        user_line: format!("Welcome, {}", state.user().username),
        stats: vec![
            ("Total Cases", stats.total_cases.to_string()),
            ("High Recovery Priority", stats.high_priority_cases.to_string()),
            ("Avg Recovery Probability", stats.avg_recovery_display()),
            ("Cases at Risk (90+ days)", stats.cases_at_risk.to_string()),
        ],
        heading: "Debt Collection Cases".to_string(),
        filter: state.filter(),
        note: PRIORITY_NOTE,
        offline: state.load_state().is_fallback(),
        body,
    }
}

/// Builds the DCA screen. The heading counts the filtered rows.
pub fn dca_view(state: &DashboardState<AssignedCase>) -> ScreenView {
    let visible = state.visible();

    let body = if state.is_loading() {
        ViewBody::Loading(DCA_LOADING)
    } else {
        let mut table = Table::new(DCA_HEADERS.to_vec(), DCA_EMPTY);
        for case in &visible {
            table.push_row(vec![
                Cell::plain(format!("#{}", case.id)),
                Cell::plain(format_amount(case.amount)),
                Cell::plain(format_days(case.days_overdue)),
                Cell::styled(
                    case.ai_priority.label(),
                    CellStyle::Priority(case.ai_priority),
                ),
                Cell::plain(format_probability(Some(case.recovery_probability))),
            ]);
        }
        ViewBody::Table(table)
    };

    ScreenView {
        title: DCA_TITLE,
        subtitle: Some(DCA_SUBTITLE),
        user_line: format!("Agent: {}", state.user().username),
        stats: Vec::new(),
        heading: format!("Your Assigned Cases ({})", visible.len()),
        filter: state.filter(),
        note: PRIORITY_NOTE,
        offline: state.load_state().is_fallback(),
        body,
    }
}
