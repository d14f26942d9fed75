use crate::context::AppContext;
use anyhow::{Result, bail};
use colored::Colorize;
use dca_application::Screen;
use dca_core::case::CaseStats;
use dca_core::route::Route;
use dca_interaction::ServerMetrics;

/// `dca health`.
pub async fn health(ctx: &AppContext) -> Result<()> {
    match ctx.cases.health().await {
        Ok(health) => {
            let status = if health.is_healthy() {
                health.status.green()
            } else {
                health.status.yellow()
            };
            println!("Backend:    {} ({})", status, ctx.config().api_base_url);
            if !health.message.is_empty() {
                println!("Message:    {}", health.message);
            }
            println!("CSV loaded: {}", health.csv_loaded);
            Ok(())
        }
        Err(e) => bail!("Backend unreachable at {}: {}", ctx.config().api_base_url, e),
    }
}

/// `dca metrics`. Falls back to aggregates over the admin case list.
pub async fn metrics(ctx: &AppContext) -> Result<()> {
    let Some(session) = ctx.console.session() else {
        bail!("Not signed in. Run `dca login --username <name>` first.");
    };

    match ctx.cases.admin_metrics(&session.token).await {
        Ok(metrics) => {
            print_server_metrics(&metrics);
            return Ok(());
        }
        Err(e) => {
            tracing::warn!(error = %e, "Server metrics unavailable, computing locally");
            println!(
                "{}",
                "Server metrics unavailable; computed from the case list.".bright_black()
            );
        }
    }

    let Some(opened) = super::navigate(&ctx.console, Route::AdminDashboard).await? else {
        return Ok(());
    };
    match &opened.screen {
        Screen::Admin(state) => {
            print_local_stats(&state.stats());
            Ok(())
        }
        _ => bail!("Admin dashboard unavailable (landed on {})", opened.route),
    }
}

fn print_server_metrics(metrics: &ServerMetrics) {
    println!("{:<26}{}", "Total Cases:", metrics.total_cases);
    println!("{:<26}{}", "High Recovery Priority:", metrics.high_priority_cases);
    println!(
        "{:<26}{:.1}%",
        "Avg Recovery Probability:",
        metrics.avg_recovery_probability * 100.0
    );
    println!("{:<26}{}", "Cases at Risk (90+ days):", metrics.cases_at_risk);
    if let Some(active) = metrics.active_cases {
        println!("{:<26}{}", "Active Cases:", active);
    }
    if let Some(resolved) = metrics.resolved_cases {
        println!("{:<26}{}", "Resolved Cases:", resolved);
    }
}

fn print_local_stats(stats: &CaseStats) {
    println!("{:<26}{}", "Total Cases:", stats.total_cases);
    println!("{:<26}{}", "High Recovery Priority:", stats.high_priority_cases);
    println!("{:<26}{}", "Avg Recovery Probability:", stats.avg_recovery_display());
    println!("{:<26}{}", "Cases at Risk (90+ days):", stats.cases_at_risk);
}
