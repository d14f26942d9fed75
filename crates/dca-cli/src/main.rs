use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use dca_core::case::PriorityFilter;
use dca_core::route::Route;
use dca_infrastructure::DcaPaths;
use std::path::PathBuf;

mod commands;
mod context;
mod logging;
mod render;
mod shell;

use context::AppContext;

#[derive(Parser, Debug)]
#[command(name = "dca")]
#[command(about = "DCA Console - AI-prioritised debt collection case dashboard", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the per-user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Keep the session in memory instead of storage.toml
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Also write logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Copy)]
struct FilterArg {
    /// Recovery priority filter: All, High, Medium or Low
    #[arg(long, default_value_t = PriorityFilter::All)]
    filter: PriorityFilter,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sign in and store the session
    Login {
        #[arg(short, long)]
        username: String,
        /// Prompted for when omitted
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Clear the stored session
    Logout,
    /// Open a route (/, /login, /admin-dashboard, /dca-dashboard)
    Open {
        route: Route,
        #[command(flatten)]
        filter: FilterArg,
    },
    /// Open the admin dashboard
    Admin {
        #[command(flatten)]
        filter: FilterArg,
    },
    /// Open the DCA agent dashboard
    Agent {
        #[command(flatten)]
        filter: FilterArg,
    },
    /// Show the signed-in user
    Whoami,
    /// Check the case backend
    Health,
    /// Show case KPIs from the backend, or computed locally when unavailable
    Metrics,
    /// Start the interactive console
    Shell,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = DcaPaths::new()?;
    let config = context::load_config(&paths, cli.config.as_deref())?;
    let _log_guard = logging::init(&paths.logs_dir(), &config.log_level, cli.verbose)?;
    tracing::debug!(api_base_url = %config.api_base_url, ephemeral = cli.ephemeral, "Starting");

    let ctx = AppContext::new(&paths, config, cli.ephemeral)?;

    match cli.command {
        Commands::Login { username, password } => {
            commands::session::login(&ctx, username, password).await?
        }
        Commands::Logout => commands::session::logout(&ctx),
        Commands::Whoami => commands::session::whoami(&ctx),
        Commands::Open { route, filter } => {
            commands::dashboard::open(&ctx, route, filter.filter).await?
        }
        Commands::Admin { filter } => {
            commands::dashboard::open(&ctx, Route::AdminDashboard, filter.filter).await?
        }
        Commands::Agent { filter } => {
            commands::dashboard::open(&ctx, Route::DcaDashboard, filter.filter).await?
        }
        Commands::Health => commands::server::health(&ctx).await?,
        Commands::Metrics => commands::server::metrics(&ctx).await?,
        Commands::Shell => shell::run(&ctx).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dca_core::case::Priority;

    #[test]
    fn test_parse_open_with_filter() {
        let cli = Cli::try_parse_from(["dca", "open", "/dca-dashboard", "--filter", "Low"]).unwrap();
        match cli.command {
            Commands::Open { route, filter } => {
                assert_eq!(route, Route::DcaDashboard);
                assert_eq!(filter.filter, PriorityFilter::Only(Priority::Low));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_filter_defaults_to_all() {
        let cli = Cli::try_parse_from(["dca", "--ephemeral", "admin"]).unwrap();
        assert!(cli.ephemeral);
        assert!(matches!(
            cli.command,
            Commands::Admin {
                filter: FilterArg {
                    filter: PriorityFilter::All
                }
            }
        ));
    }

    #[test]
    fn test_rejects_unknown_values() {
        assert!(Cli::try_parse_from(["dca", "open", "/reports"]).is_err());
        assert!(Cli::try_parse_from(["dca", "agent", "--filter", "high"]).is_err());
        assert!(Cli::try_parse_from(["dca", "login"]).is_err());
    }

    #[test]
    fn test_login_password_optional() {
        let cli = Cli::try_parse_from(["dca", "login", "-u", "admin"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Login { password: None, .. }
        ));
    }
}
