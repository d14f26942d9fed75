use anyhow::{Context, Result};
use dca_application::Console;
use dca_core::config::AppConfig;
use dca_core::session::{KeyValueStore, SessionRepository, SessionStore};
use dca_infrastructure::{ConfigService, DcaPaths, FileKeyValueStore, MemoryKeyValueStore};
use dca_interaction::{ApiClient, HttpAuthClient, HttpCaseClient};
use std::path::Path;
use std::sync::Arc;

/// Loads `config.toml` (or `explicit`) and applies environment overrides.
pub fn load_config(paths: &DcaPaths, explicit: Option<&Path>) -> Result<AppConfig> {
    let service = match explicit {
        Some(path) => ConfigService::with_path(path.to_path_buf()),
        None => ConfigService::new(paths),
    };
    service
        .load()
        .with_context(|| format!("Failed to load configuration from {}", service.path().display()))
}

/// Services shared by every command.
pub struct AppContext {
    pub console: Console,
    /// Direct client for the endpoints outside the dashboards (health, metrics).
    pub cases: HttpCaseClient,
}

impl AppContext {
    pub fn new(paths: &DcaPaths, config: AppConfig, ephemeral: bool) -> Result<Self> {
        let storage: Arc<dyn KeyValueStore> = if ephemeral {
            Arc::new(MemoryKeyValueStore::new())
        } else {
            Arc::new(FileKeyValueStore::new(paths))
        };
        let sessions: Arc<dyn SessionRepository> = Arc::new(SessionStore::new(storage));

        let api = ApiClient::from_config(&config).context("Failed to build HTTP client")?;
        let cases = HttpCaseClient::new(api.clone());
        let console = Console::new(
            sessions,
            Arc::new(HttpAuthClient::new(api)),
            Arc::new(cases.clone()),
            config,
        );

        Ok(Self { console, cases })
    }

    pub fn config(&self) -> &AppConfig {
        self.console.config()
    }
}
