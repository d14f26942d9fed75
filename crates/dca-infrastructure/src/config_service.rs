//! Configuration loading.
//!
//! Reads `config.toml`, writing the defaults on first run so users have a
//! file to edit, then layers `DCA_*` environment overrides on top.

use crate::paths::DcaPaths;
use crate::storage::AtomicTomlFile;
use dca_core::config::AppConfig;
use dca_core::error::Result;
use std::path::{Path, PathBuf};

/// Loads `AppConfig` from a TOML file plus environment overrides.
pub struct ConfigService {
    file: AtomicTomlFile<AppConfig>,
    create_if_missing: bool,
}

impl ConfigService {
    /// Uses the default `config.toml` and creates it when missing.
    pub fn new(paths: &DcaPaths) -> Self {
        Self {
            file: AtomicTomlFile::new(paths.config_file()),
            create_if_missing: true,
        }
    }

    /// Uses an explicit file (e.g. `--config`). A missing explicit file is
    /// not created; defaults are used instead.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
            create_if_missing: false,
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Loads the config with overrides from the process environment.
    pub fn load(&self) -> Result<AppConfig> {
        self.load_with(|key| std::env::var(key).ok())
    }

    /// Loads the config with overrides from `lookup`.
    pub fn load_with<F>(&self, lookup: F) -> Result<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = match self.file.load()? {
            Some(config) => config,
            None => {
                let defaults = AppConfig::default();
                if self.create_if_missing && !self.file.path().exists() {
                    match self.file.save(&defaults) {
                        Ok(()) => tracing::info!(
                            path = %self.file.path().display(),
                            "Wrote default configuration"
                        ),
                        Err(e) => tracing::warn!(
                            path = %self.file.path().display(),
                            error = %e,
                            "Could not write default configuration"
                        ),
                    }
                }
                defaults
            }
        };

        config.with_overrides(lookup)
    }
}
