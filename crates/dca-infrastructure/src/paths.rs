//! Unified path management for DCA console files.
//!
//! This ensures consistency across all platforms (Linux, macOS, Windows).

use std::path::PathBuf;

/// Application directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "dca-console";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for dca_core::DcaError {
    fn from(err: PathError) -> Self {
        dca_core::DcaError::config(err.to_string())
    }
}

/// Unified path management for the DCA console.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/dca-console/       # Config directory (platform specific)
/// ├── config.toml              # Application configuration
/// ├── storage.toml             # Local key/value storage (session token, user)
/// └── logs/                    # Application logs
///     └── dca.log.YYYY-MM-DD
/// ```
#[derive(Debug, Clone)]
pub struct DcaPaths {
    root: PathBuf,
}

impl DcaPaths {
    /// Resolves the platform config directory (`dirs::config_dir`).
    pub fn new() -> Result<Self, PathError> {
        let base = dirs::config_dir().ok_or(PathError::ConfigDirNotFound)?;
        Ok(Self {
            root: base.join(APP_DIR_NAME),
        })
    }

    /// Uses a custom root directory (for testing).
    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    /// Returns the application config directory.
    pub fn config_dir(&self) -> &PathBuf {
        &self.root
    }

    /// Returns the path to the main configuration file.
    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// Returns the path to the local key/value storage file.
    ///
    /// # Security Note
    ///
    /// This file holds the session token in plaintext; it is written with
    /// 600 permissions on Unix.
    pub fn storage_file(&self) -> PathBuf {
        self.root.join("storage.toml")
    }

    /// Returns the path to the logs directory.
    pub fn logs_dir(&self) -> PathBuf {
        self.root.join("logs")
    }
}
