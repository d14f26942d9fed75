//! File-backed key/value storage.

use super::atomic_toml::AtomicTomlFile;
use crate::paths::DcaPaths;
use dca_core::error::Result;
use dca_core::session::KeyValueStore;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// String key/value storage persisted as a flat TOML table.
///
/// The local equivalent of browser storage: values survive restarts until
/// removed. Each write is a locked read-modify-write of the whole file.
pub struct FileKeyValueStore {
    file: AtomicTomlFile<BTreeMap<String, String>>,
}

impl FileKeyValueStore {
    /// Opens the default `storage.toml` under the given paths.
    pub fn new(paths: &DcaPaths) -> Self {
        Self::with_path(paths.storage_file())
    }

    /// Opens a storage file at a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path).private(),
        }
    }

    fn entries(&self) -> Result<BTreeMap<String, String>> {
        Ok(self.file.load()?.unwrap_or_default())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.file.update(BTreeMap::new(), |entries| {
            entries.insert(key.to_string(), value.to_string());
        })?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        if !self.file.path().exists() {
            return Ok(());
        }
        self.file.update(BTreeMap::new(), |entries| {
            entries.remove(key);
        })?;
        Ok(())
    }
}
