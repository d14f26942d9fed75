//! Infrastructure layer: platform paths, local storage and configuration.

pub mod config_service;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::paths::DcaPaths;
pub use crate::storage::{FileKeyValueStore, MemoryKeyValueStore};
