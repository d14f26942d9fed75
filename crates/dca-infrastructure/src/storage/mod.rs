//! Storage layer: atomic TOML files and key/value stores.

mod atomic_toml;
mod file_kv;
mod memory_kv;

pub use atomic_toml::{AtomicTomlError, AtomicTomlFile};
pub use file_kv::FileKeyValueStore;
pub use memory_kv::MemoryKeyValueStore;
