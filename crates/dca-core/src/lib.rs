//! Domain layer of the DCA console.
//!
//! Holds the case and session models, the storage and remote-service traits
//! the other layers implement, and the pure filtering/statistics logic.

pub mod auth;
pub mod case;
pub mod config;
pub mod error;
pub mod route;
pub mod session;

// Re-export common error type
pub use error::DcaError;
pub use route::Route;
