//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: `Session` and `User`
//! - `store`: storage traits and the key/value backed `SessionStore`

mod model;
mod store;

// Re-export public API
pub use model::{ROLE_ADMIN, ROLE_DCA, Session, User};
pub use store::{KeyValueStore, SessionRepository, SessionStore, TOKEN_KEY, USER_KEY};
