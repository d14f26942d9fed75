//! Authentication service contract.
//!
//! The real authentication backend is an external collaborator; this module
//! only fixes the request/response shapes and the failure classification the
//! login controller relies on.

use crate::session::User;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Login form contents, sent as the JSON body of `POST /api/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Presence check only: both fields must be non-empty.
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

/// Successful login payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Classified login failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The service answered with a non-success status. Carries the
    /// server-provided message when there was one.
    #[error("login rejected: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    /// No response was received.
    #[error("login transport failure: {0}")]
    Transport(String),

    /// A response arrived but its body could not be parsed.
    #[error("malformed login response: {0}")]
    Malformed(String),
}

/// An abstract authentication service.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Submits credentials and returns the issued token and user record.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_check() {
        assert!(Credentials::new("a", "b").is_complete());
        assert!(!Credentials::new("", "b").is_complete());
        assert!(!Credentials::new("a", "").is_complete());
        // whitespace counts as present; no sanitization beyond presence
        assert!(Credentials::new(" ", " ").is_complete());
    }

    #[test]
    fn test_rejected_display() {
        let err = AuthError::Rejected { message: None };
        assert_eq!(err.to_string(), "login rejected: no message");
    }
}
