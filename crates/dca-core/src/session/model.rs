//! Session domain model.

use serde::{Deserialize, Serialize};

/// Role string of a debt collection agency agent.
pub const ROLE_DCA: &str = "dca";
/// Role string of an administrator.
pub const ROLE_ADMIN: &str = "admin";

/// The signed-in user as returned by the authentication service.
///
/// The role is kept verbatim; only `"dca"` carries special meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl User {
    pub fn new(username: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role: Some(role.into()),
        }
    }

    /// Returns true if this user is a DCA agent.
    pub fn is_dca(&self) -> bool {
        self.role.as_deref() == Some(ROLE_DCA)
    }
}

/// An authenticated session: opaque token plus the user record.
///
/// No expiry is tracked; a session lives until logout or a manual clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_without_role_roundtrips_without_field() {
        let user = User {
            username: "ops".to_string(),
            role: None,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"username":"ops"}"#);
        assert!(!user.is_dca());
    }

    #[test]
    fn test_is_dca_is_exact() {
        assert!(User::new("agent", "dca").is_dca());
        assert!(!User::new("agent", "DCA").is_dca());
        assert!(!User::new("root", "admin").is_dca());
    }
}
