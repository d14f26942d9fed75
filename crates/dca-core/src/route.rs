//! Navigable routes.

use crate::session::User;
use std::fmt;
use std::str::FromStr;

/// The four routes of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`, which always redirects to the login screen.
    Root,
    Login,
    AdminDashboard,
    DcaDashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Login => "/login",
            Route::AdminDashboard => "/admin-dashboard",
            Route::DcaDashboard => "/dca-dashboard",
        }
    }

    /// Landing page after login: `dca` users go to the DCA view, every other
    /// role (or none) to the admin view.
    pub fn home_for(user: &User) -> Route {
        if user.is_dca() {
            Route::DcaDashboard
        } else {
            Route::AdminDashboard
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route '{0}'")]
pub struct UnknownRoute(pub String);

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_end_matches('/') {
            "" => Ok(Route::Root),
            "/login" | "login" => Ok(Route::Login),
            "/admin-dashboard" | "admin-dashboard" => Ok(Route::AdminDashboard),
            "/dca-dashboard" | "dca-dashboard" => Ok(Route::DcaDashboard),
            _ => Err(UnknownRoute(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paths() {
        assert_eq!("/".parse(), Ok(Route::Root));
        assert_eq!("/login".parse(), Ok(Route::Login));
        assert_eq!("/admin-dashboard/".parse(), Ok(Route::AdminDashboard));
        assert_eq!("dca-dashboard".parse(), Ok(Route::DcaDashboard));
        assert!("/reports".parse::<Route>().is_err());
    }

    #[test]
    fn test_path_roundtrip() {
        for route in [
            Route::Root,
            Route::Login,
            Route::AdminDashboard,
            Route::DcaDashboard,
        ] {
            assert_eq!(route.path().parse(), Ok(route));
        }
    }

    #[test]
    fn test_home_for_role() {
        assert_eq!(Route::home_for(&User::new("x", "dca")), Route::DcaDashboard);
        assert_eq!(Route::home_for(&User::new("x", "admin")), Route::AdminDashboard);
        assert_eq!(Route::home_for(&User::new("x", "auditor")), Route::AdminDashboard);
        let no_role = User {
            username: "x".to_string(),
            role: None,
        };
        assert_eq!(Route::home_for(&no_role), Route::AdminDashboard);
    }
}
