//! Login controller.
//!
//! Validates the form, authenticates (built-in development accounts first,
//! then the authentication service), persists the session and picks the
//! landing page from the user's role.

use dca_core::auth::{AuthError, AuthService, Credentials, LoginResponse};
use dca_core::config::AppConfig;
use dca_core::route::Route;
use dca_core::session::{ROLE_ADMIN, ROLE_DCA, Session, SessionRepository, User};
use std::sync::Arc;

pub const MISSING_FIELDS_MESSAGE: &str = "Please enter both username and password";
pub const REJECTED_MESSAGE: &str = "Login failed. Please check your credentials.";
/// Shown when the authentication service cannot be reached or answers garbage.
pub const UNREACHABLE_MESSAGE: &str =
    "Invalid credentials. Admin: admin/admin123 | DCA: dca/dca123";

/// Login screen state machine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoginState {
    #[default]
    Idle,
    Submitting,
    Success {
        user: User,
        destination: Route,
    },
    Failed {
        message: String,
    },
}

impl LoginState {
    /// The inline error message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            LoginState::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// A built-in development account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DevAccount {
    pub username: &'static str,
    pub password: &'static str,
    pub role: &'static str,
}

static BUILTIN_ACCOUNTS: [DevAccount; 2] = [
    DevAccount {
        username: "admin",
        password: "admin123",
        role: ROLE_ADMIN,
    },
    DevAccount {
        username: "dca",
        password: "dca123",
        role: ROLE_DCA,
    },
];

/// Development credential shortcut.
///
/// Recognises the built-in accounts before any network call and issues a
/// synthetic `demo-token-<unix millis>` token. Enabled by `dev_shortcuts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevShortcut {
    accounts: &'static [DevAccount],
}

impl DevShortcut {
    pub fn builtin() -> Self {
        Self {
            accounts: &BUILTIN_ACCOUNTS,
        }
    }

    /// The shortcut when `dev_shortcuts` is on, `None` otherwise.
    pub fn from_config(config: &AppConfig) -> Option<Self> {
        config.dev_shortcuts.then(Self::builtin)
    }

    pub fn accounts(&self) -> &[DevAccount] {
        self.accounts
    }

    /// Role of the matching account. Exact, case-sensitive comparison.
    pub fn role_for(&self, credentials: &Credentials) -> Option<&'static str> {
        self.accounts
            .iter()
            .find(|a| a.username == credentials.username && a.password == credentials.password)
            .map(|a| a.role)
    }

    /// Issues a synthetic login response for a matching account.
    pub fn issue(&self, credentials: &Credentials) -> Option<LoginResponse> {
        let role = self.role_for(credentials)?;
        Some(LoginResponse {
            token: demo_token(),
            user: User::new(credentials.username.clone(), role),
        })
    }
}

fn demo_token() -> String {
    format!("demo-token-{}", chrono::Utc::now().timestamp_millis())
}

/// Drives the login form.
pub struct LoginController {
    sessions: Arc<dyn SessionRepository>,
    auth: Arc<dyn AuthService>,
    shortcut: Option<DevShortcut>,
    state: LoginState,
}

impl LoginController {
    /// Creates a new controller in the `Idle` state.
    ///
    /// # Arguments
    ///
    /// * `sessions` - Where a successful login is persisted
    /// * `auth` - Authentication service contacted when no shortcut matches
    /// * `config` - Supplies the `dev_shortcuts` flag
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        auth: Arc<dyn AuthService>,
        config: &AppConfig,
    ) -> Self {
        Self {
            sessions,
            auth,
            shortcut: DevShortcut::from_config(config),
            state: LoginState::Idle,
        }
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    /// Drops a displayed error, e.g. when the user edits a field.
    pub fn clear_error(&mut self) {
        if matches!(self.state, LoginState::Failed { .. }) {
            self.state = LoginState::Idle;
        }
    }

    /// Submits the form.
    ///
    /// The previous error is cleared first. Validation failures never reach
    /// the network.
    pub async fn submit(&mut self, credentials: Credentials) -> &LoginState {
        self.state = LoginState::Submitting;
        self.state = self.authenticate(&credentials).await;

        match &self.state {
            LoginState::Success { user, destination } => {
                tracing::info!(username = %user.username, role = ?user.role, %destination, "Login succeeded");
            }
            LoginState::Failed { message } => {
                tracing::info!(username = %credentials.username, %message, "Login failed");
            }
            _ => {}
        }
        &self.state
    }

    async fn authenticate(&self, credentials: &Credentials) -> LoginState {
        if !credentials.is_complete() {
            return failed(MISSING_FIELDS_MESSAGE);
        }

        let response = match self.shortcut.as_ref().and_then(|s| s.issue(credentials)) {
            Some(response) => {
                tracing::debug!(username = %credentials.username, "Development account matched");
                response
            }
            None => match self.auth.login(credentials).await {
                Ok(response) => response,
                Err(AuthError::Rejected { message }) => {
                    return failed(message.as_deref().unwrap_or(REJECTED_MESSAGE));
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Authentication service unavailable");
                    return failed(UNREACHABLE_MESSAGE);
                }
            },
        };

        let session = Session::new(response.token, response.user);
        if let Err(e) = self.sessions.save(&session) {
            tracing::error!(error = %e, "Failed to persist session");
            return failed(&format!("Could not save session: {}", e));
        }

        LoginState::Success {
            destination: Route::home_for(&session.user),
            user: session.user,
        }
    }
}

fn failed(message: &str) -> LoginState {
    LoginState::Failed {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dca_core::error::{DcaError, Result as DcaResult};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // Mock SessionRepository for testing
    #[derive(Default)]
    struct MockSessions {
        session: Mutex<Option<Session>>,
        fail_saves: bool,
    }

    impl SessionRepository for MockSessions {
        fn load(&self) -> Option<Session> {
            self.session.lock().unwrap().clone()
        }

        fn save(&self, session: &Session) -> DcaResult<()> {
            if self.fail_saves {
                return Err(DcaError::storage("disk full"));
            }
            *self.session.lock().unwrap() = Some(session.clone());
            Ok(())
        }

        fn clear(&self) -> DcaResult<()> {
            *self.session.lock().unwrap() = None;
            Ok(())
        }
    }

    // Mock AuthService returning a canned result and counting calls
    struct MockAuth {
        result: Result<LoginResponse, AuthError>,
        calls: AtomicUsize,
    }

    impl MockAuth {
        fn new(result: Result<LoginResponse, AuthError>) -> Self {
            Self {
                result,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl AuthService for MockAuth {
        async fn login(&self, _credentials: &Credentials) -> Result<LoginResponse, AuthError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn unreachable_auth() -> Arc<MockAuth> {
        Arc::new(MockAuth::new(Err(AuthError::Transport(
            "connection refused".to_string(),
        ))))
    }

    fn controller(
        sessions: Arc<MockSessions>,
        auth: Arc<MockAuth>,
        config: &AppConfig,
    ) -> LoginController {
        LoginController::new(sessions, auth, config)
    }

    #[tokio::test]
    async fn test_missing_fields_never_call_service() {
        let auth = unreachable_auth();
        let mut login = controller(
            Arc::new(MockSessions::default()),
            auth.clone(),
            &AppConfig::default(),
        );

        for (user, pass) in [("", "x"), ("x", ""), ("", "")] {
            let state = login.submit(Credentials::new(user, pass)).await;
            assert_eq!(state.error(), Some(MISSING_FIELDS_MESSAGE));
        }
        assert_eq!(auth.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_admin_shortcut_without_network() {
        let sessions = Arc::new(MockSessions::default());
        let auth = unreachable_auth();
        let mut login = controller(sessions.clone(), auth.clone(), &AppConfig::default());

        let state = login
            .submit(Credentials::new("admin", "admin123"))
            .await
            .clone();

        assert_eq!(
            state,
            LoginState::Success {
                user: User::new("admin", "admin"),
                destination: Route::AdminDashboard,
            }
        );
        assert_eq!(auth.calls.load(Ordering::SeqCst), 0);
        let stored = sessions.load().unwrap();
        assert!(stored.token.starts_with("demo-token-"));
        assert_eq!(stored.user.role.as_deref(), Some("admin"));
    }

    #[tokio::test]
    async fn test_dca_shortcut_routes_to_dca() {
        let mut login = controller(
            Arc::new(MockSessions::default()),
            unreachable_auth(),
            &AppConfig::default(),
        );

        let state = login.submit(Credentials::new("dca", "dca123")).await;
        assert!(matches!(
            state,
            LoginState::Success {
                destination: Route::DcaDashboard,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_shortcut_disabled_uses_service() {
        let auth = unreachable_auth();
        let config = AppConfig {
            dev_shortcuts: false,
            ..AppConfig::default()
        };
        let mut login = controller(Arc::new(MockSessions::default()), auth.clone(), &config);

        let state = login.submit(Credentials::new("admin", "admin123")).await;
        assert_eq!(state.error(), Some(UNREACHABLE_MESSAGE));
        assert_eq!(auth.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_service_success_persists_verbatim() {
        let sessions = Arc::new(MockSessions::default());
        let response = LoginResponse {
            token: "jwt-xyz".to_string(),
            user: User::new("carol", "auditor"),
        };
        let mut login = controller(
            sessions.clone(),
            Arc::new(MockAuth::new(Ok(response))),
            &AppConfig::default(),
        );

        let state = login.submit(Credentials::new("carol", "pw")).await.clone();

        assert!(matches!(
            state,
            LoginState::Success {
                destination: Route::AdminDashboard,
                ..
            }
        ));
        assert_eq!(
            sessions.load(),
            Some(Session::new("jwt-xyz", User::new("carol", "auditor")))
        );
    }

    #[tokio::test]
    async fn test_rejection_messages() {
        let mut with_message = controller(
            Arc::new(MockSessions::default()),
            Arc::new(MockAuth::new(Err(AuthError::Rejected {
                message: Some("Account locked".to_string()),
            }))),
            &AppConfig::default(),
        );
        let state = with_message.submit(Credentials::new("u", "p")).await;
        assert_eq!(state.error(), Some("Account locked"));

        let mut without = controller(
            Arc::new(MockSessions::default()),
            Arc::new(MockAuth::new(Err(AuthError::Rejected { message: None }))),
            &AppConfig::default(),
        );
        let state = without.submit(Credentials::new("u", "p")).await;
        assert_eq!(state.error(), Some(REJECTED_MESSAGE));
    }

    #[tokio::test]
    async fn test_malformed_response_shows_hint() {
        let mut login = controller(
            Arc::new(MockSessions::default()),
            Arc::new(MockAuth::new(Err(AuthError::Malformed("eof".to_string())))),
            &AppConfig::default(),
        );
        let state = login.submit(Credentials::new("u", "p")).await;
        assert_eq!(state.error(), Some(UNREACHABLE_MESSAGE));
    }

    #[tokio::test]
    async fn test_save_failure_is_reported() {
        let sessions = Arc::new(MockSessions {
            fail_saves: true,
            ..MockSessions::default()
        });
        let mut login = controller(sessions, unreachable_auth(), &AppConfig::default());

        let state = login.submit(Credentials::new("admin", "admin123")).await;
        assert!(state.error().unwrap().starts_with("Could not save session"));
    }

    #[tokio::test]
    async fn test_resubmit_clears_previous_error() {
        let mut login = controller(
            Arc::new(MockSessions::default()),
            unreachable_auth(),
            &AppConfig::default(),
        );

        login.submit(Credentials::new("", "")).await;
        assert!(login.state().error().is_some());

        let state = login.submit(Credentials::new("admin", "admin123")).await;
        assert!(state.error().is_none());
    }

    #[test]
    fn test_clear_error() {
        let sessions: Arc<dyn SessionRepository> = Arc::new(MockSessions::default());
        let mut login = LoginController::new(sessions, unreachable_auth(), &AppConfig::default());
        login.state = failed("boom");
        login.clear_error();
        assert_eq!(login.state(), &LoginState::Idle);
    }

    #[test]
    fn test_shortcut_is_exact_match() {
        let shortcut = DevShortcut::builtin();
        assert_eq!(
            shortcut.role_for(&Credentials::new("dca", "dca123")),
            Some("dca")
        );
        assert_eq!(shortcut.role_for(&Credentials::new("Admin", "admin123")), None);
        assert_eq!(shortcut.role_for(&Credentials::new("admin", "dca123")), None);
        assert!(DevShortcut::from_config(&AppConfig {
            dev_shortcuts: false,
            ..AppConfig::default()
        })
        .is_none());
    }
}
