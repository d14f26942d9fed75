//! Dashboard controllers.
//!
//! One generic controller drives both protected pages. The page-specific
//! parts (endpoint, role gate, fallback dataset) live behind `DashboardKind`.

use crate::load_state::LoadState;
use crate::mock_data::{mock_admin_cases, mock_assigned_cases};
use dca_core::case::{
    AssignedCase, Case, CaseRecord, CaseSource, CaseStats, FetchError, PriorityFilter,
};
use dca_core::config::AppConfig;
use dca_core::route::Route;
use dca_core::session::{ROLE_DCA, Session, SessionRepository, User};
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Boxed future returned by `DashboardKind::fetch`.
pub type CaseFuture<'a, C> = Pin<Box<dyn Future<Output = Result<Vec<C>, FetchError>> + Send + 'a>>;

/// Role requirement checked after the session check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleGate {
    pub role: &'static str,
    /// Where users without `role` are sent.
    pub redirect: Route,
}

/// Page-specific behaviour of a dashboard.
pub trait DashboardKind: Send + Sync + 'static {
    type Case: CaseRecord + Clone + Send + Sync + 'static;

    const ROUTE: Route;
    /// Short name used in log fields.
    const NAME: &'static str;
    const ROLE_GATE: Option<RoleGate>;

    fn fetch<'a>(source: &'a dyn CaseSource, token: &'a str) -> CaseFuture<'a, Self::Case>;

    fn mock_cases() -> Vec<Self::Case>;
}

/// Admin dashboard: every case, any signed-in role.
#[derive(Debug, Clone, Copy)]
pub struct AdminBoard;

impl DashboardKind for AdminBoard {
    type Case = Case;

    const ROUTE: Route = Route::AdminDashboard;
    const NAME: &'static str = "admin";
    const ROLE_GATE: Option<RoleGate> = None;

    fn fetch<'a>(source: &'a dyn CaseSource, token: &'a str) -> CaseFuture<'a, Case> {
        source.admin_cases(token)
    }

    fn mock_cases() -> Vec<Case> {
        mock_admin_cases()
    }
}

/// DCA dashboard: assigned cases, `dca` role only.
#[derive(Debug, Clone, Copy)]
pub struct DcaBoard;

impl DashboardKind for DcaBoard {
    type Case = AssignedCase;

    const ROUTE: Route = Route::DcaDashboard;
    const NAME: &'static str = "dca";
    const ROLE_GATE: Option<RoleGate> = Some(RoleGate {
        role: ROLE_DCA,
        redirect: Route::AdminDashboard,
    });

    fn fetch<'a>(source: &'a dyn CaseSource, token: &'a str) -> CaseFuture<'a, AssignedCase> {
        source.dca_cases(token)
    }

    fn mock_cases() -> Vec<AssignedCase> {
        mock_assigned_cases()
    }
}

/// Result of mounting a dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum MountOutcome<C> {
    /// The guard refused; navigate here instead.
    Redirect(Route),
    Ready(DashboardState<C>),
    /// The page was torn down before the load settled.
    Cancelled,
}

/// What a mounted dashboard displays.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState<C> {
    user: User,
    load: LoadState<C>,
    filter: PriorityFilter,
}

impl<C: CaseRecord> DashboardState<C> {
    pub fn new(user: User, load: LoadState<C>) -> Self {
        Self {
            user,
            load,
            filter: PriorityFilter::All,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn load_state(&self) -> &LoadState<C> {
        &self.load
    }

    /// The full, unfiltered list.
    pub fn cases(&self) -> &[C] {
        self.load.cases()
    }

    pub fn filter(&self) -> PriorityFilter {
        self.filter
    }

    /// Changes the filter. Never triggers a fetch.
    pub fn set_filter(&mut self, filter: PriorityFilter) {
        self.filter = filter;
    }

    /// Rows passing the current filter, in list order.
    pub fn visible(&self) -> Vec<&C> {
        self.filter.apply(self.load.cases())
    }

    /// KPIs over the unfiltered list.
    pub fn stats(&self) -> CaseStats {
        CaseStats::compute(self.load.cases())
    }

    pub fn is_loading(&self) -> bool {
        self.load.is_pending()
    }
}

/// Guards, loads and logs out of one kind of dashboard.
pub struct DashboardController<D: DashboardKind> {
    sessions: Arc<dyn SessionRepository>,
    cases: Arc<dyn CaseSource>,
    fallback_on_empty: bool,
    _kind: PhantomData<fn() -> D>,
}

impl<D: DashboardKind> DashboardController<D> {
    /// Creates a new controller.
    ///
    /// # Arguments
    ///
    /// * `sessions` - Session repository read by the guard
    /// * `cases` - Case source used for the single fetch per mount
    /// * `config` - Supplies the `fallback_on_empty` policy
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        cases: Arc<dyn CaseSource>,
        config: &AppConfig,
    ) -> Self {
        Self {
            sessions,
            cases,
            fallback_on_empty: config.fallback_on_empty,
            _kind: PhantomData,
        }
    }

    /// Runs the mount guard. Synchronous, and always before any fetch.
    ///
    /// # Returns
    ///
    /// - `Ok(Session)`: the page may load
    /// - `Err(Route)`: where to redirect
    pub fn guard(&self) -> Result<Session, Route> {
        let Some(session) = self.sessions.load() else {
            tracing::info!(page = D::NAME, "No session, redirecting to login");
            return Err(Route::Login);
        };

        if let Some(gate) = D::ROLE_GATE {
            if session.user.role.as_deref() != Some(gate.role) {
                tracing::info!(
                    page = D::NAME,
                    role = ?session.user.role,
                    redirect = %gate.redirect,
                    "Role not allowed on this page"
                );
                return Err(gate.redirect);
            }
        }

        Ok(session)
    }

    /// Fetches the case list once and settles it into a `LoadState`.
    ///
    /// Returns `None` when `cancel` fires first; the outcome is discarded.
    pub async fn load(
        &self,
        session: &Session,
        cancel: &CancellationToken,
    ) -> Option<LoadState<D::Case>> {
        tracing::debug!(page = D::NAME, "Fetching cases");
        let fetch = D::fetch(self.cases.as_ref(), &session.token);

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!(page = D::NAME, "Load cancelled");
                return None;
            }
            result = fetch => result,
        };

        Some(self.settle(result))
    }

    fn settle(&self, result: Result<Vec<D::Case>, FetchError>) -> LoadState<D::Case> {
        match result {
            Ok(cases) if cases.is_empty() && self.fallback_on_empty => {
                tracing::warn!(page = D::NAME, "Backend returned no cases, showing mock data");
                LoadState::Fallback(D::mock_cases())
            }
            Ok(cases) => {
                tracing::info!(page = D::NAME, count = cases.len(), "Cases loaded");
                LoadState::Loaded(cases)
            }
            Err(err) => {
                tracing::warn!(page = D::NAME, error = %err, "Case fetch failed, showing mock data");
                LoadState::Fallback(D::mock_cases())
            }
        }
    }

    /// Guard, then load.
    pub async fn mount(&self, cancel: &CancellationToken) -> MountOutcome<D::Case> {
        let session = match self.guard() {
            Ok(session) => session,
            Err(route) => return MountOutcome::Redirect(route),
        };

        match self.load(&session, cancel).await {
            Some(load) => MountOutcome::Ready(DashboardState::new(session.user, load)),
            None => MountOutcome::Cancelled,
        }
    }

    /// Clears the session and returns the login route. No server call.
    pub fn logout(&self) -> Route {
        if let Err(e) = self.sessions.clear() {
            tracing::warn!(error = %e, "Failed to clear session on logout");
        }
        tracing::info!(page = D::NAME, "Logged out");
        Route::Login
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dca_core::case::Priority;
    use dca_core::error::Result as DcaResult;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // Mock SessionRepository for testing
    #[derive(Default)]
    struct MockSessions {
        session: Mutex<Option<Session>>,
    }

    impl MockSessions {
        fn with(user: User) -> Self {
            Self {
                session: Mutex::new(Some(Session::new("tok", user))),
            }
        }
    }

    impl SessionRepository for MockSessions {
        fn load(&self) -> Option<Session> {
            self.session.lock().unwrap().clone()
        }

        fn save(&self, session: &Session) -> DcaResult<()> {
            *self.session.lock().unwrap() = Some(session.clone());
            Ok(())
        }

        fn clear(&self) -> DcaResult<()> {
            *self.session.lock().unwrap() = None;
            Ok(())
        }
    }

    // Mock CaseSource returning canned results and counting calls
    struct MockSource {
        admin: Result<Vec<Case>, FetchError>,
        calls: AtomicUsize,
    }

    impl MockSource {
        fn new(admin: Result<Vec<Case>, FetchError>) -> Self {
            Self {
                admin,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CaseSource for MockSource {
        async fn admin_cases(&self, _token: &str) -> Result<Vec<Case>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.admin.clone()
        }

        async fn dca_cases(&self, _token: &str) -> Result<Vec<AssignedCase>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(FetchError::Status(503))
        }
    }

    fn one_case() -> Case {
        Case {
            id: 42,
            debtor_name: "Debtor #42".to_string(),
            amount: 1000.0,
            status: "active".to_string(),
            recovery_probability: Some(0.5),
            ai_priority: Priority::Medium,
            days_overdue: 91,
            region: None,
            past_defaults: None,
        }
    }

    fn controller<D: DashboardKind>(
        sessions: Arc<MockSessions>,
        source: Arc<MockSource>,
        config: &AppConfig,
    ) -> DashboardController<D> {
        DashboardController::new(sessions, source, config)
    }

    #[tokio::test]
    async fn test_no_session_redirects_before_fetch() {
        let source = Arc::new(MockSource::new(Ok(vec![one_case()])));
        let admin: DashboardController<AdminBoard> = controller(
            Arc::new(MockSessions::default()),
            source.clone(),
            &AppConfig::default(),
        );

        let outcome = admin.mount(&CancellationToken::new()).await;
        assert_eq!(outcome, MountOutcome::Redirect(Route::Login));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_dca_page_rejects_other_roles() {
        let source = Arc::new(MockSource::new(Ok(vec![])));
        let dca: DashboardController<DcaBoard> = controller(
            Arc::new(MockSessions::with(User::new("root", "admin"))),
            source.clone(),
            &AppConfig::default(),
        );

        let outcome = dca.mount(&CancellationToken::new()).await;
        assert_eq!(outcome, MountOutcome::Redirect(Route::AdminDashboard));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_admin_page_accepts_any_role() {
        let sessions = Arc::new(MockSessions::with(User::new("agent", "dca")));
        let admin: DashboardController<AdminBoard> = controller(
            sessions,
            Arc::new(MockSource::new(Ok(vec![one_case()]))),
            &AppConfig::default(),
        );
        assert!(admin.guard().is_ok());
    }

    #[tokio::test]
    async fn test_valid_list_adopted_verbatim() {
        let admin: DashboardController<AdminBoard> = controller(
            Arc::new(MockSessions::with(User::new("root", "admin"))),
            Arc::new(MockSource::new(Ok(vec![one_case()]))),
            &AppConfig::default(),
        );

        let MountOutcome::Ready(state) = admin.mount(&CancellationToken::new()).await else {
            panic!("expected a ready dashboard");
        };
        assert_eq!(state.load_state(), &LoadState::Loaded(vec![one_case()]));
        assert_eq!(state.user().username, "root");
        assert_eq!(state.stats().cases_at_risk, 1);
    }

    #[tokio::test]
    async fn test_failures_fall_back_to_mock_data() {
        for err in [
            FetchError::Status(500),
            FetchError::Unsuccessful,
            FetchError::Transport("refused".to_string()),
        ] {
            let admin: DashboardController<AdminBoard> = controller(
                Arc::new(MockSessions::with(User::new("root", "admin"))),
                Arc::new(MockSource::new(Err(err))),
                &AppConfig::default(),
            );
            let MountOutcome::Ready(state) = admin.mount(&CancellationToken::new()).await else {
                panic!("expected a ready dashboard");
            };
            assert!(state.load_state().is_fallback());
            assert_eq!(state.cases().len(), 8);
            assert!(!state.is_loading());
        }
    }

    #[tokio::test]
    async fn test_empty_list_policy() {
        let sessions = Arc::new(MockSessions::with(User::new("root", "admin")));

        let shown_empty: DashboardController<AdminBoard> = controller(
            sessions.clone(),
            Arc::new(MockSource::new(Ok(vec![]))),
            &AppConfig::default(),
        );
        let MountOutcome::Ready(state) = shown_empty.mount(&CancellationToken::new()).await else {
            panic!("expected a ready dashboard");
        };
        assert_eq!(state.load_state(), &LoadState::Loaded(vec![]));
        assert_eq!(state.stats().avg_recovery_percent, 0.0);

        let config = AppConfig {
            fallback_on_empty: true,
            ..AppConfig::default()
        };
        let replaced: DashboardController<AdminBoard> = controller(
            sessions,
            Arc::new(MockSource::new(Ok(vec![]))),
            &config,
        );
        let MountOutcome::Ready(state) = replaced.mount(&CancellationToken::new()).await else {
            panic!("expected a ready dashboard");
        };
        assert!(state.load_state().is_fallback());
    }

    #[tokio::test]
    async fn test_cancelled_load_is_discarded() {
        let admin: DashboardController<AdminBoard> = controller(
            Arc::new(MockSessions::with(User::new("root", "admin"))),
            Arc::new(MockSource::new(Ok(vec![one_case()]))),
            &AppConfig::default(),
        );
        let cancel = CancellationToken::new();
        cancel.cancel();

        assert_eq!(admin.mount(&cancel).await, MountOutcome::Cancelled);
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let sessions = Arc::new(MockSessions::with(User::new("root", "admin")));
        let admin: DashboardController<AdminBoard> = controller(
            sessions.clone(),
            Arc::new(MockSource::new(Ok(vec![]))),
            &AppConfig::default(),
        );

        assert_eq!(admin.logout(), Route::Login);
        assert!(sessions.load().is_none());
        assert_eq!(admin.guard(), Err(Route::Login));
    }

    #[test]
    fn test_filter_does_not_touch_stats() {
        let mut state = DashboardState::new(
            User::new("root", "admin"),
            LoadState::Fallback(mock_admin_cases()),
        );
        state.set_filter(PriorityFilter::Only(Priority::Low));

        let ids: Vec<u64> = state.visible().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 7]);
        assert_eq!(state.stats().total_cases, 8);
        assert_eq!(state.stats().high_priority_cases, 3);
        assert_eq!(state.stats().cases_at_risk, 3);
    }
}
