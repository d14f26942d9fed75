//! Navigation.
//!
//! The router owns no guard logic: it mounts the page for a route and
//! follows whatever redirect the page's controller returns.

use crate::dashboard::{AdminBoard, DashboardController, DashboardState, DcaBoard, MountOutcome};
use crate::login::LoginController;
use crate::presentation::{ScreenView, admin_view, dca_view};
use dca_core::auth::AuthService;
use dca_core::case::{AssignedCase, Case, CaseSource, PriorityFilter};
use dca_core::config::AppConfig;
use dca_core::error::{DcaError, Result};
use dca_core::route::Route;
use dca_core::session::{Session, SessionRepository};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Upper bound on redirects followed for one navigation.
const MAX_REDIRECTS: usize = 4;

/// A mounted page.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Login,
    Admin(DashboardState<Case>),
    Dca(DashboardState<AssignedCase>),
}

impl Screen {
    /// Current filter of a dashboard; `None` on the login screen.
    pub fn filter(&self) -> Option<PriorityFilter> {
        match self {
            Screen::Login => None,
            Screen::Admin(state) => Some(state.filter()),
            Screen::Dca(state) => Some(state.filter()),
        }
    }

    /// Applies `filter` to a dashboard. The login screen ignores it.
    pub fn set_filter(&mut self, filter: PriorityFilter) {
        match self {
            Screen::Login => {}
            Screen::Admin(state) => state.set_filter(filter),
            Screen::Dca(state) => state.set_filter(filter),
        }
    }

    /// View model of a dashboard; `None` on the login screen.
    pub fn view(&self) -> Option<ScreenView> {
        match self {
            Screen::Login => None,
            Screen::Admin(state) => Some(admin_view(state)),
            Screen::Dca(state) => Some(dca_view(state)),
        }
    }
}

/// Result of a navigation: the route finally shown and its page.
#[derive(Debug, Clone, PartialEq)]
pub struct Opened {
    pub route: Route,
    pub screen: Screen,
}

/// Wires the controllers to their collaborators and navigates between pages.
pub struct Console {
    sessions: Arc<dyn SessionRepository>,
    auth: Arc<dyn AuthService>,
    config: AppConfig,
    admin: DashboardController<AdminBoard>,
    dca: DashboardController<DcaBoard>,
}

impl Console {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        auth: Arc<dyn AuthService>,
        cases: Arc<dyn CaseSource>,
        config: AppConfig,
    ) -> Self {
        Self {
            admin: DashboardController::new(sessions.clone(), cases.clone(), &config),
            dca: DashboardController::new(sessions.clone(), cases, &config),
            sessions,
            auth,
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The stored session, if any.
    pub fn session(&self) -> Option<Session> {
        self.sessions.load()
    }

    /// A fresh login form.
    pub fn login_controller(&self) -> LoginController {
        LoginController::new(self.sessions.clone(), self.auth.clone(), &self.config)
    }

    /// Opens `route`, following guard redirects.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Opened))`: the page that ended up mounted
    /// - `Ok(None)`: `cancel` fired while a dashboard was loading
    /// - `Err(DcaError)`: redirects did not settle
    pub async fn open(&self, route: Route, cancel: &CancellationToken) -> Result<Option<Opened>> {
        let mut current = route;

        for _ in 0..=MAX_REDIRECTS {
            tracing::info!(route = %current, "Navigating");
            let next = match current {
                Route::Root => Route::Login,
                Route::Login => {
                    return Ok(Some(Opened {
                        route: current,
                        screen: Screen::Login,
                    }));
                }
                Route::AdminDashboard => match self.admin.mount(cancel).await {
                    MountOutcome::Ready(state) => {
                        return Ok(Some(Opened {
                            route: current,
                            screen: Screen::Admin(state),
                        }));
                    }
                    MountOutcome::Redirect(to) => to,
                    MountOutcome::Cancelled => return Ok(None),
                },
                Route::DcaDashboard => match self.dca.mount(cancel).await {
                    MountOutcome::Ready(state) => {
                        return Ok(Some(Opened {
                            route: current,
                            screen: Screen::Dca(state),
                        }));
                    }
                    MountOutcome::Redirect(to) => to,
                    MountOutcome::Cancelled => return Ok(None),
                },
            };
            current = next;
        }

        Err(DcaError::internal(format!(
            "too many redirects while opening {}",
            route
        )))
    }

    /// Clears the session. Returns the login route.
    pub fn logout(&self) -> Route {
        self.admin.logout()
    }
}
