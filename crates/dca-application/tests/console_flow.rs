//! End-to-end flows over the real session store and HTTP clients, with the
//! backend unavailable or misbehaving.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use dca_application::presentation::{ViewBody, admin_view};
use dca_application::{Console, LoginState, Screen};
use dca_core::auth::Credentials;
use dca_core::case::{AssignedCase, Case, CaseSource, FetchError, Priority, PriorityFilter};
use dca_core::config::AppConfig;
use dca_core::route::Route;
use dca_core::session::{
    KeyValueStore, Session, SessionRepository, SessionStore, USER_KEY, User,
};
use dca_infrastructure::MemoryKeyValueStore;
use dca_interaction::{ApiClient, HttpAuthClient, HttpCaseClient};
use serde_json::json;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// A base URL nothing listens on.
async fn dead_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}

/// Serves `router` on an ephemeral port and returns its `/api` base URL.
async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            eprintln!("stub server error: {}", e);
        }
    });
    format!("http://{}/api", addr)
}

struct Harness {
    storage: Arc<MemoryKeyValueStore>,
    console: Console,
}

async fn offline_console() -> Harness {
    console_at(&dead_base_url().await)
}

fn console_at(base_url: &str) -> Harness {
    let storage = Arc::new(MemoryKeyValueStore::new());
    let sessions = Arc::new(SessionStore::new(storage.clone()));
    let api = ApiClient::with_client(reqwest::Client::new(), base_url);

    let console = Console::new(
        sessions,
        Arc::new(HttpAuthClient::new(api.clone())),
        Arc::new(HttpCaseClient::new(api)),
        AppConfig::default(),
    );
    Harness { storage, console }
}

#[tokio::test]
async fn test_admin_login_to_dashboard_offline() {
    let Harness { storage, console } = offline_console().await;

    let mut login = console.login_controller();
    let destination = match login.submit(Credentials::new("admin", "admin123")).await {
        LoginState::Success { destination, .. } => *destination,
        other => panic!("unexpected login state: {:?}", other),
    };
    assert_eq!(destination, Route::AdminDashboard);

    let stored_user = storage.get(USER_KEY).unwrap().unwrap();
    assert!(stored_user.contains(r#""role":"admin""#));

    let opened = console
        .open(destination, &CancellationToken::new())
        .await
        .unwrap()
        .unwrap();
    let Screen::Admin(mut state) = opened.screen else {
        panic!("expected the admin dashboard");
    };
    assert!(state.load_state().is_fallback());
    assert_eq!(state.stats().total_cases, 8);

    state.set_filter(PriorityFilter::Only(Priority::Low));
    let ids: Vec<u64> = state.visible().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![3, 7]);

    let view = admin_view(&state);
    let ViewBody::Table(table) = &view.body else {
        panic!("expected a table");
    };
    assert_eq!(table.rows().len(), 2);
    assert_eq!(view.stats[0].1, "8");
}

#[tokio::test]
async fn test_dca_login_to_dashboard_offline() {
    let Harness { console, .. } = offline_console().await;

    let mut login = console.login_controller();
    let state = login.submit(Credentials::new("dca", "dca123")).await;
    assert!(matches!(
        state,
        LoginState::Success {
            destination: Route::DcaDashboard,
            ..
        }
    ));

    let opened = console
        .open(Route::DcaDashboard, &CancellationToken::new())
        .await
        .unwrap()
        .unwrap();
    let Screen::Dca(state) = opened.screen else {
        panic!("expected the DCA dashboard");
    };
    assert_eq!(state.cases().len(), 7);
    assert_eq!(state.user().username, "dca");
}

#[tokio::test]
async fn test_unknown_user_gets_hint_when_backend_down() {
    let Harness { console, storage } = offline_console().await;

    let mut login = console.login_controller();
    let state = login.submit(Credentials::new("alice", "pw")).await;

    assert_eq!(
        state.error(),
        Some("Invalid credentials. Admin: admin/admin123 | DCA: dca/dca123")
    );
    assert!(storage.is_empty());
}

#[tokio::test]
async fn test_logout_returns_to_login() {
    let Harness { console, .. } = offline_console().await;
    console
        .login_controller()
        .submit(Credentials::new("admin", "admin123"))
        .await;
    assert!(console.session().is_some());

    assert_eq!(console.logout(), Route::Login);
    assert!(console.session().is_none());
}

struct CountingCases {
    calls: AtomicUsize,
}

#[async_trait]
impl CaseSource for CountingCases {
    async fn admin_cases(&self, _token: &str) -> Result<Vec<Case>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }

    async fn dca_cases(&self, _token: &str) -> Result<Vec<AssignedCase>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn test_protected_pages_without_session_never_fetch() {
    let storage = Arc::new(MemoryKeyValueStore::new());
    let sessions: Arc<dyn SessionRepository> = Arc::new(SessionStore::new(storage));
    let cases = Arc::new(CountingCases {
        calls: AtomicUsize::new(0),
    });
    let api = ApiClient::with_client(reqwest::Client::new(), &dead_base_url().await);
    let console = Console::new(
        sessions,
        Arc::new(HttpAuthClient::new(api)),
        cases.clone(),
        AppConfig::default(),
    );

    for route in [Route::AdminDashboard, Route::DcaDashboard] {
        let opened = console
            .open(route, &CancellationToken::new())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(opened.route, Route::Login);
    }
    assert_eq!(cases.calls.load(Ordering::SeqCst), 0);
}

/// Opens the admin dashboard as a signed-in admin against `router`.
async fn admin_dashboard_over(router: Router) -> Vec<u64> {
    let Harness { storage, console } = console_at(&serve(router).await);
    SessionStore::new(storage)
        .save(&Session::new("tok", User::new("admin", "admin")))
        .unwrap();

    let opened = console
        .open(Route::AdminDashboard, &CancellationToken::new())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(opened.route, Route::AdminDashboard);
    let Screen::Admin(state) = opened.screen else {
        panic!("expected the admin dashboard");
    };
    assert!(state.load_state().is_fallback());
    state.cases().iter().map(|c| c.id).collect()
}

#[tokio::test]
async fn test_server_error_shows_mock_cases() {
    let router = Router::new().route(
        "/api/admin/cases",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"success": false, "error": "csv missing"})),
            )
        }),
    );

    let ids = admin_dashboard_over(router).await;
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[tokio::test]
async fn test_unsuccessful_payload_shows_mock_cases() {
    let router = Router::new().route(
        "/api/admin/cases",
        get(|| async { Json(json!({"success": false})) }),
    );

    let ids = admin_dashboard_over(router).await;
    assert_eq!(ids.len(), 8);
}
