pub mod dashboard;
pub mod server;
pub mod session;

use anyhow::Result;
use dca_application::{Console, Opened};
use dca_core::route::Route;
use tokio_util::sync::CancellationToken;

/// Opens `route`, cancelling the pending load on Ctrl-C.
pub async fn navigate(console: &Console, route: Route) -> Result<Option<Opened>> {
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    let watcher = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let opened = console.open(route, &cancel).await;
    watcher.abort();

    if opened.as_ref().is_ok_and(Option::is_none) {
        tracing::info!(%route, "Navigation cancelled");
    }
    Ok(opened?)
}
