use std::sync::Arc;

use anyhow::Result;
use linksaver_http::{create_router, AppState, StaticTokenIdentity};

use crate::open_service;

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let bookmark_service = open_service().await?;
    let identity = StaticTokenIdentity::from_env()?;
    tracing::info!(
        storage = bookmark_service.storage().kind(),
        tokens = identity.len(),
        "Bookmark service ready"
    );

    let state = Arc::new(AppState { bookmark_service, identity: Arc::new(identity) });
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
