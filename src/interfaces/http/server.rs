//! API Server setup

use crate::application::processor::ReceiptProcessor;
use crate::error::Result;
use crate::interfaces::http::routes::create_router;
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// API server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Builds the router with request tracing attached.
pub fn create_app(processor: ReceiptProcessor) -> Router {
    create_router(processor).layer(TraceLayer::new_for_http())
}

/// Run the API server until `shutdown` resolves.
pub async fn run_server<F>(
    config: ServerConfig,
    processor: ReceiptProcessor,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Receipt processor listening on {}", listener.local_addr()?);

    axum::serve(listener, create_app(processor))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Receipt processor stopped");
    Ok(())
}
