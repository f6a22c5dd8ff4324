use clap::Parser;
use miette::{IntoDiagnostic, Result};
use receipt_processor::application::processor::ReceiptProcessor;
use receipt_processor::domain::ports::{IdGeneratorRef, ReceiptStoreRef};
use receipt_processor::infrastructure::id::UuidGenerator;
use receipt_processor::infrastructure::in_memory::InMemoryReceiptStore;
use receipt_processor::interfaces::http::{ServerConfig, run_server};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "RECEIPT_PROCESSOR_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "RECEIPT_PROCESSOR_PORT", default_value_t = 8080)]
    port: u16,

    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "RECEIPT_PROCESSOR_LOG_LEVEL", default_value = "info")]
    log_level: LevelFilter,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    let store: ReceiptStoreRef = Arc::new(InMemoryReceiptStore::new());
    let ids: IdGeneratorRef = Arc::new(UuidGenerator::new());
    let processor = ReceiptProcessor::new(store, ids);

    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
    };
    run_server(config, processor, shutdown_signal())
        .await
        .into_diagnostic()?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        // RUST_LOG takes precedence over the CLI level.
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "{}={level},tower_http={level}",
            env!("CARGO_CRATE_NAME")
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
