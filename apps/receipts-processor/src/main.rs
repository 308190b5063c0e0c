use std::net::SocketAddr;

use anyhow::Context as _;
use clap::Parser;
use receipts_processor::{AppState, router};
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "receipts-processor",
    version,
    about = "Scores purchase receipts for reward points"
)]
struct Args {
    /// Address the HTTP server binds to.
    #[arg(long, env = "RECEIPTS_LISTEN_ADDR", default_value = "0.0.0.0:8080")]
    listen_addr: SocketAddr,

    /// Emit logs as JSON lines (set to false for human-readable output).
    #[arg(
        long,
        env = "RECEIPTS_LOG_JSON",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_json);

    let app = router(AppState::in_memory()).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(args.listen_addr)
        .await
        .with_context(|| format!("bind {}", args.listen_addr))?;
    info!(addr = %listener.local_addr()?, "receipts-processor listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve http")?;

    info!("receipts-processor stopped");
    Ok(())
}

fn init_tracing(json: bool) {
    let filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
