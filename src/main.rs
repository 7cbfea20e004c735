use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use record_store::{build_router, config::AppConfig, state::AppState, store::RecordStore};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line overrides; anything left unset comes from the environment.
#[derive(Parser)]
#[command(name = "record_store")]
#[command(about = "In-memory record CRUD service with simulated latency")]
#[command(version)]
struct Cli {
    /// Interface to bind (APP_HOST)
    #[arg(long)]
    host: Option<String>,
    /// Port to listen on (APP_PORT)
    #[arg(short, long)]
    port: Option<u16>,
    /// Artificial delay before every operation, in milliseconds (RECORD_DELAY_MS)
    #[arg(long)]
    delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env().context("failed to load application configuration")?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.delay = Duration::from_millis(delay_ms);
    }

    let store = Arc::new(RecordStore::seeded(config.delay));
    let app = build_router(AppState::new(store));

    let addr = config.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    info!(
        address = %addr,
        delay_ms = config.delay.as_millis() as u64,
        "server is running on http://{addr}"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("record_store=debug,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "unable to install Ctrl+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "unable to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
