mod app;
mod cache;
mod config;
mod handlers;
mod models;
mod roster;
mod state;
mod storage;
#[cfg(test)]
mod testing;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use listenfd::ListenFd;
use rollcall_core::auth::TokenExchange;
use rollcall_core::clock::{Clock, SystemClock};
use rollcall_sheets::{FileTokenStore, GoogleSheetsSource, JwtBearerExchange};
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    app::create_app, cache::FileCacheStore, config::Config, roster::RosterCache,
    state::AppState, storage::SqliteAttendanceRepository,
};

/// Rollcall - Take attendance against a roster kept in a spreadsheet
#[derive(Parser, Debug)]
#[command(name = "rollcall")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap so HOST/PORT can come from it too
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "rollcall=debug,rollcall_sheets=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    let state = build_state(&config).await?;
    let app = create_app(state);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wire the spreadsheet adapters, the file cache and the attendance
/// database into the shared state.
async fn build_state(config: &Config) -> Result<AppState> {
    let http_client = reqwest::Client::new();
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let exchange: Arc<dyn TokenExchange> = Arc::new(JwtBearerExchange::new(
        http_client.clone(),
        config.sheets.token_uri.clone(),
    ));
    let tokens = Arc::new(FileTokenStore::new(
        config.sheets.account.clone(),
        config.sheets.token_dir.clone(),
        exchange.clone(),
    ));
    let source = Arc::new(GoogleSheetsSource::new(
        http_client,
        config.sheets.api_base.clone(),
        exchange,
    ));
    let cache = Arc::new(FileCacheStore::new(
        config.cache_dir.clone(),
        config.cache_ttl,
        clock.clone(),
    ));

    let roster = RosterCache::new(cache, tokens, source, clock, config.sheets.range.clone());

    let attendance = SqliteAttendanceRepository::new(&config.sqlite_path).await?;

    tracing::info!(
        spreadsheet_id = %config.sheets.range.spreadsheet_id,
        range = %config.sheets.range.range,
        cache_dir = %config.cache_dir.display(),
        cache_ttl_secs = config.cache_ttl.as_secs(),
        sqlite_path = %config.sqlite_path,
        "Initialized roster cache and attendance database"
    );

    Ok(AppState::new(Arc::new(roster), Arc::new(attendance)))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
