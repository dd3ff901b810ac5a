//! Quran API - A read-only REST aggregator
//!
//! Republishes Quran text, translations, and tafsir from three upstream
//! data providers, merged into a unified JSON shape and cached per request
//! path.

mod api;
mod cache;
mod config;
mod error;
mod models;
mod tasks;
mod upstream;

use std::net::SocketAddr;

use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use config::Config;
use tasks::spawn_cleanup_task;

#[tokio::main]
async fn main() {
    init_tracing();
    info!("starting Quran API server");

    let config = Config::from_env();
    info!(
        port = config.server_port,
        cache_ttl = config.cache_ttl,
        cleanup_interval = config.cleanup_interval,
        upstream_timeout = config.upstream_timeout,
        "configuration loaded"
    );

    // Response cache and upstream client are built once and shared by every
    // handler through the router state
    let state = AppState::from_config(&config).expect("failed to build application state");

    let sweeper = spawn_cleanup_task(state.cache.clone(), config.cleanup_interval);

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind server port");
    info!("listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(sweeper))
        .await
        .expect("server error");

    info!("server shutdown complete");
}

/// Log to stdout, filtered by `RUST_LOG` when set.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quran_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Resolves when SIGINT or SIGTERM arrives, stopping the sweep task so the
/// server can drain in-flight requests and exit.
async fn shutdown_signal(sweeper: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }

    sweeper.abort();
    warn!("cache sweep task stopped");
}
