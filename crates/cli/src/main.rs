//! GitTracker entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Load configuration** from the environment (and `.env`).
//! 2. **Wire observability**: `tracing-subscriber` with a JSON or pretty fmt
//!    layer, plus an OpenTelemetry OTLP exporter when configured.
//! 3. **Construct infrastructure**: the gRPC relay, the dispatch registry with
//!    the stock handlers, and optionally a stub relay receiver.
//! 4. **Serve** the webhook listener until Ctrl-C or SIGTERM.

mod config;
mod observability;

use std::sync::Arc;

use anyhow::{Context, Result};
use dispatch::DispatchRegistry;
use relay::GrpcRelay;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::watch;

use crate::config::Config;

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to listen for SIGTERM");
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

/// Resolves once the shutdown flag flips (or its sender is gone).
async fn stopped(mut rx: watch::Receiver<bool>) {
    while !*rx.borrow_and_update() {
        if rx.changed().await.is_err() {
            return;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("invalid configuration")?;
    let _otel_guard = observability::init(&config)?;

    let (stop_tx, stop_rx) = watch::channel(false);

    let stub = match config.relay_stub_address {
        Some(address) => {
            let stub_listener = TcpListener::bind(address)
                .await
                .with_context(|| format!("failed to bind stub relay receiver on {address}"))?;
            Some(tokio::spawn(relay::server::serve(
                stub_listener,
                stopped(stop_rx.clone()),
            )))
        }
        None => None,
    };

    let relay = GrpcRelay::new(config.relay_address.clone()).with_timeout(config.relay_timeout);
    let registry = DispatchRegistry::with_default_handlers(Arc::new(relay));
    tracing::info!(
        event_types = ?registry.event_types(),
        relay_address = %config.relay_address,
        relay_timeout_secs = config.relay_timeout.as_secs(),
        "Dispatch registry ready"
    );

    let http_listener = TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("failed to bind webhook listener on {}", config.bind_address))?;
    tracing::info!(address = %config.bind_address, "Starting gittracker");

    axum::serve(http_listener, listener::router(Arc::new(registry)))
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received");
            let _ = stop_tx.send(true);
        })
        .await
        .context("webhook listener failed")?;

    if let Some(stub) = stub {
        stub.await
            .context("stub relay receiver task panicked")?
            .context("stub relay receiver failed")?;
    }

    tracing::info!("Server stopped cleanly");
    Ok(())
}
