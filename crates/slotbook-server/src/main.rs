//! `slotbook` — appointment booking server.
//!
//! ## Usage
//!
//! ```sh
//! # Listen on 0.0.0.0:8080 with the default 15-minute to 8-hour limits
//! slotbook
//!
//! # Custom port, legacy 7-hour ceiling, JSON logs
//! slotbook --port 9000 --max-duration-minutes 420 --log-format json
//!
//! # Reserve a window
//! curl -X POST localhost:8080/reserve -d '{"start":"2014-09-12T11:45:26.371Z",
//!   "end":"2014-09-12T12:45:26.371Z","requestor":"alice","attendant":"dr-bob"}' \
//!   -H 'content-type: application/json'
//! ```
//!
//! Environment: `HOST`, `PORT`, `SLOTBOOK_MIN_DURATION_MINUTES`,
//! `SLOTBOOK_MAX_DURATION_MINUTES`, `RUST_LOG`.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use slotbook_engine::Scheduler;
use slotbook_server::{create_router, init_tracing, AppState, ServerConfig};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();
    init_tracing(config.log_format);

    let limits = config.limits()?;
    let addr = config.socket_addr()?;

    let scheduler = Arc::new(Scheduler::with_limits(limits));
    let app = create_router(AppState::new(scheduler));

    info!(
        min_minutes = limits.min().num_minutes(),
        max_minutes = limits.max().num_minutes(),
        "appointment limits"
    );
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Cannot listen for Ctrl-C; serving until killed");
            std::future::pending::<()>().await;
        }
    }
}
