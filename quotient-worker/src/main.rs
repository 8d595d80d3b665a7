//! # Quotient Worker
//!
//! Worker binary for Quotient. Builds the task registry and hands it to the
//! external queue runtime; the broker protocol itself lives outside this
//! repository, so the binary's job is registration, logging, and a clean
//! shutdown on SIGINT.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p quotient-worker
//! ```

use quotient_worker::registry::TaskRegistry;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quotient_worker=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Quotient Worker v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let registry = TaskRegistry::with_builtin_tasks();
    tracing::info!(tasks = ?registry.names(), "Task registry ready");

    tracing::info!("Worker ready and listening for tasks");

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received, exiting...");

    Ok(())
}
