//! netuse — graph wireless network throughput in a desktop window.
//!
//! Run with:  `RUST_LOG=info netuse`

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("netuse v{} starting", env!("CARGO_PKG_VERSION"));

    // Fail fast with a clear diagnostic instead of opening a window that can
    // never receive data.
    let counters = netuse_system::WifiCounters::detect()
        .context("wireless counter source unavailable")?;
    tracing::info!("Found wireless interface '{}'", counters.interface());

    netuse_window::run().map_err(Into::into)
}
