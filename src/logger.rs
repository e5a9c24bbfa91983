// src/logger.rs
// =============================================================================
// Logging setup.
//
// Logs go to stderr so stdout only ever carries the document or the JSON
// response. The level comes from RUST_LOG and defaults to "info".
// =============================================================================

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
