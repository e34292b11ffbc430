use std::io::stderr;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global tracing subscriber.
///
/// The filter comes from `RUST_LOG`, defaulting to `warn`. Output goes to
/// stderr; stdout carries only benchmark results.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(stderr),
        )
        .with(env_filter)
        .init();
}
