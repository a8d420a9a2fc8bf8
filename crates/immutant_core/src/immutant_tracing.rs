//! Structured logging setup.
//!
//! The filter is read from `RUST_LOG` (e.g. `RUST_LOG=immutant_core=debug`)
//! and falls back to `off`, so library users opt in explicitly.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Safe to call many times (tests call it once per case); only the first call
/// has an effect, and an already installed foreign subscriber is left alone.
pub fn init() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_target(true).with_thread_ids(false))
            .try_init();
    });
}
