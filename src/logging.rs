//! Tracing setup.
//!
//! The crate only emits `tracing` events; installing a subscriber is left to
//! the application. [`init_tracing`] is a convenience for binaries and tests.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing-subscriber` formatter filtered by `RUST_LOG`.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=arbitrait=debug` to see registrations or `=trace` for dispatch.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed (e.g. by a test harness).
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_test_writer())
                .with(filter)
                .try_init();
        }
    });
}
