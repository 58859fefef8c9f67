//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Default filter when `VITALS_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "vitals_core=info,vitals_analysis=info";

/// Initialize the Vitals tracing/logging system.
///
/// Reads `VITALS_LOG` for per-crate log levels.
/// Format: `VITALS_LOG=vitals_analysis=debug,vitals_core=warn`
///
/// Idempotent: calling it more than once is a no-op. Library code never
/// calls this; it is for hosts and tests.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("VITALS_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // A host may already have installed a global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
