//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "ASCERTAIN_LOG";

/// Initialize the tracing/logging system for an application embedding the corrector.
///
/// Reads `ASCERTAIN_LOG` for per-target log levels.
/// Format: `ASCERTAIN_LOG=ascertain_moments=debug,ascertain_core=info`
///
/// Falls back to `ascertain=info` if `ASCERTAIN_LOG` is not set or is invalid.
/// Idempotent; the library itself never calls this.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("ascertain=info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
