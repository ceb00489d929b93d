//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "RULEMINE_LOG";

/// Initialize the rulemine tracing/logging system.
///
/// Reads `RULEMINE_LOG` for per-subsystem log levels.
/// Format: `RULEMINE_LOG=rulemine_analysis::extraction=debug,rulemine_analysis::pipeline=info`
///
/// Falls back to `rulemine=info` if `RULEMINE_LOG` is not set or is invalid.
/// Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("rulemine=info"));

        // A subscriber installed by the host application wins.
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
