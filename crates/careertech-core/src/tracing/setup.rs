//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the CareerTech tracing/logging system.
///
/// Reads `CAREERTECH_LOG` for per-target log levels.
/// Format: `CAREERTECH_LOG=careertech_mentor=debug,careertech_storage=warn`
///
/// Falls back to `careertech=info` if `CAREERTECH_LOG` is not set or is invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("CAREERTECH_LOG")
            .unwrap_or_else(|_| EnvFilter::new("careertech=info"));

        // A host application may already own the global subscriber.
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
