//! Logger setup backed by `tracing-subscriber`.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::time::JstTimer;

/// Build the filter directive used when `RUST_LOG` is not set.
///
/// Our own crates log at `level`; everything else is held at `warn`.
fn default_directive(name: &str, level: &str) -> String {
    let target = name.replace('-', "_");
    format!("warn,{target}={level},heya_rooms={level},heya_shared={level}")
}

/// Initialise the global tracing subscriber.
///
/// # Arguments
///
/// * `name` - Binary name (usually `env!("CARGO_BIN_NAME")`)
/// * `level` - Default level for our crates, overridden by `RUST_LOG`
///
/// Logs are written to stderr so that stdout stays free for command output.
/// Calling this more than once is a no-op.
pub fn setup_logger(name: &str, level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(name, level)));

    let initialized = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(JstTimer)
                .with_target(true),
        )
        .try_init()
        .is_ok();

    if initialized {
        tracing::debug!("Logger initialized for '{}' (level: {})", name, level);
    }
}
