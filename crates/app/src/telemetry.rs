//! Logging setup for the cinema binary.
//!
//! Everything the library emits goes through `tracing`: customer and
//! employee notifications from `LogNotifier`, per-extent save/load events
//! at debug level, and the registry-wide messages from `Cinema`.

use tracing_subscriber::EnvFilter;

/// Install the process-wide subscriber: JSON lines with timestamps,
/// filtered through `RUST_LOG` (default `info`).
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
