//! Tracing initialization for binaries embedding the service.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Filter directives come from `RUST_LOG`, defaulting to `info`.
/// Calling this more than once is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
