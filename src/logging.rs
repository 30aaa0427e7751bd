//! Tracing subscriber setup for the binary.

use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Level filtering comes from `RUST_LOG`, defaulting to `info`. With `json`
/// set, events are written as one JSON object per line.
pub fn init(json: bool) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if json {
        builder.json().finish().try_init()
    } else {
        builder.finish().try_init()
    }
}
