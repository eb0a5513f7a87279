//! Logging bootstrap for binaries and examples.

use crate::config::ConfigOptions;
use crate::error::{Result, StarterError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

crate::error_boundary!(tracing_subscriber::util::TryInitError => StarterError, |e| {
    StarterError::Telemetry(e.to_string())
});

/// Install a global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows
/// [`ConfigOptions::log_level`]. Fails if a global subscriber already exists.
pub fn init(config: &ConfigOptions) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish()
        .try_init()?;
    Ok(())
}
