//! Subscriber setup shared by the walkthrough binaries.

use crate::config::TourConfig;
use tracing_subscriber::EnvFilter;

pub const FALLBACK_FILTER: &str = "warn";

/// `RUST_LOG` wins over the configured filter. An unparsable configured
/// filter is reported on stderr and replaced by [`FALLBACK_FILTER`].
pub fn build_filter(config: &TourConfig) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    match EnvFilter::try_new(&config.log_filter) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!(
                "ignoring log_filter {:?} ({}), using {:?}",
                config.log_filter, e, FALLBACK_FILTER
            );
            EnvFilter::new(FALLBACK_FILTER)
        }
    }
}

/// Installs a stderr subscriber. Calling it again after a subscriber is set
/// does nothing.
pub fn init(config: &TourConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
