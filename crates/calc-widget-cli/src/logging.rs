//! Log output setup

use crate::config::Verbosity;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter for a verbosity level. `RUST_LOG` wins when set.
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()))
}

/// Installs the global subscriber, writing to stderr so stdout stays clean.
///
/// Calling this twice is harmless; the second install is ignored.
pub fn init(verbosity: Verbosity, use_color: bool) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(verbosity))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(use_color),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init(Verbosity::Quiet, false);
        init(Verbosity::Debug, false);
    }

    #[test]
    fn test_env_filter_builds_for_every_level() {
        for level in [
            Verbosity::Quiet,
            Verbosity::Normal,
            Verbosity::Verbose,
            Verbosity::Debug,
        ] {
            let filter = env_filter(level);
            assert!(!filter.to_string().is_empty());
        }
    }
}
