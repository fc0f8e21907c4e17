//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
///
/// `--verbose` selects `debug`, otherwise the configured level applies.
pub fn default_filter(configured: &str, verbose: bool) -> String {
    if verbose {
        "debug".to_string()
    } else {
        configured.to_lowercase()
    }
}

/// Installs the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over [`default_filter`]. Calling this more
/// than once keeps the first subscriber.
pub fn init_logging(configured: &str, verbose: bool) {
    let filter = default_filter(configured, verbose);
    let installed = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();

    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter("warn", false), "warn");
        assert_eq!(default_filter("INFO", false), "info");
        assert_eq!(default_filter("warn", true), "debug");
    }
}
