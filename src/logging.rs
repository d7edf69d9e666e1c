//! Diagnostic logging setup
//!
//! User-facing output goes through the display layer; this installs the
//! `tracing` subscriber for diagnostics on stderr.

use tracing_subscriber::EnvFilter;

use crate::cli::Verbosity;

/// Default filter directive for a verbosity level
pub fn filter_directive(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Quiet => "error",
        Verbosity::Normal => "warn",
        Verbosity::Verbose => "debug",
        Verbosity::VeryVerbose => "trace",
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity)));

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives() {
        assert_eq!(filter_directive(Verbosity::Quiet), "error");
        assert_eq!(filter_directive(Verbosity::Normal), "warn");
        assert_eq!(filter_directive(Verbosity::Verbose), "debug");
        assert_eq!(filter_directive(Verbosity::VeryVerbose), "trace");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(Verbosity::Normal);
        init(Verbosity::Verbose);
    }
}
