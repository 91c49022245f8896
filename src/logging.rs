//! Tracing setup shared by the binaries
//!
//! Diagnostics go to stderr through `tracing-subscriber`; user-facing progress stays on
//! stdout. `RUST_LOG` wins when set, otherwise `--verbose` picks between `debug` and `warn`.

use tracing_subscriber::EnvFilter;

pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "ttyvid_tools=debug,info"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

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
    fn test_verbose_enables_debug() {
        assert!(default_directive(true).contains("debug"));
        assert_eq!(default_directive(false), "warn");
    }

    #[test]
    fn test_init_twice() {
        init(false);
        init(true);
    }
}
