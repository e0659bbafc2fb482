//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when `RUST_LOG` is unset and no `-v` was given.
pub const DEFAULT_FILTER: &str = "thermal_response_sim=info,tower_http=debug";

/// Maps the `-v` count to a log filter.
///
/// `0` honours `RUST_LOG` and falls back to [`DEFAULT_FILTER`]; `1` is
/// debug, anything higher is trace.
pub fn filter_for(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Installs the global subscriber, writing to stderr so stdout stays
/// reserved for simulation output.
pub fn init(verbose: u8) {
    tracing_subscriber::registry()
        .with(filter_for(verbose))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_levels() {
        assert_eq!(filter_for(1).to_string(), "debug");
        assert_eq!(filter_for(2).to_string(), "trace");
        assert_eq!(filter_for(5).to_string(), "trace");
    }
}
