//! Browser console logging for `tracing` events.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};
use tracing_web::MakeWebConsoleWriter;

const FALLBACK_FILTER: &str = "info";

/// Install a `tracing` subscriber writing to the browser console.
///
/// An invalid `filter` falls back to `info`. Calling this twice keeps the
/// first subscriber.
pub fn init(filter: &str) {
    // No timer: `std::time` is unavailable on wasm32-unknown-unknown.
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    let installed = tracing_subscriber::registry()
        .with(env_filter(filter))
        .with(fmt_layer)
        .try_init();
    if installed.is_err() {
        leptos::logging::warn!("tracing subscriber already installed");
    }
}

fn env_filter(filter: &str) -> EnvFilter {
    EnvFilter::try_new(filter).unwrap_or_else(|err| {
        leptos::logging::warn!("invalid log filter {filter:?} ({err}), using {FALLBACK_FILTER}");
        EnvFilter::new(FALLBACK_FILTER)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_valid_filter() {
        assert_eq!(
            env_filter("sensorboard_app=debug").to_string(),
            "sensorboard_app=debug"
        );
    }

    #[test]
    fn should_fall_back_to_info_for_invalid_filter() {
        assert_eq!(env_filter("sensorboard_app=loud").to_string(), "info");
    }
}
