//! Development-time tracing for debugging the step.
//!
//! # Separation of Concerns
//!
//! - **Tracing (this module)**: Dev diagnostics via `RUST_LOG`, output to stderr.
//!   Never carries credentials and is not part of the step's product output.
//!
//! - **Host log lines (`report`)**: The marker-prefixed lines a workflow user
//!   sees in the job log. Always written, unaffected by `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Set to `1` by GitHub Actions when a run is re-run with debug logging.
const RUNNER_DEBUG_VAR: &str = "RUNNER_DEBUG";

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. When unset, defaults to `warn`, raised to `debug`
/// for this crate on a runner with debug logging enabled.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=obs_action=debug obs-action resolve --inputs inputs.toml
/// ```
pub fn init() {
    let runner_debug = std::env::var(RUNNER_DEBUG_VAR).ok();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(runner_debug.as_deref())));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

/// Filter used when `RUST_LOG` is not set.
fn default_directive(runner_debug: Option<&str>) -> &'static str {
    match runner_debug.map(str::trim) {
        Some("1") => "warn,obs_action=debug",
        _ => "warn",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runner_debug_enables_crate_diagnostics() {
        assert_eq!(default_directive(Some("1")), "warn,obs_action=debug");
        assert_eq!(default_directive(Some(" 1 ")), "warn,obs_action=debug");
    }

    #[test]
    fn default_is_warn_without_runner_debug() {
        assert_eq!(default_directive(None), "warn");
        assert_eq!(default_directive(Some("0")), "warn");
        assert_eq!(default_directive(Some("")), "warn");
    }
}
