use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Crate targets that get an explicit level directive.
const LOG_TARGETS: [&str; 2] = ["studyspace", "studyspace_core"];

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted. Otherwise
/// `level` (usually `Config::log_level`, from `STUDYSPACE_LOG_LEVEL`) applies;
/// an unknown level falls back to `info`.
pub fn init_logging(quiet: bool, level: &str) {
    let mut filter = EnvFilter::from_default_env();
    for directive in directives(quiet, level) {
        filter = filter.add_directive(directive.parse().expect("Invalid log directive"));
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}

fn effective_level(quiet: bool, level: &str) -> &'static str {
    if quiet {
        return "error";
    }
    let level = level.trim().to_ascii_lowercase();
    LEVELS
        .into_iter()
        .find(|known| *known == level)
        .unwrap_or("info")
}

fn directives(quiet: bool, level: &str) -> Vec<String> {
    let level = effective_level(quiet, level);
    LOG_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect()
}
