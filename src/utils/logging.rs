// file: src/utils/logging.rs
// description: Tracing subscriber initialization with optional ANSI coloring

use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Logs go to stderr; stdout is reserved for reports and diagnostics.
pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::new(level);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(verbose)
        .with_line_number(verbose)
        .compact()
        .with_ansi(colored_output);

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

pub fn format_success(msg: &str, colored_output: bool) -> String {
    if colored_output {
        format!("{} {}", "✓".green().bold(), msg.green())
    } else {
        format!("✓ {}", msg)
    }
}

pub fn format_error(msg: &str, colored_output: bool) -> String {
    if colored_output {
        format!("{} {}", "✗".red().bold(), msg.red())
    } else {
        format!("✗ {}", msg)
    }
}
