//! Log subscriber setup.
//!
//! Lines look like `2026-10-18 11:12:00  INFO found 2 files in archive`.
//! Errors go to stderr and everything else to stdout, unless stdout is
//! reserved for JSON output, in which case all log lines go to stderr.

use tracing::Level;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::fmt::writer::MakeWriterExt;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Returns the most verbose level to show for the given flags.
pub const fn max_level(verbose: bool, quiet: bool) -> Level {
    if quiet {
        Level::WARN
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(verbose: bool, quiet: bool, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(max_level(verbose, quiet))
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_target(false)
        .with_ansi(console::colors_enabled());

    let result = if json {
        builder.with_writer(std::io::stderr).try_init()
    } else {
        builder
            .with_writer(std::io::stderr.with_max_level(Level::ERROR).or_else(std::io::stdout))
            .try_init()
    };

    if let Err(e) = result {
        eprintln!("warning: logging already initialised: {e}");
    }
}
