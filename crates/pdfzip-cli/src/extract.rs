//! Extract command implementation.

use crate::cli::Cli;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use pdfzip_core::ExtractConfig;
use pdfzip_core::process_archive;
use tracing::info;

pub fn execute(args: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    let defaults = ExtractConfig::default();
    let config = ExtractConfig {
        max_entry_size: args.max_entry_size.unwrap_or(defaults.max_entry_size),
        remove_partial_files: !args.keep_partial,
    };

    info!("starting PDF extraction");
    info!("processing ZIP file: {}", args.archive.display());

    let summary = add_archive_context(process_archive(&args.archive, &config), &args.archive)?;

    formatter.format_summary(&summary)?;

    Ok(())
}
