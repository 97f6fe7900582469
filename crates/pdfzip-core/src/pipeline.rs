//! The scan → extract → metadata loop.

use std::path::Path;
use std::time::Instant;

use tracing::error;
use tracing::info;
use tracing::warn;

use crate::ArchiveReader;
use crate::ExtractConfig;
use crate::Extractor;
use crate::RunSummary;
use crate::Scanner;

/// Runs the extraction loop over an already opened archive.
///
/// Every entry is stat'ed once; unreadable entries are skipped, non-PDF
/// entries are ignored, and each PDF candidate is extracted independently.
/// Per-entry failures are logged and counted, never returned.
///
/// `output_dir` must already exist.
pub fn run_pipeline<A: ArchiveReader>(
    archive: A,
    output_dir: &Path,
    config: &ExtractConfig,
) -> RunSummary {
    let start = Instant::now();
    let mut summary = RunSummary::new(output_dir);
    let extractor = Extractor::new(output_dir, config.clone());

    let mut scanner = Scanner::new(archive);
    summary.total_entries = scanner.entry_count();
    info!("found {} files in archive", summary.total_entries);

    while let Some(stat) = scanner.next_entry() {
        let entry = match stat {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping entry: {err}");
                summary.record_unreadable(&err);
                continue;
            }
        };

        if !entry.is_pdf() {
            continue;
        }

        summary.pdf_entries += 1;
        info!("processing PDF {}: {}", summary.pdf_entries, entry.name);

        match extractor.extract(scanner.archive_mut(), &entry) {
            Ok(file) => summary.record_extracted(&file),
            Err(err) => {
                error!("{err}");
                summary.record_failure(&err);
            }
        }
    }

    summary.duration = start.elapsed();
    summary
}
