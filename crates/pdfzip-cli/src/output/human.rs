//! Human-readable summary written through the log.

use super::formatter::OutputFormatter;
use anyhow::Result;
use pdfzip_core::RunSummary;
use tracing::error;
use tracing::info;
use tracing::warn;

pub struct HumanFormatter {
    verbose: bool,
}

impl HumanFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_summary(&self, summary: &RunSummary) -> Result<()> {
        info!("processing complete");
        info!("summary:");
        info!("  total files in archive: {}", summary.total_entries);
        info!("  PDFs found: {}", summary.pdf_entries);
        info!("  successfully processed: {}", summary.extracted);

        if self.verbose {
            info!("  output directory: {}", summary.output_dir.display());
            info!("  bytes written: {}", Self::format_size(summary.bytes_written));
            info!("  duration: {:?}", summary.duration);
        }

        if summary.unreadable_entries > 0 {
            warn!("  unreadable entries: {}", summary.unreadable_entries);
        }
        if summary.sidecar_failures > 0 {
            warn!("  metadata files not written: {}", summary.sidecar_failures);
        }
        if summary.failed() > 0 {
            warn!("  failed to process {} PDF files", summary.failed());
            if self.verbose {
                for failure in &summary.failures {
                    warn!("    - {failure}");
                }
            }
        }

        Ok(())
    }

    fn format_error(&self, err: &anyhow::Error) {
        error!("{err:#}");
    }
}
