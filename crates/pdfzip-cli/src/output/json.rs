//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use super::formatter::Status;
use anyhow::Result;
use pdfzip_core::RunSummary;
use serde::Serialize;
use std::io::Write;
use std::io::{self};

pub struct JsonFormatter;

#[derive(Debug, Serialize)]
struct SummaryOutput {
    output_dir: String,
    total_entries: usize,
    unreadable_entries: usize,
    pdf_entries: usize,
    extracted: usize,
    failed: usize,
    sidecars_written: usize,
    bytes_written: u64,
    duration_ms: u128,
    failures: Vec<String>,
}

impl From<&RunSummary> for SummaryOutput {
    fn from(summary: &RunSummary) -> Self {
        Self {
            output_dir: summary.output_dir.display().to_string(),
            total_entries: summary.total_entries,
            unreadable_entries: summary.unreadable_entries,
            pdf_entries: summary.pdf_entries,
            extracted: summary.extracted,
            failed: summary.failed(),
            sidecars_written: summary.sidecars_written,
            bytes_written: summary.bytes_written,
            duration_ms: summary.duration.as_millis(),
            failures: summary.failures.clone(),
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_summary(&self, summary: &RunSummary) -> Result<()> {
        let status = if summary.is_complete() {
            Status::Success
        } else {
            Status::Partial
        };
        let output = JsonOutput::with_status("extract", status, SummaryOutput::from(summary));
        Self::output(&output)
    }

    fn format_error(&self, err: &anyhow::Error) {
        let output = JsonOutput::<()>::error("extract", format!("{err:#}"));
        if let Err(e) = Self::output(&output) {
            eprintln!("failed to write JSON error: {e}");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_output_serializes() {
        let mut summary = RunSummary::new("docs");
        summary.total_entries = 2;
        summary.pdf_entries = 1;
        summary.extracted = 1;
        summary.sidecars_written = 1;
        summary.bytes_written = 7;

        let output = JsonOutput::with_status("extract", Status::Success, SummaryOutput::from(&summary));
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(value["operation"], "extract");
        assert_eq!(value["status"], "success");
        assert_eq!(value["data"]["output_dir"], "docs");
        assert_eq!(value["data"]["pdf_entries"], 1);
        assert_eq!(value["data"]["failed"], 0);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_error_output_serializes() {
        let output = JsonOutput::<()>::error("extract", "boom");
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["error"], "boom");
        assert!(value.get("data").is_none());
    }
}
