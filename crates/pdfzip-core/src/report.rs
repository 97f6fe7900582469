//! Run summary reporting.

use std::path::PathBuf;
use std::time::Duration;

use crate::ExtractedFile;
use crate::PdfZipError;

/// Counters and messages collected over one run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Output directory the run wrote into.
    pub output_dir: PathBuf,

    /// Entries in the archive, including unreadable ones.
    pub total_entries: usize,

    /// Entries whose record could not be read.
    pub unreadable_entries: usize,

    /// Entries matching the PDF predicate.
    pub pdf_entries: usize,

    /// PDFs written to disk.
    pub extracted: usize,

    /// Sidecars written.
    pub sidecars_written: usize,

    /// Extracted PDFs whose sidecar could not be written.
    pub sidecar_failures: usize,

    /// Total PDF bytes written.
    pub bytes_written: u64,

    /// Wall-clock duration of the run.
    pub duration: Duration,

    /// One message per failed candidate or unreadable entry.
    pub failures: Vec<String>,
}

impl RunSummary {
    /// Creates an empty summary for `output_dir`.
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Records a successfully extracted PDF.
    pub fn record_extracted(&mut self, file: &ExtractedFile) {
        self.extracted += 1;
        self.bytes_written += file.size;
        if file.sidecar.is_some() {
            self.sidecars_written += 1;
        } else {
            self.sidecar_failures += 1;
        }
    }

    /// Records a candidate that could not be extracted.
    pub fn record_failure(&mut self, err: &PdfZipError) {
        self.failures.push(err.to_string());
    }

    /// Records an entry whose record could not be read.
    pub fn record_unreadable(&mut self, err: &PdfZipError) {
        self.unreadable_entries += 1;
        self.failures.push(err.to_string());
    }

    /// Returns the number of PDF candidates that were not extracted.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.pdf_entries.saturating_sub(self.extracted)
    }

    /// Returns whether every candidate was extracted.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EntryDescriptor;

    fn extracted(size: u64, with_sidecar: bool) -> ExtractedFile {
        let source = EntryDescriptor {
            name: "a.pdf".to_string(),
            size,
            index: 0,
        };
        let sidecar = with_sidecar.then(|| {
            (
                PathBuf::from("out/a.txt"),
                crate::SidecarRecord::new("a.pdf", size, std::time::SystemTime::now()),
            )
        });
        ExtractedFile {
            basename: "a.pdf".to_string(),
            path: PathBuf::from("out/a.pdf"),
            size,
            source,
            sidecar,
        }
    }

    #[test]
    fn test_new_summary() {
        let summary = RunSummary::new("out");
        assert_eq!(summary.output_dir, PathBuf::from("out"));
        assert_eq!(summary.total_entries, 0);
        assert_eq!(summary.extracted, 0);
        assert!(summary.is_complete());
    }

    #[test]
    fn test_record_extracted() {
        let mut summary = RunSummary::new("out");
        summary.pdf_entries = 2;
        summary.record_extracted(&extracted(7, true));
        summary.record_extracted(&extracted(5, false));

        assert_eq!(summary.extracted, 2);
        assert_eq!(summary.bytes_written, 12);
        assert_eq!(summary.sidecars_written, 1);
        assert_eq!(summary.sidecar_failures, 1);
        assert!(summary.is_complete());
    }

    #[test]
    fn test_failed_count() {
        let mut summary = RunSummary::new("out");
        summary.pdf_entries = 3;
        summary.record_extracted(&extracted(1, true));
        summary.record_failure(&PdfZipError::ReadMismatch {
            name: "b.pdf".into(),
            expected: 4,
            actual: 1,
        });

        assert_eq!(summary.failed(), 2);
        assert!(!summary.is_complete());
        assert_eq!(summary.failures.len(), 1);
        assert!(summary.failures[0].contains("b.pdf"));
    }

    #[test]
    fn test_record_unreadable() {
        let mut summary = RunSummary::new("out");
        summary.record_unreadable(&PdfZipError::EntryStat {
            index: 2,
            reason: "bad record".into(),
        });
        assert_eq!(summary.unreadable_entries, 1);
        assert_eq!(summary.failures.len(), 1);
        // Unreadable entries are never candidates
        assert!(summary.is_complete());
    }
}
