//! Error conversion utilities for CLI.
//!
//! Converts pdfzip-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use pdfzip_core::PdfZipError;
use std::path::Path;

/// Converts `PdfZipError` to user-friendly anyhow error with context
pub fn convert_run_error(err: PdfZipError, archive: &Path) -> anyhow::Error {
    match err {
        PdfZipError::InvalidArchiveName { path, reason } => {
            anyhow!(
                "Invalid archive name '{}': {}\n\
                 HINT: Pass a path ending in .zip, e.g. 'docs.zip'.",
                path.display(),
                reason
            )
        }
        PdfZipError::ArchiveOpen { path, reason } => {
            anyhow!(
                "Failed to open ZIP file '{}': {}\n\
                 HINT: Check that the file exists and is a valid ZIP archive.",
                path.display(),
                reason
            )
        }
        PdfZipError::OutputDirectory { path, source } => {
            anyhow!(
                "Failed to create output directory '{}': {}\n\
                 HINT: The directory is created next to the archive; check write permissions.",
                path.display(),
                source
            )
        }
        _ => anyhow::Error::from(err)
            .context(format!("Error processing archive '{}'", archive.display())),
    }
}

/// Adds context to a core result
pub fn add_archive_context<T>(
    result: Result<T, PdfZipError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_run_error(e, archive))
}
