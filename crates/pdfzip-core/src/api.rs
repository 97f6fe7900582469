//! High-level public API.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::ExtractConfig;
use crate::PdfZipError;
use crate::Result;
use crate::RunSummary;
use crate::ZipReader;
use crate::naming::has_zip_suffix;
use crate::naming::output_dir_for;
use crate::pipeline::run_pipeline;

/// Extracts every PDF in a ZIP archive and writes their sidecars.
///
/// The output directory is the archive path minus its last four characters
/// (`docs.zip` → `docs/`). It is created if missing and reused if present.
///
/// # Arguments
///
/// * `archive_path` - Path to the ZIP file
/// * `config` - Extraction settings
///
/// # Errors
///
/// Only run-level problems are returned:
/// - [`PdfZipError::InvalidArchiveName`] if the path is too short
/// - [`PdfZipError::ArchiveOpen`] if the archive cannot be opened
/// - [`PdfZipError::OutputDirectory`] if the output directory cannot be
///   created
///
/// Failures on individual entries are recorded in the returned
/// [`RunSummary`] instead.
///
/// # Examples
///
/// ```no_run
/// use pdfzip_core::ExtractConfig;
/// use pdfzip_core::process_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let summary = process_archive("docs.zip", &ExtractConfig::default())?;
/// assert_eq!(summary.output_dir, std::path::PathBuf::from("docs"));
/// # Ok(())
/// # }
/// ```
pub fn process_archive<P: AsRef<Path>>(
    archive_path: P,
    config: &ExtractConfig,
) -> Result<RunSummary> {
    let archive_path = archive_path.as_ref();
    let output_dir = output_dir_for(archive_path)?;

    if !has_zip_suffix(archive_path) {
        warn!(
            "archive name {} does not end in .zip; output directory is {}",
            archive_path.display(),
            output_dir.display()
        );
    }

    let archive = ZipReader::open(archive_path)?;
    debug!(path = %archive.path().display(), "opened archive");

    prepare_output_dir(&output_dir)?;

    Ok(run_pipeline(archive, &output_dir, config))
}

/// Creates the output directory, tolerating one that already exists.
///
/// # Errors
///
/// Returns [`PdfZipError::OutputDirectory`] if creation fails for any
/// reason other than the directory already existing, or if the path exists
/// but is not a directory.
pub fn prepare_output_dir(output_dir: &Path) -> Result<()> {
    match fs::create_dir(output_dir) {
        Ok(()) => {
            info!("created output directory: {}", output_dir.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            if output_dir.is_dir() {
                debug!(path = %output_dir.display(), "output directory already exists");
                Ok(())
            } else {
                Err(PdfZipError::OutputDirectory {
                    path: output_dir.to_path_buf(),
                    source: e,
                })
            }
        }
        Err(source) => Err(PdfZipError::OutputDirectory {
            path: output_dir.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_zip;
    use tempfile::TempDir;

    #[test]
    fn test_prepare_output_dir_creates() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("docs");
        prepare_output_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_prepare_output_dir_tolerates_existing() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("docs");
        fs::create_dir(&dir).unwrap();
        assert!(prepare_output_dir(&dir).is_ok());
    }

    #[test]
    fn test_prepare_output_dir_rejects_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("docs");
        fs::write(&path, b"not a dir").unwrap();
        let err = prepare_output_dir(&path).unwrap_err();
        assert!(matches!(err, PdfZipError::OutputDirectory { .. }));
    }

    #[test]
    fn test_prepare_output_dir_missing_parent() {
        let temp = TempDir::new().unwrap();
        let err = prepare_output_dir(&temp.path().join("a/b/c")).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_process_archive() {
        let temp = TempDir::new().unwrap();
        let zip_path = temp.path().join("docs.zip");
        fs::write(
            &zip_path,
            create_test_zip(&[("a.pdf", b"1234567"), ("notes.txt", b"text")]),
        )
        .unwrap();

        let summary = process_archive(&zip_path, &ExtractConfig::default()).unwrap();
        assert_eq!(summary.output_dir, temp.path().join("docs"));
        assert_eq!(summary.total_entries, 2);
        assert_eq!(summary.pdf_entries, 1);
        assert_eq!(summary.extracted, 1);
    }

    #[test]
    fn test_process_archive_invalid_name() {
        let err = process_archive(".zip", &ExtractConfig::default()).unwrap_err();
        assert!(matches!(err, PdfZipError::InvalidArchiveName { .. }));
    }

    #[test]
    fn test_process_archive_missing_file_creates_nothing() {
        let temp = TempDir::new().unwrap();
        let err = process_archive(temp.path().join("missing.zip"), &ExtractConfig::default())
            .unwrap_err();
        assert!(matches!(err, PdfZipError::ArchiveOpen { .. }));
        assert!(!temp.path().join("missing").exists());
    }
}
