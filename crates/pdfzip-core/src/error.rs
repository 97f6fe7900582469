//! Error types for PDF extraction runs.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `PdfZipError`.
pub type Result<T> = std::result::Result<T, PdfZipError>;

/// Errors that can occur while processing an archive.
///
/// Variants split into two groups. Fatal errors (see
/// [`PdfZipError::is_fatal`]) stop the run before or while setting it up.
/// Every other variant is scoped to a single archive entry: it is logged,
/// recorded in the [`RunSummary`](crate::RunSummary), and the run moves on
/// to the next entry.
#[derive(Error, Debug)]
pub enum PdfZipError {
    /// Archive path is too short for its 4-character suffix to be stripped.
    #[error("invalid archive name {path}: {reason}")]
    InvalidArchiveName {
        /// The archive path as given.
        path: PathBuf,
        /// Why the name was rejected.
        reason: String,
    },

    /// Archive file could not be opened or parsed.
    #[error("failed to open archive {path}: {reason}")]
    ArchiveOpen {
        /// The archive path.
        path: PathBuf,
        /// Reader-reported cause.
        reason: String,
    },

    /// Output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    OutputDirectory {
        /// The output directory path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Central-directory record for an entry could not be read.
    #[error("failed to read entry #{index}: {reason}")]
    EntryStat {
        /// Zero-based entry index.
        index: usize,
        /// Reader-reported cause.
        reason: String,
    },

    /// Decompression stream for an entry could not be established.
    #[error("failed to open entry {name}: {reason}")]
    EntryOpen {
        /// Entry name inside the archive.
        name: String,
        /// Reader-reported cause.
        reason: String,
    },

    /// Destination file could not be created.
    #[error("failed to create file {path}: {source}")]
    FileCreate {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Transfer buffer for an entry could not be allocated.
    #[error("failed to allocate {size} bytes for entry {name}")]
    Allocation {
        /// Entry name inside the archive.
        name: String,
        /// Declared uncompressed size.
        size: u64,
    },

    /// Entry declares a size above the configured limit.
    #[error("entry {name} declares {size} bytes (limit {max})")]
    EntryTooLarge {
        /// Entry name inside the archive.
        name: String,
        /// Declared uncompressed size.
        size: u64,
        /// Configured maximum.
        max: u64,
    },

    /// Entry stream yielded a different number of bytes than declared.
    #[error("short read for entry {name}: expected {expected} bytes, got {actual}")]
    ReadMismatch {
        /// Entry name inside the archive.
        name: String,
        /// Declared uncompressed size.
        expected: u64,
        /// Bytes actually read.
        actual: u64,
    },

    /// Entry stream failed while being read.
    #[error("failed to read entry {name}: {source}")]
    EntryRead {
        /// Entry name inside the archive.
        name: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing to a created file failed.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Filesystem metadata for an extracted file was unavailable.
    #[error("failed to get file info for {path}: {source}")]
    Stat {
        /// Extracted file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl PdfZipError {
    /// Returns `true` if this error terminates the whole run.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdfzip_core::PdfZipError;
    /// use std::path::PathBuf;
    ///
    /// let err = PdfZipError::ArchiveOpen {
    ///     path: PathBuf::from("docs.zip"),
    ///     reason: "not a zip".into(),
    /// };
    /// assert!(err.is_fatal());
    ///
    /// let err = PdfZipError::ReadMismatch {
    ///     name: "a.pdf".into(),
    ///     expected: 7,
    ///     actual: 3,
    /// };
    /// assert!(!err.is_fatal());
    /// ```
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::InvalidArchiveName { .. } | Self::ArchiveOpen { .. } | Self::OutputDirectory { .. }
        )
    }

    /// Returns the archive entry name this error relates to, if any.
    #[must_use]
    pub fn entry_name(&self) -> Option<&str> {
        match self {
            Self::EntryOpen { name, .. }
            | Self::Allocation { name, .. }
            | Self::EntryTooLarge { name, .. }
            | Self::ReadMismatch { name, .. }
            | Self::EntryRead { name, .. } => Some(name),
            _ => None,
        }
    }
}
