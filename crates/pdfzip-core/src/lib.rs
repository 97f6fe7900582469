//! PDF extraction from ZIP archives with per-file metadata sidecars.
//!
//! `pdfzip-core` scans a ZIP archive, extracts every entry whose name ends in
//! `.pdf` (case-insensitive) into a directory named after the archive, and
//! writes a one-line `<name>|<size>|<date>` sidecar next to each PDF.
//!
//! Failures on a single entry are logged and skipped; only problems with the
//! archive itself or the output directory abort a run.
//!
//! # Examples
//!
//! ```no_run
//! use pdfzip_core::ExtractConfig;
//! use pdfzip_core::process_archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let summary = process_archive("docs.zip", &ExtractConfig::default())?;
//! println!(
//!     "{} of {} PDFs extracted",
//!     summary.extracted, summary.pdf_entries
//! );
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod archive;
pub mod config;
pub mod error;
pub mod extract;
pub mod metadata;
pub mod naming;
pub mod pipeline;
pub mod report;
pub mod scanner;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export main API types
pub use api::prepare_output_dir;
pub use api::process_archive;
pub use archive::ArchiveReader;
pub use archive::EntryDescriptor;
pub use archive::ZipReader;
pub use config::ExtractConfig;
pub use error::PdfZipError;
pub use error::Result;
pub use extract::ExtractedFile;
pub use extract::Extractor;
pub use metadata::SidecarRecord;
pub use pipeline::run_pipeline;
pub use report::RunSummary;
pub use scanner::Scanner;
