//! Per-entry extraction: stream, buffer, write, emit metadata.

use std::fs;
use std::fs::File;
use std::io;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use tracing::debug;
use tracing::error;
use tracing::info;

use crate::ArchiveReader;
use crate::EntryDescriptor;
use crate::ExtractConfig;
use crate::PdfZipError;
use crate::Result;
use crate::metadata::SidecarRecord;
use crate::metadata::write_metadata;
use crate::naming::entry_basename;

/// A PDF that was written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFile {
    /// Flattened file name inside the output directory.
    pub basename: String,
    /// Full destination path.
    pub path: PathBuf,
    /// Bytes written.
    pub size: u64,
    /// Entry the file came from.
    pub source: EntryDescriptor,
    /// Sidecar path and content, if the metadata write succeeded.
    pub sidecar: Option<(PathBuf, SidecarRecord)>,
}

/// Extracts candidate entries into one output directory.
#[derive(Debug, Clone)]
pub struct Extractor {
    output_dir: PathBuf,
    config: ExtractConfig,
}

impl Extractor {
    /// Creates an extractor writing into `output_dir`.
    ///
    /// The directory must already exist.
    pub fn new(output_dir: impl Into<PathBuf>, config: ExtractConfig) -> Self {
        Self {
            output_dir: output_dir.into(),
            config,
        }
    }

    /// Returns the output directory.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the destination path for an entry: its basename under the
    /// output directory.
    #[must_use]
    pub fn destination_for(&self, entry: &EntryDescriptor) -> PathBuf {
        self.output_dir.join(entry_basename(&entry.name))
    }

    /// Extracts one entry and writes its sidecar.
    ///
    /// The entry stream, destination file and transfer buffer are all
    /// scoped to this call and released on every return path. A failed
    /// sidecar write is logged and leaves [`ExtractedFile::sidecar`] empty;
    /// the extraction itself still counts as done.
    ///
    /// # Errors
    ///
    /// - [`PdfZipError::EntryOpen`] if the entry stream cannot be opened
    /// - [`PdfZipError::FileCreate`] if the destination cannot be created
    /// - [`PdfZipError::EntryTooLarge`] if the declared size exceeds the limit
    /// - [`PdfZipError::Allocation`] if the buffer cannot be reserved
    /// - [`PdfZipError::ReadMismatch`] if the stream length differs from the
    ///   declared size
    /// - [`PdfZipError::EntryRead`] if the stream fails mid-read
    /// - [`PdfZipError::FileWrite`] if writing the destination fails
    pub fn extract<A: ArchiveReader>(
        &self,
        archive: &mut A,
        entry: &EntryDescriptor,
    ) -> Result<ExtractedFile> {
        if entry.size > self.config.max_entry_size {
            return Err(PdfZipError::EntryTooLarge {
                name: entry.name.clone(),
                size: entry.size,
                max: self.config.max_entry_size,
            });
        }

        let mut stream = archive.open_entry(entry.index)?;

        let basename = entry_basename(&entry.name).to_string();
        let path = self.output_dir.join(&basename);

        let mut file = File::create(&path).map_err(|source| PdfZipError::FileCreate {
            path: path.clone(),
            source,
        })?;

        let written = Self::transfer(&mut *stream, &mut file, entry, &path);
        drop(file);
        drop(stream);

        if let Err(err) = written {
            self.discard_partial(&path);
            return Err(err);
        }

        info!(path = %path.display(), size = entry.size, "successfully extracted");

        let sidecar = match write_metadata(&path, &self.output_dir) {
            Ok(sidecar) => Some(sidecar),
            Err(err) => {
                error!(path = %path.display(), "{err}");
                None
            }
        };

        Ok(ExtractedFile {
            basename,
            path,
            size: entry.size,
            source: entry.clone(),
            sidecar,
        })
    }

    /// Buffers exactly `entry.size` bytes and writes them out in one go.
    ///
    /// The stream is drained to EOF before writing so that readers which
    /// verify a checksum at end of data get the chance to report it.
    fn transfer(
        stream: &mut dyn Read,
        file: &mut File,
        entry: &EntryDescriptor,
        path: &Path,
    ) -> Result<()> {
        let read_error = |source: io::Error| PdfZipError::EntryRead {
            name: entry.name.clone(),
            source,
        };

        let allocation_error = || PdfZipError::Allocation {
            name: entry.name.clone(),
            size: entry.size,
        };
        let capacity = usize::try_from(entry.size).map_err(|_| allocation_error())?;
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(capacity)
            .map_err(|_| allocation_error())?;

        let read = (&mut *stream)
            .take(entry.size)
            .read_to_end(&mut buffer)
            .map_err(read_error)?;

        if read as u64 != entry.size {
            return Err(PdfZipError::ReadMismatch {
                name: entry.name.clone(),
                expected: entry.size,
                actual: read as u64,
            });
        }

        // Anything past the declared size is discarded, but read errors still count
        io::copy(stream, &mut io::sink()).map_err(read_error)?;

        file.write_all(&buffer)
            .and_then(|()| file.flush())
            .map_err(|source| PdfZipError::FileWrite {
                path: path.to_path_buf(),
                source,
            })
    }

    fn discard_partial(&self, path: &Path) {
        if !self.config.remove_partial_files {
            return;
        }
        match fs::remove_file(path) {
            Ok(()) => debug!(path = %path.display(), "removed partial file"),
            Err(e) => debug!(path = %path.display(), "could not remove partial file: {e}"),
        }
    }
}
