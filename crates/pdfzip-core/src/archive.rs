//! Archive reader abstraction and the ZIP implementation.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::io::Seek;
use std::path::Path;
use std::path::PathBuf;

use crate::PdfZipError;
use crate::Result;
use crate::naming::is_pdf_name;

/// Read-only description of one archive entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDescriptor {
    /// Entry name as stored in the archive, including any directories.
    pub name: String,
    /// Declared uncompressed size in bytes.
    pub size: u64,
    /// Zero-based position in the archive's central directory.
    pub index: usize,
}

impl EntryDescriptor {
    /// Returns `true` if the entry name qualifies as a PDF candidate.
    #[must_use]
    pub fn is_pdf(&self) -> bool {
        is_pdf_name(&self.name)
    }
}

/// Random-access reader over archive entries.
///
/// Entries are addressed by index in `0..len()`. Stat and open are separate
/// calls so that a corrupted record can be skipped without affecting its
/// neighbours.
pub trait ArchiveReader {
    /// Returns the number of entries in the archive.
    fn len(&self) -> usize;

    /// Returns `true` if the archive has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads the descriptor for the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PdfZipError::EntryStat`] if the record cannot be read.
    fn stat(&mut self, index: usize) -> Result<EntryDescriptor>;

    /// Opens a decompressing stream over the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PdfZipError::EntryOpen`] if the stream cannot be set up.
    fn open_entry(&mut self, index: usize) -> Result<Box<dyn Read + '_>>;
}

/// [`ArchiveReader`] backed by the `zip` crate.
pub struct ZipReader<R: Read + Seek = BufReader<File>> {
    path: PathBuf,
    inner: zip::ZipArchive<R>,
}

impl ZipReader {
    /// Opens a ZIP archive from the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`PdfZipError::ArchiveOpen`] if the file is missing,
    /// unreadable, or not a valid ZIP archive.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| PdfZipError::ArchiveOpen {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_reader(path, BufReader::new(file))
    }
}

impl<R: Read + Seek> ZipReader<R> {
    /// Wraps any seekable reader holding ZIP data.
    ///
    /// `path` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`PdfZipError::ArchiveOpen`] if the data is not a valid ZIP
    /// archive.
    pub fn from_reader<P: AsRef<Path>>(path: P, reader: R) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let inner = zip::ZipArchive::new(reader).map_err(|e| PdfZipError::ArchiveOpen {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self { path, inner })
    }

    /// Returns the path this archive was opened from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<R: Read + Seek> ArchiveReader for ZipReader<R> {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn stat(&mut self, index: usize) -> Result<EntryDescriptor> {
        // Raw access reads the header without setting up decompression
        let entry = self
            .inner
            .by_index_raw(index)
            .map_err(|e| PdfZipError::EntryStat {
                index,
                reason: e.to_string(),
            })?;

        Ok(EntryDescriptor {
            name: entry.name().to_string(),
            size: entry.size(),
            index,
        })
    }

    fn open_entry(&mut self, index: usize) -> Result<Box<dyn Read + '_>> {
        let name = self
            .inner
            .name_for_index(index)
            .map_or_else(|| format!("#{index}"), str::to_string);

        let entry = self
            .inner
            .by_index(index)
            .map_err(|e| PdfZipError::EntryOpen {
                name,
                reason: e.to_string(),
            })?;

        Ok(Box::new(entry))
    }
}
