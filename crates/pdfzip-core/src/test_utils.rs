//! Test helpers: in-memory ZIP builders and a scriptable archive reader.
//!
//! # Panics
//!
//! Functions here panic on I/O errors; they are only compiled for tests.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Read;
use std::io::Write;

use crate::ArchiveReader;
use crate::EntryDescriptor;
use crate::PdfZipError;
use crate::Result;

/// Creates an in-memory ZIP archive from `(path, content)` pairs.
///
/// Entries are stored uncompressed.
#[must_use]
pub fn create_test_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    use zip::write::SimpleFileOptions;
    use zip::write::ZipWriter;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Stored)
        .unix_permissions(0o644);

    for (path, data) in entries {
        zip.start_file(*path, options).unwrap();
        zip.write_all(data).unwrap();
    }

    zip.finish().unwrap().into_inner()
}

/// Behaviour of one [`MemoryArchive`] entry.
#[derive(Debug, Clone)]
pub enum MemoryEntry {
    /// Entry whose stream yields `data`; `declared` may differ from its length.
    File {
        name: String,
        declared: u64,
        data: Vec<u8>,
    },
    /// Entry whose stat lookup fails.
    BrokenStat,
    /// Entry that stats fine but cannot be opened.
    BrokenStream { name: String, declared: u64 },
    /// Entry whose stream errors after yielding `prefix`.
    FailingStream {
        name: String,
        declared: u64,
        prefix: Vec<u8>,
    },
}

impl MemoryEntry {
    /// Entry whose declared size matches its content.
    pub fn file(name: &str, data: &[u8]) -> Self {
        Self::File {
            name: name.to_string(),
            declared: data.len() as u64,
            data: data.to_vec(),
        }
    }

    /// Entry declaring `declared` bytes but yielding only `data`.
    pub fn short(name: &str, declared: u64, data: &[u8]) -> Self {
        Self::File {
            name: name.to_string(),
            declared,
            data: data.to_vec(),
        }
    }
}

/// Reader that fails after handing out a fixed prefix.
struct FailingReader {
    prefix: Cursor<Vec<u8>>,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.prefix.read(buf)?;
        if n == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "corrupt deflate stream",
            ));
        }
        Ok(n)
    }
}

/// Scriptable [`ArchiveReader`] for exercising failure paths.
#[derive(Debug, Default)]
pub struct MemoryArchive {
    entries: Vec<MemoryEntry>,
}

impl MemoryArchive {
    pub fn new(entries: Vec<MemoryEntry>) -> Self {
        Self { entries }
    }
}

impl ArchiveReader for MemoryArchive {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn stat(&mut self, index: usize) -> Result<EntryDescriptor> {
        let (name, size) = match self.entries.get(index) {
            Some(MemoryEntry::File { name, declared, .. }
            | MemoryEntry::BrokenStream { name, declared }
            | MemoryEntry::FailingStream { name, declared, .. }) => (name.clone(), *declared),
            Some(MemoryEntry::BrokenStat) | None => {
                return Err(PdfZipError::EntryStat {
                    index,
                    reason: "invalid central directory record".to_string(),
                });
            }
        };
        Ok(EntryDescriptor { name, size, index })
    }

    fn open_entry(&mut self, index: usize) -> Result<Box<dyn Read + '_>> {
        match self.entries.get(index) {
            Some(MemoryEntry::File { data, .. }) => Ok(Box::new(&data[..])),
            Some(MemoryEntry::FailingStream { prefix, .. }) => Ok(Box::new(FailingReader {
                prefix: Cursor::new(prefix.clone()),
            })),
            Some(MemoryEntry::BrokenStream { name, .. }) => Err(PdfZipError::EntryOpen {
                name: name.clone(),
                reason: "unsupported compression method".to_string(),
            }),
            _ => Err(PdfZipError::EntryOpen {
                name: format!("#{index}"),
                reason: "no such entry".to_string(),
            }),
        }
    }
}
