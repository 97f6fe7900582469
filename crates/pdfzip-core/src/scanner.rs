//! Single-pass enumeration of archive entries.

use tracing::debug;

use crate::ArchiveReader;
use crate::EntryDescriptor;
use crate::Result;

/// Owns an archive and walks its entries once, in index order.
///
/// The scanner is a cursor rather than an [`Iterator`] so the caller can
/// borrow the archive mutably between steps to open entry streams.
///
/// # Examples
///
/// ```no_run
/// use pdfzip_core::Scanner;
/// use pdfzip_core::ZipReader;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut scanner = Scanner::new(ZipReader::open("docs.zip")?);
/// while let Some(stat) = scanner.next_entry() {
///     match stat {
///         Ok(entry) if entry.is_pdf() => println!("{}", entry.name),
///         Ok(_) => {}
///         Err(e) => eprintln!("skipping: {e}"),
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct Scanner<A: ArchiveReader> {
    archive: A,
    total: usize,
    next: usize,
}

impl<A: ArchiveReader> Scanner<A> {
    /// Creates a scanner positioned at the first entry.
    pub fn new(archive: A) -> Self {
        let total = archive.len();
        Self {
            archive,
            total,
            next: 0,
        }
    }

    /// Returns the total number of entries, readable or not.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.total
    }

    /// Stats the next entry.
    ///
    /// Returns `None` once every index has been visited. A stat failure is
    /// returned as `Some(Err(..))` and the cursor still advances, so the
    /// caller can skip it and keep going.
    pub fn next_entry(&mut self) -> Option<Result<EntryDescriptor>> {
        if self.next >= self.total {
            return None;
        }
        let index = self.next;
        self.next += 1;

        let stat = self.archive.stat(index);
        if let Ok(entry) = &stat {
            debug!(index, name = %entry.name, size = entry.size, "read entry");
        }
        Some(stat)
    }

    /// Returns the underlying archive for opening entry streams.
    pub fn archive_mut(&mut self) -> &mut A {
        &mut self.archive
    }

    /// Consumes the scanner, releasing the archive.
    pub fn into_inner(self) -> A {
        self.archive
    }
}
