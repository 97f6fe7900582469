//! Name and path derivation for extracted files.
//!
//! All derivations here are fixed-width: the output directory is the archive
//! path minus its last 4 characters, and a sidecar name is the PDF basename
//! minus its last 4 characters plus `.txt`. Nothing inspects the actual
//! extension beyond the PDF predicate.

use std::path::Path;
use std::path::PathBuf;

use crate::PdfZipError;
use crate::Result;

/// Length of the `.zip` / `.pdf` suffixes stripped by the derivations.
pub const SUFFIX_LEN: usize = 4;

const PDF_SUFFIX: &str = ".pdf";
const ZIP_SUFFIX: &str = ".zip";
const SIDECAR_EXTENSION: &str = ".txt";

/// Returns `s` without its last `n` characters, or `None` if `s` is shorter.
#[must_use]
pub fn strip_last_chars(s: &str, n: usize) -> Option<&str> {
    if n == 0 {
        return Some(s);
    }
    let (cut, _) = s.char_indices().rev().nth(n - 1)?;
    Some(&s[..cut])
}

/// Returns the last `n` characters of `s`, or `None` if `s` is shorter.
fn last_chars(s: &str, n: usize) -> Option<&str> {
    let head = strip_last_chars(s, n)?;
    Some(&s[head.len()..])
}

/// Derives the output directory from an archive path.
///
/// The final four characters are removed (`docs.zip` becomes `docs`). The
/// path must be valid UTF-8 and longer than four characters.
///
/// # Examples
///
/// ```
/// use pdfzip_core::naming::output_dir_for;
/// use std::path::{Path, PathBuf};
///
/// let dir = output_dir_for(Path::new("in/docs.zip")).unwrap();
/// assert_eq!(dir, PathBuf::from("in/docs"));
/// assert!(output_dir_for(Path::new(".zip")).is_err());
/// ```
pub fn output_dir_for(archive_path: &Path) -> Result<PathBuf> {
    let text = archive_path
        .to_str()
        .ok_or_else(|| PdfZipError::InvalidArchiveName {
            path: archive_path.to_path_buf(),
            reason: "path is not valid UTF-8".to_string(),
        })?;

    if text.chars().count() <= SUFFIX_LEN {
        return Err(PdfZipError::InvalidArchiveName {
            path: archive_path.to_path_buf(),
            reason: format!("name must be longer than {SUFFIX_LEN} characters"),
        });
    }

    strip_last_chars(text, SUFFIX_LEN)
        .map(PathBuf::from)
        .ok_or_else(|| PdfZipError::InvalidArchiveName {
            path: archive_path.to_path_buf(),
            reason: "name too short".to_string(),
        })
}

/// Returns `true` if the archive path ends in `.zip` (any case).
#[must_use]
pub fn has_zip_suffix(archive_path: &Path) -> bool {
    archive_path
        .to_str()
        .and_then(|s| last_chars(s, SUFFIX_LEN))
        .is_some_and(|tail| tail.eq_ignore_ascii_case(ZIP_SUFFIX))
}

/// Returns `true` if an entry name qualifies as a PDF candidate.
///
/// The name must be longer than four characters and end in `.pdf`, compared
/// case-insensitively. Content is never inspected.
///
/// # Examples
///
/// ```
/// use pdfzip_core::naming::is_pdf_name;
///
/// assert!(is_pdf_name("report.PDF"));
/// assert!(is_pdf_name("dir/a.pdf"));
/// assert!(!is_pdf_name(".pdf"));
/// assert!(!is_pdf_name("notes.txt"));
/// ```
#[must_use]
pub fn is_pdf_name(name: &str) -> bool {
    name.chars().count() > SUFFIX_LEN
        && last_chars(name, SUFFIX_LEN).is_some_and(|tail| tail.eq_ignore_ascii_case(PDF_SUFFIX))
}

/// Returns the final path component of an entry name.
///
/// Everything up to and including the last `/` or `\` is dropped, so nested
/// entries are flattened into the output directory.
///
/// # Examples
///
/// ```
/// use pdfzip_core::naming::entry_basename;
///
/// assert_eq!(entry_basename("a/b/c.pdf"), "c.pdf");
/// assert_eq!(entry_basename("..\\..\\evil.pdf"), "evil.pdf");
/// assert_eq!(entry_basename("flat.pdf"), "flat.pdf");
/// ```
#[must_use]
pub fn entry_basename(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}

/// Returns the sidecar file name for an extracted PDF basename.
///
/// The last four characters are replaced by `.txt`. A basename of four
/// characters or fewer yields just `.txt`.
#[must_use]
pub fn sidecar_file_name(basename: &str) -> String {
    let stem = strip_last_chars(basename, SUFFIX_LEN).unwrap_or_default();
    format!("{stem}{SIDECAR_EXTENSION}")
}
