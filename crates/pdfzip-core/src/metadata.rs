//! Metadata sidecar files.
//!
//! Each extracted PDF gets a `.txt` sidecar holding a single line
//! `<name>|<size>|<date>` with no trailing newline. The date uses the fixed
//! C `ctime` layout in local time, e.g. `Wed Jun  3 09:05:01 2026`.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::SystemTime;

use chrono::DateTime;
use chrono::Local;
use chrono::NaiveDateTime;
use chrono::Timelike;
use tracing::info;

use crate::PdfZipError;
use crate::Result;
use crate::naming::entry_basename;
use crate::naming::sidecar_file_name;

/// `ctime` layout without the trailing newline.
pub const CALENDAR_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

const FIELD_SEPARATOR: char = '|';

/// Renders a timestamp in local time using [`CALENDAR_FORMAT`].
#[must_use]
pub fn format_calendar_time(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format(CALENDAR_FORMAT)
        .to_string()
}

/// One parsed or to-be-written sidecar line.
///
/// # Examples
///
/// ```
/// use pdfzip_core::SidecarRecord;
///
/// let record: SidecarRecord = "a.pdf|7|Sun Oct 18 11:12:00 2026".parse().unwrap();
/// assert_eq!(record.name, "a.pdf");
/// assert_eq!(record.size, 7);
/// assert_eq!(record.to_string(), "a.pdf|7|Sun Oct 18 11:12:00 2026");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidecarRecord {
    /// Basename of the extracted PDF.
    pub name: String,
    /// File size in bytes.
    pub size: u64,
    /// Local modification time, second precision.
    pub modified: NaiveDateTime,
}

impl SidecarRecord {
    /// Builds a record from an extracted file's name, size and mtime.
    ///
    /// The time is converted to local time and truncated to whole seconds,
    /// matching what the sidecar line can carry.
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64, modified: SystemTime) -> Self {
        let local = DateTime::<Local>::from(modified).naive_local();
        Self {
            name: name.into(),
            size,
            modified: local.with_nanosecond(0).unwrap_or(local),
        }
    }
}

impl fmt::Display for SidecarRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}",
            self.name,
            self.size,
            self.modified.format(CALENDAR_FORMAT)
        )
    }
}

/// Error returned when a sidecar line cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed sidecar line: {0}")]
pub struct ParseSidecarError(String);

impl FromStr for SidecarRecord {
    type Err = ParseSidecarError;

    /// Parses a sidecar line.
    ///
    /// The name is not escaped, so size and date are split off from the
    /// right and any `|` left over belongs to the name.
    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let mut fields = line.rsplitn(3, FIELD_SEPARATOR);
        let (Some(date), Some(size), Some(name)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(ParseSidecarError("expected three fields".to_string()));
        };

        let size = size
            .parse::<u64>()
            .map_err(|e| ParseSidecarError(format!("invalid size {size:?}: {e}")))?;
        let modified = NaiveDateTime::parse_from_str(date, CALENDAR_FORMAT)
            .map_err(|e| ParseSidecarError(format!("invalid date {date:?}: {e}")))?;

        Ok(Self {
            name: name.to_string(),
            size,
            modified,
        })
    }
}

/// Writes the sidecar for an extracted file.
///
/// Size and modification time are read back from the filesystem, not taken
/// from the archive. An existing sidecar is truncated.
///
/// Returns the sidecar path and the record written.
///
/// # Errors
///
/// - [`PdfZipError::Stat`] if `file_path` cannot be stat'ed
/// - [`PdfZipError::FileCreate`] if the sidecar cannot be created
/// - [`PdfZipError::FileWrite`] if writing the line fails
pub fn write_metadata(file_path: &Path, output_dir: &Path) -> Result<(PathBuf, SidecarRecord)> {
    let meta = fs::metadata(file_path).map_err(|source| PdfZipError::Stat {
        path: file_path.to_path_buf(),
        source,
    })?;
    let modified = meta.modified().map_err(|source| PdfZipError::Stat {
        path: file_path.to_path_buf(),
        source,
    })?;

    let name = file_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let basename = entry_basename(&name);
    let record = SidecarRecord::new(basename, meta.len(), modified);

    let sidecar_path = output_dir.join(sidecar_file_name(basename));
    let mut sidecar = fs::File::create(&sidecar_path).map_err(|source| PdfZipError::FileCreate {
        path: sidecar_path.clone(),
        source,
    })?;

    write!(sidecar, "{record}").map_err(|source| PdfZipError::FileWrite {
        path: sidecar_path.clone(),
        source,
    })?;

    info!(path = %sidecar_path.display(), "created metadata file");
    Ok((sidecar_path, record))
}
