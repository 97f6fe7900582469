//! Extraction configuration.

/// Settings for a PDF extraction run.
///
/// # Examples
///
/// ```
/// use pdfzip_core::ExtractConfig;
///
/// let config = ExtractConfig {
///     max_entry_size: 64 * 1024 * 1024, // 64 MB
///     ..Default::default()
/// };
/// assert!(config.remove_partial_files);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Largest declared entry size that will be buffered, in bytes.
    pub max_entry_size: u64,

    /// Remove a destination file when its entry fails after creation.
    pub remove_partial_files: bool,
}

impl Default for ExtractConfig {
    /// Default values:
    /// - `max_entry_size`: 1 GB
    /// - `remove_partial_files`: true
    fn default() -> Self {
        Self {
            max_entry_size: 1024 * 1024 * 1024, // 1 GB
            remove_partial_files: true,
        }
    }
}
