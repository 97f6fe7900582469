//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfzip")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Example:\n  \
  pdfzip docs.zip    extract every PDF into docs/ and write docs/<name>.txt sidecars")]
pub struct Cli {
    /// Path to the ZIP archive
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Largest entry to extract, in bytes (K, M, G, T suffixes allowed)
    #[arg(long, value_name = "BYTES", value_parser = parse_byte_size)]
    pub max_entry_size: Option<u64>,

    /// Keep partially written PDFs when an entry fails
    #[arg(long)]
    pub keep_partial: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output the run summary in JSON format
    #[arg(short, long)]
    pub json: bool,
}

/// Parse byte size with optional suffix (K, M, G, T)
#[allow(clippy::option_if_let_else)]
fn parse_byte_size(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty byte size".to_string());
    }

    let (num_str, multiplier) = if let Some(stripped) = s.strip_suffix('T') {
        (stripped, 1024_u64.pow(4))
    } else if let Some(stripped) = s.strip_suffix('G') {
        (stripped, 1024_u64.pow(3))
    } else if let Some(stripped) = s.strip_suffix('M') {
        (stripped, 1024_u64.pow(2))
    } else if let Some(stripped) = s.strip_suffix('K') {
        (stripped, 1024)
    } else {
        (s, 1)
    };

    num_str
        .parse::<u64>()
        .map_err(|_| format!("invalid byte size: {s}"))
        .and_then(|n| {
            n.checked_mul(multiplier)
                .ok_or_else(|| format!("byte size overflow: {s}"))
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_byte_size() {
        assert_eq!(parse_byte_size("100").unwrap(), 100);
        assert_eq!(parse_byte_size("1K").unwrap(), 1024);
        assert_eq!(parse_byte_size("2M").unwrap(), 2 * 1024 * 1024);
        assert_eq!(parse_byte_size("3G").unwrap(), 3 * 1024 * 1024 * 1024);
        assert_eq!(parse_byte_size("1T").unwrap(), 1024_u64.pow(4));
        assert!(parse_byte_size("invalid").is_err());
        assert!(parse_byte_size("").is_err());
    }

    #[test]
    fn test_parse_byte_size_overflow() {
        assert!(parse_byte_size("18446744073709551615K").is_err());
        assert!(parse_byte_size("17592186044416G").is_err());
    }

    #[test]
    fn test_cli_parses_archive() {
        let cli = Cli::try_parse_from(["pdfzip", "docs.zip"]).unwrap();
        assert_eq!(cli.archive, PathBuf::from("docs.zip"));
        assert!(cli.max_entry_size.is_none());
        assert!(!cli.keep_partial);
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_requires_exactly_one_archive() {
        assert!(Cli::try_parse_from(["pdfzip"]).is_err());
        assert!(Cli::try_parse_from(["pdfzip", "a.zip", "b.zip"]).is_err());
    }

    #[test]
    fn test_cli_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["pdfzip", "-v", "-q", "docs.zip"]).is_err());
    }

    #[test]
    fn test_cli_options() {
        let cli = Cli::try_parse_from([
            "pdfzip",
            "--max-entry-size",
            "64M",
            "--keep-partial",
            "--json",
            "docs.zip",
        ])
        .unwrap();
        assert_eq!(cli.max_entry_size, Some(64 * 1024 * 1024));
        assert!(cli.keep_partial);
        assert!(cli.json);
    }
}
