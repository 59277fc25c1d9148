//! CLI utilities for ferro-sv
//!
//! This module provides testable functions used by the CLI binary.
//! By extracting pure functions and I/O-abstracted functions to the library,
//! we enable comprehensive unit testing without requiring end-to-end CLI tests.

pub mod format;

pub use format::{output_error, OutputFormat};

use crate::error::SvError;
use crate::interval::{position_from_str, Position};
use std::path::{Path, PathBuf};

/// UTF-8 BOM (Byte Order Mark) constant
const UTF8_BOM: &str = "\u{feff}";

/// Extension required of `annotate` and `filter` inputs.
pub const SMAP_EXTENSION: &str = ".smap";

/// Compressed variant of [`SMAP_EXTENSION`].
pub const SMAP_GZ_EXTENSION: &str = ".smap.gz";

/// Strip UTF-8 BOM from the beginning of a string if present.
///
/// This is common when files are exported from Windows applications or Excel.
///
/// # Examples
///
/// ```
/// use ferro_sv::cli::strip_bom;
///
/// assert_eq!(strip_bom("\u{feff}chr1:1000"), "chr1:1000");
/// assert_eq!(strip_bom("chr1:1000"), "chr1:1000");
/// ```
pub fn strip_bom(s: &str) -> &str {
    s.strip_prefix(UTF8_BOM).unwrap_or(s)
}

/// Parse a region given on the command line.
///
/// # Examples
///
/// ```
/// use ferro_sv::cli::parse_region;
///
/// assert_eq!(parse_region(" chr2:1000-2000 ").unwrap().to_string(), "chr2:1000-2000");
/// assert!(parse_region("chr2").is_err());
/// ```
pub fn parse_region(region: &str) -> Result<Position, SvError> {
    position_from_str(strip_bom(region.trim()))
}

/// Output written by a command that reads an SMAP file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// Annotation report
    Annotated,
    /// Filtered SMAP
    Filtered,
}

impl OutputKind {
    /// Replacement for the `.smap` extension.
    pub fn suffix(&self) -> &'static str {
        match self {
            OutputKind::Annotated => ".annotated.txt",
            OutputKind::Filtered => ".filtered.smap",
        }
    }
}

/// Require an `.smap` or `.smap.gz` input (case-insensitive).
pub fn require_smap_input(input: &Path) -> Result<(), SvError> {
    if smap_extension_len(input).is_some() {
        Ok(())
    } else {
        Err(SvError::Config {
            msg: format!(
                "annotate and filter require an {} input file, got {}",
                SMAP_EXTENSION,
                input.display()
            ),
        })
    }
}

/// Byte length of the SMAP extension of `path`, if it has one.
fn smap_extension_len(path: &Path) -> Option<usize> {
    let lower = path.to_string_lossy().to_ascii_lowercase();
    [SMAP_GZ_EXTENSION, SMAP_EXTENSION]
        .into_iter()
        .find(|extension| lower.ends_with(extension))
        .map(str::len)
}

/// Default output path: the input with `.smap` (or `.smap.gz`) replaced.
///
/// # Examples
///
/// ```
/// use ferro_sv::cli::{derive_output_path, OutputKind};
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(
///     derive_output_path(Path::new("runs/sample.smap"), OutputKind::Filtered),
///     PathBuf::from("runs/sample.filtered.smap")
/// );
/// assert_eq!(
///     derive_output_path(Path::new("sample.SMAP"), OutputKind::Annotated),
///     PathBuf::from("sample.annotated.txt")
/// );
/// ```
pub fn derive_output_path(input: &Path, kind: OutputKind) -> PathBuf {
    let text = input.to_string_lossy();
    let stem = match smap_extension_len(input) {
        Some(len) => &text[..text.len() - len],
        None => &text[..],
    };
    PathBuf::from(format!("{}{}", stem, kind.suffix()))
}
