//! Companion files derived from the reverse (CHM13 -> HG38) alignments.
//!
//! Two files sit next to a reverse alignment file `<base>`:
//!
//! - `<base>-empty`: CHM13 intervals with no HG38 counterpart, one per line.
//! - `<base>-alternatives`: CHM13 intervals with two HG38 counterparts,
//!   `source<TAB>first<TAB>second` per line.
//!
//! Both can be regenerated from `<base>` with [`derive_empty_intervals`] and
//! [`derive_alternative_mappings`].

use super::alignment::AlignmentRecord;
use crate::error::SvError;
use crate::interval::{position_from_str, Position};
use crate::io::{open_input, source_name, split_record_fields};
use std::ffi::OsString;
use std::fmt;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// Suffix of the empty-interval companion file.
pub const EMPTY_SUFFIX: &str = "-empty";

/// Suffix of the alternative-mapping companion file.
pub const ALTERNATIVES_SUFFIX: &str = "-alternatives";

/// A CHM13 interval with two alternative HG38 counterparts.
#[derive(Debug, Clone, PartialEq)]
pub struct AlternativeMapping {
    /// Interval in CHM13
    pub source: Position,
    /// Counterpart through the alternative record
    pub first: Position,
    /// Counterpart through the overlapping direct record
    pub second: Position,
}

impl fmt::Display for AlternativeMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.source, self.first, self.second)
    }
}

/// Paths of the `-empty` and `-alternatives` companions of `base`.
pub fn companion_paths<P: AsRef<Path>>(base: P) -> (PathBuf, PathBuf) {
    let base = base.as_ref();
    (
        with_suffix(base, EMPTY_SUFFIX),
        with_suffix(base, ALTERNATIVES_SUFFIX),
    )
}

fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Parse an empty-interval file (one interval per line).
pub fn parse_empty_intervals<R: Read>(reader: R, source: &str) -> Result<Vec<Position>, SvError> {
    let mut intervals = Vec::new();
    for (line_num, line) in non_blank_lines(reader, source)? {
        if line.contains(['\t', ';']) {
            return Err(SvError::malformed(
                source,
                line_num,
                "expected a single interval per line",
            ));
        }
        intervals.push(position_from_str(&line)?);
    }
    Ok(intervals)
}

/// Load an empty-interval file (supports `.gz`).
pub fn load_empty_intervals<P: AsRef<Path>>(path: P) -> Result<Vec<Position>, SvError> {
    let path = path.as_ref();
    let intervals = parse_empty_intervals(open_input(path)?, &source_name(path))?;
    log::info!(
        "Loaded {} empty intervals from {}",
        intervals.len(),
        path.display()
    );
    Ok(intervals)
}

/// Parse an alternative-mapping file (three intervals per line).
pub fn parse_alternative_mappings<R: Read>(
    reader: R,
    source: &str,
) -> Result<Vec<AlternativeMapping>, SvError> {
    let mut mappings = Vec::new();
    for (line_num, line) in non_blank_lines(reader, source)? {
        let fields = split_record_fields(&line);
        if fields.len() != 3 {
            return Err(SvError::malformed(
                source,
                line_num,
                format!("expected 3 fields, got {}", fields.len()),
            ));
        }
        mappings.push(AlternativeMapping {
            source: position_from_str(fields[0])?,
            first: position_from_str(fields[1])?,
            second: position_from_str(fields[2])?,
        });
    }
    Ok(mappings)
}

/// Load an alternative-mapping file (supports `.gz`).
pub fn load_alternative_mappings<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<AlternativeMapping>, SvError> {
    let path = path.as_ref();
    let mappings = parse_alternative_mappings(open_input(path)?, &source_name(path))?;
    log::info!(
        "Loaded {} alternative mappings from {}",
        mappings.len(),
        path.display()
    );
    Ok(mappings)
}

fn non_blank_lines<R: Read>(reader: R, source: &str) -> Result<Vec<(usize, String)>, SvError> {
    let mut lines = Vec::new();
    for (idx, line_result) in BufReader::new(reader).lines().enumerate() {
        let line = line_result.map_err(|e| SvError::Io {
            msg: format!("Failed to read line {} of {}: {}", idx + 1, source, e),
        })?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push((idx + 1, trimmed.to_string()));
        }
    }
    Ok(lines)
}

/// Source intervals of every empty record.
pub fn derive_empty_intervals(records: &[AlignmentRecord]) -> Vec<Position> {
    records
        .iter()
        .filter_map(|record| match record {
            AlignmentRecord::Empty { source } => Some(*source),
            _ => None,
        })
        .collect()
}

/// Pair every alternative record with each direct record it overlaps.
///
/// For an alternative `(alt_source, alt_target)` and an overlapping direct
/// `(source, target)`, the shared part `alt_source ∩ source` is projected
/// through both records.
///
/// # Errors
///
/// An alternative record that overlaps no direct record is rejected, as are
/// reversed source intervals (see [`Position::map_through`]).
pub fn derive_alternative_mappings(
    records: &[AlignmentRecord],
) -> Result<Vec<AlternativeMapping>, SvError> {
    let mut mappings = Vec::new();

    for record in records {
        let AlignmentRecord::Alternative {
            source: alt_source,
            target: alt_target,
        } = record
        else {
            continue;
        };

        let mut matched = false;
        for other in records {
            let AlignmentRecord::Direct { source, target } = other else {
                continue;
            };
            if !source.overlap_with(alt_source) {
                continue;
            }

            matched = true;
            let part = alt_source.intersection_with(source)?;
            mappings.push(AlternativeMapping {
                source: part,
                first: alt_target.map_through(alt_source, &part)?,
                second: target.map_through(source, &part)?,
            });
        }

        if !matched {
            return Err(SvError::InvalidMapping {
                msg: format!(
                    "alternative record {} overlaps no direct record",
                    alt_source
                ),
            });
        }
    }

    Ok(mappings)
}
