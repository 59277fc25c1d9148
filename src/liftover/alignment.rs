//! Alignment (liftover) record parser.
//!
//! Each row relates an interval in the source assembly to its counterpart in
//! the target assembly. Fields are separated by tabs or semicolons:
//!
//! ```text
//! S   chr1:1000-2000   chr1:1200-2200    direct (one-to-one) mapping
//! A   chr1:3000-3500   chr5:900-400      alternative mapping
//! E   chr1:4000-4100                     no counterpart
//! ```

use crate::error::SvError;
use crate::interval::{position_from_str, Position};
use crate::io::{open_input, source_name, split_record_fields};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Kind of an alignment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlignmentKind {
    /// One-to-one mapping
    Direct,
    /// Source also maps elsewhere
    Alternative,
    /// Source has no counterpart
    Empty,
}

/// One row of an alignment file.
#[derive(Debug, Clone, PartialEq)]
pub enum AlignmentRecord {
    /// One-to-one mapping of `source` onto `target`.
    Direct { source: Position, target: Position },
    /// `source` maps onto `target` and onto at least one other interval.
    Alternative { source: Position, target: Position },
    /// `source` has no counterpart in the target assembly.
    Empty { source: Position },
}

impl AlignmentRecord {
    /// Interval in the source assembly.
    pub fn source(&self) -> &Position {
        match self {
            AlignmentRecord::Direct { source, .. }
            | AlignmentRecord::Alternative { source, .. }
            | AlignmentRecord::Empty { source } => source,
        }
    }

    /// Interval in the target assembly, if there is one.
    pub fn target(&self) -> Option<&Position> {
        match self {
            AlignmentRecord::Direct { target, .. } | AlignmentRecord::Alternative { target, .. } => {
                Some(target)
            }
            AlignmentRecord::Empty { .. } => None,
        }
    }

    /// Record kind.
    pub fn kind(&self) -> AlignmentKind {
        match self {
            AlignmentRecord::Direct { .. } => AlignmentKind::Direct,
            AlignmentRecord::Alternative { .. } => AlignmentKind::Alternative,
            AlignmentRecord::Empty { .. } => AlignmentKind::Empty,
        }
    }

    /// Parse one row. `line_num` and `source_name` are used for errors.
    pub fn parse_row(line: &str, line_num: usize, source_name: &str) -> Result<Self, SvError> {
        let fields = split_record_fields(line);
        let kind = fields[0].chars().next();

        match (kind, fields.len()) {
            (Some('E'), 2) => Ok(AlignmentRecord::Empty {
                source: position_from_str(fields[1])?,
            }),
            (Some('S'), 3) => Ok(AlignmentRecord::Direct {
                source: position_from_str(fields[1])?,
                target: position_from_str(fields[2])?,
            }),
            (Some('A'), 3) => Ok(AlignmentRecord::Alternative {
                source: position_from_str(fields[1])?,
                target: position_from_str(fields[2])?,
            }),
            _ => Err(SvError::malformed(
                source_name,
                line_num,
                format!(
                    "expected 'S'/'A' rows with 3 fields or 'E' rows with 2 fields, got '{}' with {} fields",
                    fields[0],
                    fields.len()
                ),
            )),
        }
    }
}

/// All records of one alignment file, in file order.
#[derive(Debug, Clone, Default)]
pub struct AlignmentFile {
    records: Vec<AlignmentRecord>,
}

impl AlignmentFile {
    /// Create an alignment file from records.
    pub fn new(records: Vec<AlignmentRecord>) -> Self {
        Self { records }
    }

    /// Load an alignment file from a path (supports `.gz`).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SvError> {
        let path = path.as_ref();
        let file = Self::parse(open_input(path)?, &source_name(path))?;
        log::info!(
            "Loaded {} alignment records from {} ({} direct, {} alternative, {} empty)",
            file.len(),
            path.display(),
            file.count(AlignmentKind::Direct),
            file.count(AlignmentKind::Alternative),
            file.count(AlignmentKind::Empty)
        );
        Ok(file)
    }

    /// Parse alignment records from a reader.
    pub fn parse<R: Read>(reader: R, source: &str) -> Result<Self, SvError> {
        let buf_reader = BufReader::new(reader);
        let mut records = Vec::new();

        for (idx, line_result) in buf_reader.lines().enumerate() {
            let line_num = idx + 1;
            let line = line_result.map_err(|e| SvError::Io {
                msg: format!("Failed to read line {} of {}: {}", line_num, source, e),
            })?;

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            records.push(AlignmentRecord::parse_row(line, line_num, source)?);
        }

        Ok(Self::new(records))
    }

    /// Records whose source interval overlaps `query`, in file order.
    pub fn overlapping<'a: 'q, 'q>(
        &'a self,
        query: &'q Position,
    ) -> impl Iterator<Item = &'a AlignmentRecord> + 'q {
        self.records
            .iter()
            .filter(move |record| record.source().overlap_with(query))
    }

    /// All records.
    pub fn records(&self) -> &[AlignmentRecord] {
        &self.records
    }

    /// Number of records of one kind.
    pub fn count(&self, kind: AlignmentKind) -> usize {
        self.records.iter().filter(|r| r.kind() == kind).count()
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the file has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
