//! Catalog of known structural differences between HG38 and CHM13.
//!
//! Each row names a published difference and gives its interval in both
//! assemblies:
//!
//! ```text
//! label;chr1:1000-2000;chr1:1500-2600
//! label<TAB>chr1:1000-2000<TAB>chr1:1500-2600
//! ```

use crate::error::SvError;
use crate::interval::{position_from_str, Position};
use crate::io::{open_input, source_name, split_record_fields};
use serde::Serialize;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// A published difference between the two assemblies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KnownDifference {
    /// Name or type of the difference
    pub label: String,
    /// Interval in HG38
    pub hg38: Position,
    /// Interval in CHM13
    pub chm13: Position,
}

/// All known differences, in file order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<KnownDifference>,
}

impl Catalog {
    /// Create a catalog from records.
    pub fn new(records: Vec<KnownDifference>) -> Self {
        Self { records }
    }

    /// Load a catalog from a path (supports `.gz`).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SvError> {
        let path = path.as_ref();
        let catalog = Self::parse(open_input(path)?, &source_name(path))?;
        log::info!(
            "Loaded {} known differences from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse catalog rows from a reader.
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

            let fields = split_record_fields(line);
            if fields.len() != 3 {
                return Err(SvError::malformed(
                    source,
                    line_num,
                    format!("expected 3 fields, got {}", fields.len()),
                ));
            }

            records.push(KnownDifference {
                label: fields[0].to_string(),
                hg38: position_from_str(fields[1])?,
                chm13: position_from_str(fields[2])?,
            });
        }

        Ok(Self::new(records))
    }

    /// Records whose HG38 interval overlaps `query`.
    pub fn overlapping<'a: 'q, 'q>(
        &'a self,
        query: &'q Position,
    ) -> impl Iterator<Item = &'a KnownDifference> + 'q {
        self.records
            .iter()
            .filter(move |record| record.hg38.overlap_with(query))
    }

    /// All records.
    pub fn records(&self) -> &[KnownDifference] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the catalog has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
