//! SMAP parsing and inversion reconstruction

use super::record::{
    Breakpoint, InversionLeg, StructuralVariant, NO_LINK, TRANSLOCATION_MARKER,
    UNKNOWN_COORDINATE,
};
use crate::error::SvError;
use crate::interval::{Chromosome, Position};
use crate::io::{open_input, source_name};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;
use std::str::FromStr;

/// Minimum number of tab-separated columns in a data row.
pub const MIN_COLUMNS: usize = 13;

const COL_ID: usize = 0;
const COL_CHROMOSOME: usize = 2;
const COL_SECOND_CHROMOSOME: usize = 3;
const COL_FIRST_COORDINATE: usize = 6;
const COL_SECOND_COORDINATE: usize = 7;
const COL_LINK_ID: usize = 12;

/// A parsed SMAP file.
///
/// Built once; every accessor is read-only.
#[derive(Debug, Clone, Default)]
pub struct SmapDataset {
    header: Vec<String>,
    originals: BTreeMap<i64, String>,
    common: Vec<StructuralVariant>,
    translocations: Vec<StructuralVariant>,
    inversions: Vec<StructuralVariant>,
}

impl SmapDataset {
    /// Load an SMAP file (supports `.gz`).
    ///
    /// `epsilon` is the half-width of the window searched around each
    /// translocation breakpoint.
    pub fn from_file<P: AsRef<Path>>(path: P, epsilon: f64) -> Result<Self, SvError> {
        let path = path.as_ref();
        let dataset = Self::parse(open_input(path)?, &source_name(path), epsilon)?;
        log::info!(
            "Loaded {} from {}: {} common, {} translocations, {} inversions",
            dataset.originals.len(),
            path.display(),
            dataset.common.len(),
            dataset.translocations.len(),
            dataset.inversions.len()
        );
        Ok(dataset)
    }

    /// Parse SMAP rows from a reader.
    pub fn parse<R: Read>(reader: R, source: &str, epsilon: f64) -> Result<Self, SvError> {
        let buf_reader = BufReader::new(reader);
        let mut dataset = Self::default();
        let mut legs = Vec::new();

        for (idx, line_result) in buf_reader.lines().enumerate() {
            let line_num = idx + 1;
            let line = line_result.map_err(|e| SvError::Io {
                msg: format!("Failed to read line {} of {}: {}", line_num, source, e),
            })?;

            if line.starts_with('#') {
                dataset.header.push(line.trim_end().to_string());
                continue;
            }

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let row = Row::split(line, line_num, source)?;
            let id: i64 = row.field(COL_ID, "id")?;
            if dataset.originals.contains_key(&id) {
                return Err(SvError::malformed(
                    source,
                    line_num,
                    format!("duplicate record id {}", id),
                ));
            }
            dataset.originals.insert(id, line.to_string());

            let link_id: i64 = row.field(COL_LINK_ID, "link id")?;
            if link_id != NO_LINK {
                let y = row.coordinate(COL_SECOND_COORDINATE)?;
                legs.push(InversionLeg {
                    id,
                    link_id,
                    chromosome: row.chromosome(COL_CHROMOSOME)?,
                    x: row.coordinate(COL_FIRST_COORDINATE)?,
                    y: (y != UNKNOWN_COORDINATE).then_some(y),
                });
            } else if line.contains(TRANSLOCATION_MARKER) {
                dataset.translocations.push(StructuralVariant::Translocation {
                    id,
                    a: Breakpoint::new(
                        row.chromosome(COL_CHROMOSOME)?,
                        row.coordinate(COL_FIRST_COORDINATE)?,
                        epsilon,
                    ),
                    b: Breakpoint::new(
                        row.chromosome(COL_SECOND_CHROMOSOME)?,
                        row.coordinate(COL_SECOND_COORDINATE)?,
                        epsilon,
                    ),
                    original: line.to_string(),
                });
            } else {
                let position = Position::new(
                    row.chromosome(COL_CHROMOSOME)?,
                    row.coordinate(COL_FIRST_COORDINATE)?,
                    row.coordinate(COL_SECOND_COORDINATE)?,
                );
                // Accepted as-is; only inversion legs are ordered strictly
                if position.is_reversed() {
                    log::warn!(
                        "{} line {}: record {} has start > end ({})",
                        source,
                        line_num,
                        id,
                        position
                    );
                }
                dataset.common.push(StructuralVariant::Common {
                    id,
                    position,
                    original: line.to_string(),
                });
            }
        }

        dataset.inversions = dataset.reconstruct_inversions(&legs)?;
        Ok(dataset)
    }

    /// Pair inversion legs through their link ids, in file order.
    fn reconstruct_inversions(
        &self,
        legs: &[InversionLeg],
    ) -> Result<Vec<StructuralVariant>, SvError> {
        let by_id: HashMap<i64, &InversionLeg> = legs.iter().map(|leg| (leg.id, leg)).collect();
        let mut paired: HashSet<i64> = HashSet::new();
        let mut inversions = Vec::new();

        for leg in legs {
            leg.validate()?;

            if paired.contains(&leg.id) {
                continue;
            }

            let partner = by_id
                .get(&leg.link_id)
                .ok_or_else(|| SvError::InvalidInversion {
                    id: leg.id,
                    msg: format!("partner record {} not found", leg.link_id),
                })?;

            let position = leg.reconstruct(partner)?;
            log::debug!(
                "Reconstructed inversion {}/{} at {}",
                leg.id,
                partner.id,
                position
            );

            paired.insert(leg.id);
            paired.insert(partner.id);
            inversions.push(StructuralVariant::Inversion {
                id: leg.id,
                partner_id: partner.id,
                position,
                original: self.originals.get(&leg.id).cloned().unwrap_or_default(),
            });
        }

        Ok(inversions)
    }

    /// `#` header lines, verbatim.
    pub fn header_lines(&self) -> &[String] {
        &self.header
    }

    /// Row text of a record id.
    pub fn original(&self, id: i64) -> Option<&str> {
        self.originals.get(&id).map(String::as_str)
    }

    /// Row text of every record, keyed by id.
    pub fn originals(&self) -> &BTreeMap<i64, String> {
        &self.originals
    }

    /// Variants with a single called interval.
    pub fn common(&self) -> &[StructuralVariant] {
        &self.common
    }

    /// Translocation variants.
    pub fn translocations(&self) -> &[StructuralVariant] {
        &self.translocations
    }

    /// Reconstructed inversions.
    pub fn inversions(&self) -> &[StructuralVariant] {
        &self.inversions
    }

    /// All variants: common, then translocations, then inversions.
    pub fn variants(&self) -> impl Iterator<Item = &StructuralVariant> {
        self.common
            .iter()
            .chain(self.translocations.iter())
            .chain(self.inversions.iter())
    }

    /// Write the header lines and the rows of `ids`, ascending.
    ///
    /// Ids with no row are ignored.
    pub fn write_subset<W: Write>(&self, writer: &mut W, ids: &BTreeSet<i64>) -> Result<(), SvError> {
        for line in &self.header {
            writeln!(writer, "{}", line)?;
        }
        for id in ids {
            if let Some(line) = self.originals.get(id) {
                writeln!(writer, "{}", line)?;
            }
        }
        Ok(())
    }
}

/// Tab-split data row with typed field access.
struct Row<'a> {
    fields: Vec<&'a str>,
    line_num: usize,
    source: &'a str,
}

impl<'a> Row<'a> {
    fn split(line: &'a str, line_num: usize, source: &'a str) -> Result<Self, SvError> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < MIN_COLUMNS {
            return Err(SvError::malformed(
                source,
                line_num,
                format!(
                    "expected at least {} tab-separated columns, got {}",
                    MIN_COLUMNS,
                    fields.len()
                ),
            ));
        }
        Ok(Self {
            fields,
            line_num,
            source,
        })
    }

    fn field<T: FromStr>(&self, index: usize, name: &str) -> Result<T, SvError> {
        let text = self.fields[index].trim();
        text.parse().map_err(|_| {
            SvError::malformed(
                self.source,
                self.line_num,
                format!("invalid {} '{}' in column {}", name, text, index + 1),
            )
        })
    }

    fn chromosome(&self, index: usize) -> Result<Chromosome, SvError> {
        let id: u32 = self.field(index, "chromosome")?;
        if id == 0 {
            return Err(SvError::malformed(
                self.source,
                self.line_num,
                format!("invalid chromosome '0' in column {}", index + 1),
            ));
        }
        Ok(Chromosome::new(id))
    }

    fn coordinate(&self, index: usize) -> Result<f64, SvError> {
        let value: f64 = self.field(index, "coordinate")?;
        if !value.is_finite() {
            return Err(SvError::malformed(
                self.source,
                self.line_num,
                format!("non-finite coordinate in column {}", index + 1),
            ));
        }
        Ok(value)
    }
}
