//! Text and JSON rendering of annotation results
//!
//! A region report has two sections:
//!
//! ```text
//! \tStructural variants induced by transition from HG38 to CHM13-T2T
//! \t\tDEL chr1:1000-2000 (1001) chr1:1500-1600 (101)
//! \tAmbiguous and other mapping events
//! \t\tchr1:1000-2000 site positions in CHM13 chr1:1500-1600
//! \t\t\tchr1:1550-1560 in CHM13 have no mapping to HG38
//! ```
//!
//! An empty catalog section renders as `None`; an empty mapping section has
//! no lines. Every line of a report nested under a
//! translocation breakpoint gets one extra leading tab.

use super::engine::{match_alignments, match_catalog};
use super::finding::MappingFinding;
use crate::catalog::{Catalog, KnownDifference};
use crate::error::SvError;
use crate::interval::{Assembly, Position};
use crate::liftover::LiftoverData;
use crate::smap::StructuralVariant;
use serde::Serialize;
use std::io::Write;

/// Column legend printed under the catalog section title by `view`.
pub const CATALOG_LEGEND: &str = "Type|HG38 coordinate (size)|CHM13 coordinate (size)";

const NONE: &str = "None";

const MAPPING_TITLE: &str = "Ambiguous and other mapping events";

fn catalog_title() -> String {
    format!(
        "Structural variants induced by transition from {} to {}",
        Assembly::Hg38.long_name(),
        Assembly::Chm13.long_name()
    )
}

/// Both scans for one query interval.
#[derive(Debug, Clone, Serialize)]
pub struct RegionReport<'a> {
    pub query: Position,
    pub known_differences: Vec<&'a KnownDifference>,
    pub mapping_events: Vec<MappingFinding>,
}

impl<'a> RegionReport<'a> {
    /// Run the catalog and alignment scans for `query`.
    pub fn build(
        query: &Position,
        catalog: &'a Catalog,
        data: &LiftoverData,
    ) -> Result<Self, SvError> {
        Ok(Self {
            query: *query,
            known_differences: match_catalog(query, catalog),
            mapping_events: match_alignments(query, data)?,
        })
    }

    /// Write both sections, each line prefixed by `indent`.
    ///
    /// With `legend`, the catalog column legend follows the section title.
    pub fn write_text<W: Write>(
        &self,
        writer: &mut W,
        indent: &str,
        legend: bool,
    ) -> Result<(), SvError> {
        writeln!(writer, "{}\t{}", indent, catalog_title())?;
        if legend {
            writeln!(writer, "{}\t\t{}", indent, CATALOG_LEGEND)?;
        }
        if self.known_differences.is_empty() {
            writeln!(writer, "{}\t\t{}", indent, NONE)?;
        }
        for record in &self.known_differences {
            writeln!(writer, "{}\t\t{}", indent, catalog_line(record))?;
        }

        writeln!(writer, "{}\t{}", indent, MAPPING_TITLE)?;
        for finding in &self.mapping_events {
            writeln!(writer, "{}\t\t{}", indent, finding)?;
            for nested in &finding.nested {
                writeln!(writer, "{}\t\t\t{}", indent, nested)?;
            }
        }

        writeln!(writer)?;
        Ok(())
    }
}

/// `label hg38 (size) chm13 (size)`
pub fn catalog_line(record: &KnownDifference) -> String {
    format!(
        "{} {} ({}) {} ({})",
        record.label,
        record.hg38,
        record.hg38.size() as i64,
        record.chm13,
        record.chm13.size() as i64
    )
}

/// Write the annotation block of one variant.
///
/// Translocations get one labelled region report per breakpoint window;
/// other variants a single report on their interval.
pub fn write_variant_report<W: Write>(
    writer: &mut W,
    variant: &StructuralVariant,
    catalog: &Catalog,
    data: &LiftoverData,
) -> Result<(), SvError> {
    writeln!(writer, "{}", variant)?;

    match variant {
        StructuralVariant::Translocation { a, b, .. } => {
            for (label, breakpoint) in [("A", a), ("B", b)] {
                writeln!(writer, "\t{}: {}", label, breakpoint.window())?;
                RegionReport::build(breakpoint.window(), catalog, data)?.write_text(
                    writer, "\t", false,
                )?;
            }
            writeln!(writer)?;
        }
        StructuralVariant::Common { position, .. }
        | StructuralVariant::Inversion { position, .. } => {
            RegionReport::build(position, catalog, data)?.write_text(writer, "", false)?;
        }
    }

    Ok(())
}
