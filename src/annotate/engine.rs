//! Overlap scans against the catalog and the alignment data

use super::finding::{FindingKind, MappingFinding, NestedFinding};
use crate::catalog::{Catalog, KnownDifference};
use crate::error::SvError;
use crate::interval::Position;
use crate::liftover::{AlignmentRecord, LiftoverData};

/// Catalog records whose HG38 interval overlaps `query`, in file order.
pub fn match_catalog<'a>(query: &Position, catalog: &'a Catalog) -> Vec<&'a KnownDifference> {
    catalog.overlapping(query).collect()
}

/// Scan the forward alignments for records overlapping `query`.
///
/// Direct and alternative overlaps are projected into CHM13; the projection
/// is then checked (in ascending orientation) against the empty intervals and
/// alternative mappings of the reverse direction. Empty overlaps yield an
/// unmapped finding with no further lookups.
///
/// # Errors
///
/// Propagates mapping precondition failures, e.g. for a reversed query.
pub fn match_alignments(
    query: &Position,
    data: &LiftoverData,
) -> Result<Vec<MappingFinding>, SvError> {
    let mut findings = Vec::new();

    for record in data.alignments().overlapping(query) {
        let part = query.intersection_with(record.source())?;

        let (kind, source, target) = match record {
            AlignmentRecord::Direct { source, target } => {
                (FindingKind::SitePosition, source, target)
            }
            AlignmentRecord::Alternative { source, target } => {
                (FindingKind::AlternativeSite, source, target)
            }
            AlignmentRecord::Empty { .. } => {
                findings.push(MappingFinding::unmapped(part));
                continue;
            }
        };

        let mapped = target.map_through(source, &part)?;
        let nested = counterpart_findings(&mapped.normalized(), data)?;

        findings.push(MappingFinding {
            kind,
            part,
            target: Some(mapped),
            reversed: target.is_reversed(),
            nested,
        });
    }

    log::debug!("{}: {} mapping findings", query, findings.len());
    Ok(findings)
}

/// Empty and multiple-source findings for an ascending CHM13 interval.
fn counterpart_findings(
    counterpart: &Position,
    data: &LiftoverData,
) -> Result<Vec<NestedFinding>, SvError> {
    let mut nested = Vec::new();

    for empty in data.empty().iter().filter(|e| e.overlap_with(counterpart)) {
        nested.push(NestedFinding::NoMappingBack {
            part: empty.intersection_with(counterpart)?,
        });
    }

    for alternative in data
        .alternatives()
        .iter()
        .filter(|a| a.source.overlap_with(counterpart))
    {
        let part = alternative.source.intersection_with(counterpart)?;
        nested.push(NestedFinding::MultipleSources {
            part,
            first: alternative.first.map_through(&alternative.source, &part)?,
            second: alternative.second.map_through(&alternative.source, &part)?,
        });
    }

    Ok(nested)
}
