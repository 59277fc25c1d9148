//! The `filter`, `annotate` and `view` operations.
//!
//! Each operation loads its inputs once, runs the annotation scans and writes
//! its output. `filter` and `annotate` write through [`AtomicOutput`], so a
//! failed run never leaves a partial output file behind.

use crate::annotate::{match_catalog, write_variant_report, RegionReport};
use crate::catalog::Catalog;
use crate::cli::{derive_output_path, parse_region, require_smap_input, OutputFormat, OutputKind};
use crate::config::DataPaths;
use crate::error::SvError;
use crate::io::AtomicOutput;
use crate::liftover::LiftoverData;
use crate::smap::{SmapDataset, StructuralVariant};
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Settings shared by `filter` and `annotate`.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// SMAP input
    pub input: PathBuf,
    /// Output file
    pub output: PathBuf,
    /// Half-width of the window around each translocation breakpoint
    pub distance: u64,
    /// Data files
    pub paths: DataPaths,
}

/// What a `filter` or `annotate` run did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Variants read from the input
    pub variants: usize,
    /// Variants written (all of them for `annotate`)
    pub written: usize,
    /// Output file
    pub output: PathBuf,
}

/// Whether no position of `variant` overlaps a known difference.
///
/// A translocation passes only if neither breakpoint window matches.
pub fn is_novel(variant: &StructuralVariant, catalog: &Catalog) -> bool {
    variant
        .query_positions()
        .iter()
        .all(|position| match_catalog(position, catalog).is_empty())
}

/// Record ids of every variant that [`is_novel`], ascending.
///
/// An inversion is identified by its first leg in file order.
pub fn novel_record_ids(dataset: &SmapDataset, catalog: &Catalog) -> BTreeSet<i64> {
    let mut ids = BTreeSet::new();
    for variant in dataset.variants() {
        if is_novel(variant, catalog) {
            ids.insert(variant.id());
        } else {
            log::debug!("Variant {} matches a known difference", variant.id());
        }
    }
    ids
}

/// Write the SMAP rows of variants that overlap no known difference.
pub fn filter(config: &RunConfig) -> Result<RunSummary, SvError> {
    require_smap_input(&config.input)?;

    let dataset = SmapDataset::from_file(&config.input, config.distance as f64)?;
    let catalog = Catalog::from_file(&config.paths.catalog)?;

    let ids = novel_record_ids(&dataset, &catalog);
    let variants = dataset.variants().count();
    let written = dataset
        .variants()
        .filter(|variant| ids.contains(&variant.id()))
        .count();

    let mut output = AtomicOutput::create(&config.output)?;
    dataset.write_subset(&mut output, &ids)?;
    let output = output.commit()?;

    log::info!(
        "Kept {} of {} variants in {}",
        written,
        variants,
        output.display()
    );
    Ok(RunSummary {
        variants,
        written,
        output,
    })
}

/// Write the annotation report of every variant.
///
/// Common variants come first, then translocations, then inversions.
pub fn annotate(config: &RunConfig) -> Result<RunSummary, SvError> {
    require_smap_input(&config.input)?;

    let dataset = SmapDataset::from_file(&config.input, config.distance as f64)?;
    let catalog = Catalog::from_file(&config.paths.catalog)?;
    let data = LiftoverData::from_files(&config.paths.forward, &config.paths.reverse)?;

    let mut output = AtomicOutput::create(&config.output)?;
    log::debug!("Writing report to {}", output.destination().display());
    let mut variants = 0;
    for variant in dataset.variants() {
        log::debug!("Annotating {} variant {}", variant.kind(), variant.id());
        write_variant_report(&mut output, variant, &catalog, &data)?;
        variants += 1;
    }
    let output = output.commit()?;

    log::info!("Annotated {} variants in {}", variants, output.display());
    Ok(RunSummary {
        variants,
        written: variants,
        output,
    })
}

/// Print the report of a single region.
pub fn view<W: Write>(
    region: &str,
    paths: &DataPaths,
    format: OutputFormat,
    writer: &mut W,
) -> Result<(), SvError> {
    let query = parse_region(region)?;
    let catalog = Catalog::from_file(&paths.catalog)?;
    let data = LiftoverData::from_files(&paths.forward, &paths.reverse)?;

    let report = RegionReport::build(&query, &catalog, &data)?;
    write_region(&report, format, writer)
}

fn write_region<W: Write>(
    report: &RegionReport<'_>,
    format: OutputFormat,
    writer: &mut W,
) -> Result<(), SvError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, report)?;
            writeln!(writer)?;
        }
        OutputFormat::Text => {
            writeln!(writer, "Position:  {}", report.query)?;
            report.write_text(writer, "", true)?;
        }
    }
    Ok(())
}

/// Default output path for `input` if none was given.
pub fn output_or_default(input: &Path, output: Option<PathBuf>, kind: OutputKind) -> PathBuf {
    output.unwrap_or_else(|| derive_output_path(input, kind))
}
