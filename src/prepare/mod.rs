//! Companion file preparation for ferro-sv annotation.
//!
//! The annotation engine reads two files derived from the reverse
//! (CHM13 -> HG38) alignments: `<reverse>-empty` and `<reverse>-alternatives`.
//! This module regenerates them from the reverse alignment file.

use crate::config::DataPaths;
use crate::error::SvError;
use crate::io::AtomicOutput;
use crate::liftover::{
    companion_paths, derive_alternative_mappings, derive_empty_intervals, AlignmentFile,
};
use std::io::Write;
use std::path::PathBuf;

/// Configuration for companion file preparation.
#[derive(Debug, Clone)]
pub struct PrepareConfig {
    /// Reverse alignment file the companions are derived from
    pub reverse: PathBuf,
    /// Overwrite companions that already exist
    pub force: bool,
}

/// Status of one companion file after preparation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanionStatus {
    /// Written with this many records
    Written(usize),
    /// Left untouched because it already existed
    Kept,
}

/// What [`prepare_companions`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepareSummary {
    pub empty_path: PathBuf,
    pub empty: CompanionStatus,
    pub alternatives_path: PathBuf,
    pub alternatives: CompanionStatus,
}

impl PrepareConfig {
    /// Prepare the companions of the configured reverse alignments.
    pub fn for_paths(paths: &DataPaths, force: bool) -> Self {
        Self {
            reverse: paths.reverse.clone(),
            force,
        }
    }
}

/// Derive and write the `-empty` and `-alternatives` companions.
///
/// Existing companions are kept unless `force` is set. Each file is written
/// atomically.
pub fn prepare_companions(config: &PrepareConfig) -> Result<PrepareSummary, SvError> {
    let (empty_path, alternatives_path) = companion_paths(&config.reverse);

    let write_empty = config.force || !empty_path.exists();
    let write_alternatives = config.force || !alternatives_path.exists();

    if !write_empty && !write_alternatives {
        log::info!(
            "Companions of {} already exist; use --force to regenerate",
            config.reverse.display()
        );
        return Ok(PrepareSummary {
            empty_path,
            empty: CompanionStatus::Kept,
            alternatives_path,
            alternatives: CompanionStatus::Kept,
        });
    }

    let reverse = AlignmentFile::from_file(&config.reverse)?;

    let empty = if write_empty {
        let intervals = derive_empty_intervals(reverse.records());
        let mut output = AtomicOutput::create(&empty_path)?;
        for interval in &intervals {
            writeln!(output, "{}", interval)?;
        }
        output.commit()?;
        log::info!(
            "Wrote {} empty intervals to {}",
            intervals.len(),
            empty_path.display()
        );
        CompanionStatus::Written(intervals.len())
    } else {
        CompanionStatus::Kept
    };

    let alternatives = if write_alternatives {
        let mappings = derive_alternative_mappings(reverse.records())?;
        let mut output = AtomicOutput::create(&alternatives_path)?;
        for mapping in &mappings {
            writeln!(output, "{}", mapping)?;
        }
        output.commit()?;
        log::info!(
            "Wrote {} alternative mappings to {}",
            mappings.len(),
            alternatives_path.display()
        );
        CompanionStatus::Written(mappings.len())
    } else {
        CompanionStatus::Kept
    };

    Ok(PrepareSummary {
        empty_path,
        empty,
        alternatives_path,
        alternatives,
    })
}

/// Print a summary of a preparation run.
pub fn print_prepare_summary(summary: &PrepareSummary) {
    for (path, status) in [
        (&summary.empty_path, &summary.empty),
        (&summary.alternatives_path, &summary.alternatives),
    ] {
        match status {
            CompanionStatus::Written(count) => {
                eprintln!("  Wrote {} ({} records)", path.display(), count)
            }
            CompanionStatus::Kept => eprintln!("  Kept existing {}", path.display()),
        }
    }
}
