//! Data directory validation for ferro-sv.
//!
//! This module verifies that the alignment, companion and catalog files are
//! present and parse, and reports how many records each holds.

use crate::catalog::Catalog;
use crate::config::DataPaths;
use crate::liftover::{load_alternative_mappings, load_empty_intervals, AlignmentFile};
use std::path::{Path, PathBuf};

/// One checked data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCheck {
    /// Short description, e.g. "catalog"
    pub name: &'static str,
    pub path: PathBuf,
    /// Record count if the file parsed
    pub records: Option<usize>,
}

/// Result of checking the data directory.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Whether every required file is present and parses
    pub valid: bool,
    /// Every file that was looked at
    pub files: Vec<FileCheck>,
    /// Error messages if any
    pub errors: Vec<String>,
    /// Warning messages if any
    pub warnings: Vec<String>,
}

impl CheckResult {
    fn new() -> Self {
        Self {
            valid: true,
            files: Vec::new(),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn record(&mut self, name: &'static str, path: &Path, outcome: Result<usize, String>) {
        let records = match outcome {
            Ok(count) => Some(count),
            Err(error) => {
                self.valid = false;
                self.errors.push(error);
                None
            }
        };
        self.files.push(FileCheck {
            name,
            path: path.to_path_buf(),
            records,
        });
    }
}

/// Check every data file and return a detailed result.
///
/// The reverse alignment file itself is only needed by `prepare`, so its
/// absence is a warning; missing companions point at `prepare`.
pub fn check_data(paths: &DataPaths) -> CheckResult {
    let mut result = CheckResult::new();
    let (empty_path, alternatives_path) = paths.companions();

    result.record(
        "forward alignments",
        &paths.forward,
        AlignmentFile::from_file(&paths.forward)
            .map(|file| file.len())
            .map_err(|e| e.to_string()),
    );

    if paths.reverse.exists() {
        result.record(
            "reverse alignments",
            &paths.reverse,
            AlignmentFile::from_file(&paths.reverse)
                .map(|file| file.len())
                .map_err(|e| e.to_string()),
        );
    } else {
        result.warnings.push(format!(
            "Reverse alignments not found: {}",
            paths.reverse.display()
        ));
    }

    for (name, path, outcome) in [
        (
            "empty intervals",
            &empty_path,
            load_empty_intervals(&empty_path).map(|v| v.len()),
        ),
        (
            "alternative mappings",
            &alternatives_path,
            load_alternative_mappings(&alternatives_path).map(|v| v.len()),
        ),
    ] {
        let outcome = outcome.map_err(|e| {
            if path.exists() {
                e.to_string()
            } else {
                format!("{}. Run 'ferro-sv prepare' first.", e)
            }
        });
        result.record(name, path, outcome);
    }

    result.record(
        "catalog",
        &paths.catalog,
        Catalog::from_file(&paths.catalog)
            .map(|catalog| catalog.len())
            .map_err(|e| e.to_string()),
    );

    result
}

/// Print a detailed summary of the data check.
pub fn print_check_summary(result: &CheckResult) {
    if result.valid {
        eprintln!("=== Data Check ===");
        eprintln!("  Status: OK");
    } else {
        eprintln!("Data check FAILED:");
        for error in &result.errors {
            eprintln!("  ERROR: {}", error);
        }
    }

    eprintln!();
    eprintln!("=== Files ===");
    for file in &result.files {
        match file.records {
            Some(count) => eprintln!("  {}: {} ({} records)", file.name, file.path.display(), count),
            None => eprintln!("  {}: {} (unusable)", file.name, file.path.display()),
        }
    }

    for warning in &result.warnings {
        eprintln!("  WARNING: {}", warning);
    }
}
