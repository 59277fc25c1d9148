//! Configuration file support for ferro-sv.
//!
//! A `.ferro-sv.toml` file can point at the data directory, rename the
//! individual data files and change the translocation search distance.
//!
//! # Example Configuration
//!
//! ```toml
//! [data]
//! dir = "/srv/om38to13/data"
//! catalog = "prediction_38.bed.gz"
//!
//! [translocation]
//! distance = 20000
//! ```
//!
//! # Config File Locations
//!
//! Configuration is searched in this order (first found wins):
//! 1. the path given with `--config`
//! 2. `.ferro-sv.toml` in current directory
//! 3. `~/.config/ferro-sv/config.toml`
//!
//! CLI flags take precedence over config file settings, which take precedence
//! over the built-in defaults.

use crate::error::SvError;
use crate::liftover::companion_paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Data directory used when neither the CLI nor the config names one.
pub const DEFAULT_DATA_DIR: &str = "data";

/// File name of the HG38 -> CHM13 alignments.
pub const FORWARD_ALIGNMENTS: &str = "fromHG38toCHM13-alignments";

/// File name of the CHM13 -> HG38 alignments.
pub const REVERSE_ALIGNMENTS: &str = "fromCHM13toHG38-alignments";

/// File name of the known-difference catalog.
pub const CATALOG_FILE: &str = "prediction_38.bed";

/// Default half-width of the translocation breakpoint window.
pub const DEFAULT_DISTANCE: u64 = 10_000;

/// Parsed configuration from a .ferro-sv.toml file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SvConfig {
    /// Data file locations.
    pub data: DataConfig,
    /// Translocation matching.
    pub translocation: TranslocationConfig,
}

/// Data section of the config file.
///
/// File entries are resolved against the data directory; absolute paths are
/// used as they are.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    pub dir: Option<PathBuf>,
    pub forward: Option<PathBuf>,
    pub reverse: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
}

/// Translocation section of the config file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TranslocationConfig {
    /// Distance from the breakpoint accepted as a match.
    pub distance: Option<u64>,
}

/// Resolved locations of every data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    /// HG38 -> CHM13 alignments
    pub forward: PathBuf,
    /// CHM13 -> HG38 alignments (base of the companion files)
    pub reverse: PathBuf,
    /// Known-difference catalog
    pub catalog: PathBuf,
}

impl DataPaths {
    /// Default file names inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            forward: dir.join(FORWARD_ALIGNMENTS),
            reverse: dir.join(REVERSE_ALIGNMENTS),
            catalog: dir.join(CATALOG_FILE),
        }
    }

    /// `-empty` and `-alternatives` companions of the reverse alignments.
    pub fn companions(&self) -> (PathBuf, PathBuf) {
        companion_paths(&self.reverse)
    }
}

impl SvConfig {
    /// Load configuration, preferring an explicit path over the default
    /// locations. Returns the default configuration when no file exists.
    ///
    /// # Errors
    ///
    /// An explicit path that does not exist, or any config file that cannot
    /// be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, SvError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(SvError::MissingInput {
                    path: path.display().to_string(),
                });
            }
            return Self::load_from_path(path);
        }

        for candidate in default_locations() {
            if candidate.exists() {
                return Self::load_from_path(&candidate);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self, SvError> {
        let content = fs::read_to_string(path).map_err(|e| SvError::Config {
            msg: format!("Failed to read {}: {}", path.display(), e),
        })?;
        let config = Self::parse(&content).map_err(|e| match e {
            SvError::Config { msg } => SvError::Config {
                msg: format!("{}: {}", path.display(), msg),
            },
            other => other,
        })?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML content.
    pub fn parse(content: &str) -> Result<Self, SvError> {
        toml::from_str(content).map_err(|e| SvError::Config { msg: e.to_string() })
    }

    /// Resolve data file paths; `cli_dir` overrides the configured directory.
    pub fn data_paths(&self, cli_dir: Option<&Path>) -> DataPaths {
        let dir = cli_dir
            .map(Path::to_path_buf)
            .or_else(|| self.data.dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let resolve = |entry: &Option<PathBuf>, default: &str| match entry {
            Some(path) => dir.join(path),
            None => dir.join(default),
        };

        DataPaths {
            forward: resolve(&self.data.forward, FORWARD_ALIGNMENTS),
            reverse: resolve(&self.data.reverse, REVERSE_ALIGNMENTS),
            catalog: resolve(&self.data.catalog, CATALOG_FILE),
        }
    }

    /// Translocation distance; `cli_distance` overrides the configured one.
    pub fn distance(&self, cli_distance: Option<u64>) -> u64 {
        cli_distance
            .or(self.translocation.distance)
            .unwrap_or(DEFAULT_DISTANCE)
    }
}

/// Default config file locations, in search order.
fn default_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(".ferro-sv.toml")];
    if let Some(home) = dirs_home() {
        locations.push(home.join(".config").join("ferro-sv").join("config.toml"));
    }
    locations
}

/// Get the user's home directory.
fn dirs_home() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}
