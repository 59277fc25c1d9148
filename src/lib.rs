// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-sv: structural variant translation from HG38 to CHM13-T2T
//!
//! Part of the ferro bioinformatics toolkit.
//!
//! Optical-mapping SV calls (Bionano SMAP) made against HG38 are checked
//! against a catalog of published HG38/CHM13 differences and projected
//! through precomputed alignments between the two assemblies.
//!
//! # Example
//!
//! ```
//! use ferro_sv::{Position, SvError};
//!
//! let source: Position = "chr1:100-200".parse().unwrap();
//! let target: Position = "chr1:1100-1300".parse().unwrap();
//! let part: Position = "chr1:150-175".parse().unwrap();
//!
//! let mapped = target.map_through(&source, &part).unwrap();
//! assert_eq!(mapped.to_string(), "chr1:1200-1250");
//!
//! let other: Position = "chr2:150-175".parse().unwrap();
//! assert!(matches!(
//!     source.intersection_with(&other),
//!     Err(SvError::ChromosomeMismatch { .. })
//! ));
//! ```

pub mod annotate;
pub mod catalog;
pub mod check;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod interval;
pub mod io;
pub mod liftover;
pub mod prepare;
pub mod smap;

// Re-export commonly used types
pub use annotate::{match_alignments, match_catalog, MappingFinding, RegionReport};
pub use catalog::{Catalog, KnownDifference};
pub use config::{DataPaths, SvConfig};
pub use error::{ErrorCode, SvError};
pub use interval::{Assembly, Chromosome, Position};
pub use liftover::{AlignmentFile, AlignmentRecord, LiftoverData};
pub use smap::{SmapDataset, StructuralVariant};

/// Result type alias for ferro-sv operations
pub type Result<T> = std::result::Result<T, SvError>;
