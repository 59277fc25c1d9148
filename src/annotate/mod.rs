//! Annotation of HG38 intervals with CHM13 mapping events
//!
//! Two scans run for every query interval:
//!
//! - [`match_catalog`] finds published assembly differences overlapping the
//!   query.
//! - [`match_alignments`] projects the query through the forward alignments
//!   and reports parts without a counterpart, alternative counterparts, and
//!   counterparts that lack or have multiple HG38 sources.
//!
//! Results are structured ([`MappingFinding`], [`NestedFinding`]) and are
//! rendered either as an indented text report or as JSON.
//!
//! # Example
//!
//! ```no_run
//! use ferro_sv::annotate::RegionReport;
//! use ferro_sv::catalog::Catalog;
//! use ferro_sv::interval::Position;
//! use ferro_sv::liftover::LiftoverData;
//!
//! let catalog = Catalog::from_file("data/prediction_38.bed").unwrap();
//! let data = LiftoverData::from_files(
//!     "data/fromHG38toCHM13-alignments",
//!     "data/fromCHM13toHG38-alignments",
//! )
//! .unwrap();
//!
//! let query: Position = "chr1:1000000-2000000".parse().unwrap();
//! let report = RegionReport::build(&query, &catalog, &data).unwrap();
//! report.write_text(&mut std::io::stdout(), "", true).unwrap();
//! ```

mod engine;
mod finding;
mod message;
mod report;

pub use engine::{match_alignments, match_catalog};
pub use finding::{FindingKind, MappingFinding, NestedFinding};
pub use message::Message;
pub use report::{catalog_line, write_variant_report, RegionReport, CATALOG_LEGEND};
