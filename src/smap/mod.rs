//! Bionano SMAP structural variant calls
//!
//! An SMAP file is tab-separated. Lines starting with `#` are headers and are
//! passed through untouched; every other non-blank line is one call. The
//! columns used here are:
//!
//! | Column | Content |
//! |--------|---------|
//! | 0 | record id |
//! | 2 | chromosome |
//! | 3 | second chromosome (translocations) |
//! | 6, 7 | coordinates |
//! | 12 | link id of the partner inversion leg, `-1` if none |
//!
//! Rows are classified as inversion legs (link id set), translocations (row
//! text contains `trans`) or common variants. Inversion legs are paired into
//! a single [`StructuralVariant::Inversion`] after the whole file is read.
//!
//! # Example
//!
//! ```no_run
//! use ferro_sv::smap::SmapDataset;
//!
//! let dataset = SmapDataset::from_file("calls.smap", 10_000.0).unwrap();
//! for variant in dataset.variants() {
//!     println!("{}", variant);
//! }
//! ```

mod parser;
mod record;

pub use parser::{SmapDataset, MIN_COLUMNS};
pub use record::{
    Breakpoint, InversionLeg, StructuralVariant, NO_LINK, TRANSLOCATION_MARKER,
    UNKNOWN_COORDINATE,
};
