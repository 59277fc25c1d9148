//! Alignment (liftover) data between HG38 and CHM13-T2T.
//!
//! # Overview
//!
//! An alignment file relates intervals of one assembly to their counterparts
//! in the other. Three kinds of record exist:
//!
//! | Kind | Row | Meaning |
//! |------|-----|---------|
//! | Direct | `S  source  target` | one-to-one mapping |
//! | Alternative | `A  source  target` | source also maps elsewhere |
//! | Empty | `E  source` | no counterpart |
//!
//! The annotation engine reads the forward (HG38 -> CHM13) file directly and
//! two companions derived from the reverse (CHM13 -> HG38) file; see
//! [`companions`].
//!
//! # Example
//!
//! ```no_run
//! use ferro_sv::liftover::LiftoverData;
//!
//! let data = LiftoverData::from_files(
//!     "data/fromHG38toCHM13-alignments",
//!     "data/fromCHM13toHG38-alignments",
//! )
//! .unwrap();
//! println!("{} forward records", data.alignments().len());
//! ```

pub mod alignment;
pub mod companions;
pub mod lift;

pub use alignment::{AlignmentFile, AlignmentKind, AlignmentRecord};
pub use companions::{
    companion_paths, derive_alternative_mappings, derive_empty_intervals,
    load_alternative_mappings, load_empty_intervals, parse_alternative_mappings,
    parse_empty_intervals, AlternativeMapping,
};
pub use lift::LiftoverData;
