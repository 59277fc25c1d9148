//! Alignment data bundle used by the annotation engine.
//!
//! | Data | File | Assembly of intervals |
//! |------|------|-----------------------|
//! | `alignments` | forward alignment file | HG38 source, CHM13 target |
//! | `empty` | `<reverse>-empty` | CHM13 |
//! | `alternatives` | `<reverse>-alternatives` | CHM13 source, HG38 targets |

use super::alignment::AlignmentFile;
use super::companions::{
    companion_paths, load_alternative_mappings, load_empty_intervals, AlternativeMapping,
};
use crate::error::SvError;
use crate::interval::Position;
use std::path::Path;

/// Forward alignments plus the reverse-direction companions.
#[derive(Debug, Clone, Default)]
pub struct LiftoverData {
    /// HG38 -> CHM13 alignment records.
    alignments: AlignmentFile,
    /// CHM13 intervals with no HG38 counterpart.
    empty: Vec<Position>,
    /// CHM13 intervals with two HG38 counterparts.
    alternatives: Vec<AlternativeMapping>,
}

impl LiftoverData {
    /// Create a bundle from already-loaded data.
    pub fn new(
        alignments: AlignmentFile,
        empty: Vec<Position>,
        alternatives: Vec<AlternativeMapping>,
    ) -> Self {
        Self {
            alignments,
            empty,
            alternatives,
        }
    }

    /// Load the forward alignment file and the companions of `reverse`.
    ///
    /// # Arguments
    ///
    /// * `forward` - Path to the HG38 -> CHM13 alignment file
    /// * `reverse` - Path to the CHM13 -> HG38 alignment file; only its
    ///   `-empty` and `-alternatives` companions are read
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(
        forward: P,
        reverse: Q,
    ) -> Result<Self, SvError> {
        let alignments = AlignmentFile::from_file(forward)?;
        let (empty_path, alternatives_path) = companion_paths(reverse);
        let empty = load_empty_intervals(empty_path)?;
        let alternatives = load_alternative_mappings(alternatives_path)?;
        Ok(Self::new(alignments, empty, alternatives))
    }

    /// Forward alignment records.
    pub fn alignments(&self) -> &AlignmentFile {
        &self.alignments
    }

    /// CHM13 intervals with no HG38 counterpart.
    pub fn empty(&self) -> &[Position] {
        &self.empty
    }

    /// CHM13 intervals with two HG38 counterparts.
    pub fn alternatives(&self) -> &[AlternativeMapping] {
        &self.alternatives
    }
}
