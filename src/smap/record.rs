//! Structural variant record types

use crate::error::SvError;
use crate::interval::{Chromosome, Position};
use serde::Serialize;
use std::fmt;

/// Link id of a row that is not an inversion leg.
pub const NO_LINK: i64 = -1;

/// Second-coordinate value of an inversion leg with an unknown end.
pub const UNKNOWN_COORDINATE: f64 = -1.0;

/// Text that marks a row as a translocation.
pub const TRANSLOCATION_MARKER: &str = "trans";

/// A translocation breakpoint and the window searched around it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Breakpoint {
    /// Called breakpoint as a single-base interval
    coordinate: Position,
    /// `[coordinate - epsilon, coordinate + epsilon]`, clamped at 0
    window: Position,
}

impl Breakpoint {
    /// Build a breakpoint with a search window of `epsilon` on each side.
    pub fn new(chromosome: Chromosome, coordinate: f64, epsilon: f64) -> Self {
        Self {
            coordinate: Position::point(chromosome, coordinate),
            window: Position::new(
                chromosome,
                (coordinate - epsilon).max(0.0),
                coordinate + epsilon,
            ),
        }
    }

    /// Called breakpoint
    pub fn coordinate(&self) -> &Position {
        &self.coordinate
    }

    /// Search window around the breakpoint
    pub fn window(&self) -> &Position {
        &self.window
    }
}

/// One half of an inversion call.
///
/// Inversions are reported as two rows pointing at each other through their
/// link ids. The second coordinate is `-1` in the input when unknown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InversionLeg {
    pub id: i64,
    pub link_id: i64,
    pub chromosome: Chromosome,
    pub x: f64,
    pub y: Option<f64>,
}

impl InversionLeg {
    /// Check the leg's own coordinates.
    pub fn validate(&self) -> Result<(), SvError> {
        if self.x < 0.0 {
            return Err(SvError::InvalidInversion {
                id: self.id,
                msg: "the first coordinate cannot be negative".to_string(),
            });
        }
        if let Some(y) = self.y {
            if self.x > y {
                return Err(SvError::InvalidInversion {
                    id: self.id,
                    msg: format!("first coordinate {} exceeds second coordinate {}", self.x, y),
                });
            }
        }
        Ok(())
    }

    /// Interval spanned by this leg and its partner.
    ///
    /// | This leg `y` | Partner `y` | Interval |
    /// |--------------|-------------|----------|
    /// | unknown | any | `[min(x, B.x), max(x, B.x)]` |
    /// | known | unknown | `[min(B.x, x), max(B.x, x)]` |
    /// | known | known | `[y, B.x]` if `x < B.x`, else `[B.y, x]` |
    ///
    /// # Errors
    ///
    /// [`SvError::InvalidInversion`] if `partner` is on another chromosome
    /// or does not link back to this leg.
    pub fn reconstruct(&self, partner: &InversionLeg) -> Result<Position, SvError> {
        if partner.chromosome != self.chromosome {
            return Err(SvError::InvalidInversion {
                id: self.id,
                msg: format!(
                    "partner {} is on {}, expected {}",
                    partner.id, partner.chromosome, self.chromosome
                ),
            });
        }
        if partner.link_id != self.id {
            return Err(SvError::InvalidInversion {
                id: self.id,
                msg: format!(
                    "partner {} links to {} instead of {}",
                    partner.id, partner.link_id, self.id
                ),
            });
        }

        let (start, end) = match (self.y, partner.y) {
            (None, _) | (Some(_), None) => (self.x.min(partner.x), self.x.max(partner.x)),
            (Some(y), Some(partner_y)) => {
                if self.x < partner.x {
                    (y, partner.x)
                } else {
                    (partner_y, self.x)
                }
            }
        };

        Ok(Position::new(self.chromosome, start, end))
    }
}

/// A structural variant call with the row text it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StructuralVariant {
    /// Any call with a single called interval
    Common {
        id: i64,
        position: Position,
        original: String,
    },
    /// Call joining two breakpoints, possibly on different chromosomes
    Translocation {
        id: i64,
        a: Breakpoint,
        b: Breakpoint,
        original: String,
    },
    /// Interval reconstructed from two inversion legs
    Inversion {
        id: i64,
        partner_id: i64,
        position: Position,
        original: String,
    },
}

impl StructuralVariant {
    /// Record id (the first leg for inversions)
    pub fn id(&self) -> i64 {
        match self {
            StructuralVariant::Common { id, .. }
            | StructuralVariant::Translocation { id, .. }
            | StructuralVariant::Inversion { id, .. } => *id,
        }
    }

    /// Intervals the variant is matched on.
    pub fn query_positions(&self) -> Vec<Position> {
        match self {
            StructuralVariant::Common { position, .. }
            | StructuralVariant::Inversion { position, .. } => vec![*position],
            StructuralVariant::Translocation { a, b, .. } => vec![*a.window(), *b.window()],
        }
    }

    /// Row text of the record with [`id`](Self::id).
    pub fn original(&self) -> &str {
        match self {
            StructuralVariant::Common { original, .. }
            | StructuralVariant::Translocation { original, .. }
            | StructuralVariant::Inversion { original, .. } => original,
        }
    }

    /// Short kind name
    pub fn kind(&self) -> &'static str {
        match self {
            StructuralVariant::Common { .. } => "common",
            StructuralVariant::Translocation { .. } => "translocation",
            StructuralVariant::Inversion { .. } => "inversion",
        }
    }
}

impl fmt::Display for StructuralVariant {
    /// Report header line of the variant.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralVariant::Common {
                id,
                position,
                original,
            } => write!(f, "{} {} {}", id, position, original),
            StructuralVariant::Translocation { id, a, b, .. } => write!(
                f,
                "{} TRANSLOCATION A={}\tB={}",
                id,
                a.coordinate(),
                b.coordinate()
            ),
            StructuralVariant::Inversion {
                id,
                partner_id,
                position,
                ..
            } => write!(f, "{} {} INVERSION {}", id, partner_id, position),
        }
    }
}
