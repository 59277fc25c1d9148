//! Directed genomic intervals and proportional coordinate mapping
//!
//! A [`Position`] is a 1-based, closed span on one chromosome. The span is
//! *directed*: when `start > end` it is logically reversed, which matters for
//! the direction of interpolation in [`Position::map_through`] but is not an
//! error.
//!
//! # Text Form
//!
//! | Shape | Text |
//! |-------|------|
//! | `start == end` | `chr1:1000` |
//! | range | `chr1:1000-2000` |
//! | reversed range | `chr1:2000-1000` |
//!
//! Chromosome 23 renders as `chrX` and 24 as `chrY`.
//!
//! # Examples
//!
//! ```
//! use ferro_sv::interval::Position;
//!
//! let whole: Position = "chr1:100-200".parse().unwrap();
//! let target: Position = "chr1:1100-1300".parse().unwrap();
//! let part: Position = "chr1:150-175".parse().unwrap();
//!
//! let mapped = target.map_through(&whole, &part).unwrap();
//! assert_eq!(mapped.to_string(), "chr1:1200-1250");
//! ```

pub mod parser;

use crate::error::SvError;
use nom::combinator::all_consuming;
use nom::Parser;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub use parser::{parse_chromosome, parse_position, position_from_str};

/// One of the two assemblies this crate translates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Assembly {
    /// GRCh38 / hg38, the assembly SV calls are made against
    Hg38,
    /// CHM13-T2T, the assembly calls are translated into
    Chm13,
}

impl Assembly {
    /// Short name used in file names and messages.
    pub fn name(&self) -> &'static str {
        match self {
            Assembly::Hg38 => "HG38",
            Assembly::Chm13 => "CHM13",
        }
    }

    /// Full release name.
    pub fn long_name(&self) -> &'static str {
        match self {
            Assembly::Hg38 => "HG38",
            Assembly::Chm13 => "CHM13-T2T",
        }
    }
}

impl fmt::Display for Assembly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Numeric chromosome id (X = 23, Y = 24).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Chromosome(u32);

impl Chromosome {
    /// Chromosome X
    pub const X: Chromosome = Chromosome(23);
    /// Chromosome Y
    pub const Y: Chromosome = Chromosome(24);

    /// Create a chromosome from its numeric id.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the numeric id
    #[inline]
    pub const fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Chromosome::X => write!(f, "chrX"),
            Chromosome::Y => write!(f, "chrY"),
            Chromosome(id) => write!(f, "chr{}", id),
        }
    }
}

impl FromStr for Chromosome {
    type Err = SvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_consuming(parse_chromosome)
            .parse(s.trim())
            .map(|(_, chromosome)| chromosome)
            .map_err(|_| SvError::InvalidPosition {
                input: s.to_string(),
            })
    }
}

/// A directed, 1-based closed interval on one chromosome.
///
/// Coordinates are kept as `f64` because SV callers report fractional
/// breakpoint positions; mapped coordinates are always integral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    chromosome: Chromosome,
    start: f64,
    end: f64,
}

impl Position {
    /// Create a new interval. `start > end` yields a reversed interval.
    pub const fn new(chromosome: Chromosome, start: f64, end: f64) -> Self {
        Self {
            chromosome,
            start,
            end,
        }
    }

    /// Create a single-base interval.
    pub const fn point(chromosome: Chromosome, pos: f64) -> Self {
        Self::new(chromosome, pos, pos)
    }

    /// Chromosome of this interval
    #[inline]
    pub fn chromosome(&self) -> Chromosome {
        self.chromosome
    }

    /// Start coordinate
    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// End coordinate
    #[inline]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Number of bases covered, `|end - start| + 1`.
    pub fn size(&self) -> f64 {
        (self.end - self.start).abs() + 1.0
    }

    /// True when `start > end`.
    pub fn is_reversed(&self) -> bool {
        self.start > self.end
    }

    /// The same span with `start <= end`.
    pub fn normalized(&self) -> Self {
        if self.is_reversed() {
            Self::new(self.chromosome, self.end, self.start)
        } else {
            *self
        }
    }

    /// Closed-interval overlap test, false across chromosomes.
    pub fn overlap_with(&self, other: &Position) -> bool {
        if self.chromosome != other.chromosome {
            return false;
        }
        self.start <= other.end && other.start <= self.end
    }

    /// Intersection `[max(starts), min(ends)]` on this interval's chromosome.
    ///
    /// Callers are expected to check [`overlap_with`](Self::overlap_with)
    /// first; intervals on different chromosomes are rejected.
    pub fn intersection_with(&self, other: &Position) -> Result<Position, SvError> {
        if self.chromosome != other.chromosome {
            return Err(SvError::ChromosomeMismatch {
                left: self.to_string(),
                right: other.to_string(),
            });
        }
        Ok(Position::new(
            self.chromosome,
            self.start.max(other.start),
            self.end.min(other.end),
        ))
    }

    /// Project `part` of `whole` onto `self`, the counterpart of `whole`.
    ///
    /// The fractional offsets of `part.start` and `part.end` within `whole`
    /// are interpolated along `self`, forwards when `self` is ordered and
    /// backwards when it is reversed. Interpolated coordinates are rounded
    /// half-to-even.
    ///
    /// When either `self` or `whole` is a single base there is nothing to
    /// interpolate and `self` is returned unchanged.
    ///
    /// # Errors
    ///
    /// [`SvError::InvalidMapping`] if `whole` or `part` is reversed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferro_sv::interval::Position;
    ///
    /// let whole: Position = "chr2:100-200".parse().unwrap();
    /// let part: Position = "chr2:150-175".parse().unwrap();
    /// let reversed: Position = "chr2:1300-1100".parse().unwrap();
    ///
    /// let mapped = reversed.map_through(&whole, &part).unwrap();
    /// assert_eq!(mapped.to_string(), "chr2:1200-1150");
    /// ```
    pub fn map_through(&self, whole: &Position, part: &Position) -> Result<Position, SvError> {
        if whole.is_reversed() || part.is_reversed() {
            return Err(SvError::InvalidMapping {
                msg: format!(
                    "start must not exceed end in the mapped intervals (whole {}, part {})",
                    whole, part
                ),
            });
        }

        if self.start == self.end || whole.start == whole.end {
            return Ok(*self);
        }

        let span = whole.end - whole.start;
        let start_fraction = (part.start - whole.start) / span;
        let end_fraction = (part.end - whole.start) / span;

        Ok(Position::new(
            self.chromosome,
            self.interpolate(start_fraction),
            self.interpolate(end_fraction),
        ))
    }

    fn interpolate(&self, fraction: f64) -> f64 {
        let value = if self.start < self.end {
            self.start + (self.end - self.start) * fraction
        } else {
            self.start - (self.start - self.end) * fraction
        };
        value.round_ties_even()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}:{}", self.chromosome, self.start as i64)
        } else {
            write!(
                f,
                "{}:{}-{}",
                self.chromosome, self.start as i64, self.end as i64
            )
        }
    }
}

impl FromStr for Position {
    type Err = SvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        position_from_str(s)
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
