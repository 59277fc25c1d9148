//! Interval text parsing
//!
//! Parses the canonical `chr:pos` / `chr:start-end` forms. The `chr` prefix is
//! optional and case-insensitive; `X` and `Y` map to 23 and 24.

use super::{Chromosome, Position};
use crate::error::SvError;
use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, digit1},
    combinator::{all_consuming, opt, value},
    sequence::preceded,
    IResult, Parser,
};

/// Parse a chromosome name (`chr1`, `1`, `chrX`, `y`, ...).
///
/// Chromosome 0 is rejected.
pub fn parse_chromosome(input: &str) -> IResult<&str, Chromosome> {
    let (input, _) = opt(tag_no_case("chr")).parse(input)?;
    alt((
        value(Chromosome::X, tag_no_case("x")),
        value(Chromosome::Y, tag_no_case("y")),
        parse_chromosome_number,
    ))
    .parse(input)
}

fn parse_chromosome_number(input: &str) -> IResult<&str, Chromosome> {
    let (remaining, digits) = digit1.parse(input)?;
    let id: u32 = digits.parse().map_err(|_| {
        nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Digit))
    })?;
    if id == 0 {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Verify,
        )));
    }
    Ok((remaining, Chromosome::new(id)))
}

#[inline]
fn parse_coordinate(input: &str) -> IResult<&str, f64> {
    let (remaining, digits) = digit1.parse(input)?;
    // Use checked parsing to detect overflow
    let value: u64 = digits.parse().map_err(|_| {
        nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Digit))
    })?;
    Ok((remaining, value as f64))
}

/// Parse `chr:pos` or `chr:start-end`.
///
/// A single coordinate produces a one-base interval. `start > end` is
/// accepted and yields a reversed interval.
pub fn parse_position(input: &str) -> IResult<&str, Position> {
    let (input, chromosome) = parse_chromosome(input)?;
    let (input, _) = char(':').parse(input)?;
    let (input, start) = parse_coordinate(input)?;
    let (input, end) = opt(preceded(char('-'), parse_coordinate)).parse(input)?;

    Ok((input, Position::new(chromosome, start, end.unwrap_or(start))))
}

/// Parse a complete interval string, rejecting trailing text.
///
/// # Examples
///
/// ```
/// use ferro_sv::interval::position_from_str;
///
/// let p = position_from_str("chrX:1000-2000").unwrap();
/// assert_eq!(p.chromosome().id(), 23);
/// assert_eq!(p.size(), 1001.0);
///
/// assert!(position_from_str("chr1:1000-").is_err());
/// assert!(position_from_str("chr1-1000").is_err());
/// ```
pub fn position_from_str(input: &str) -> Result<Position, SvError> {
    all_consuming(parse_position)
        .parse(input.trim())
        .map(|(_, position)| position)
        .map_err(|_| SvError::InvalidPosition {
            input: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        let p = position_from_str("chr1:1000").unwrap();
        assert_eq!(p.chromosome(), Chromosome::new(1));
        assert_eq!(p.start(), 1000.0);
        assert_eq!(p.end(), 1000.0);
    }

    #[test]
    fn test_parse_range() {
        let p = position_from_str("chr12:1000-2000").unwrap();
        assert_eq!(p.chromosome(), Chromosome::new(12));
        assert_eq!(p.start(), 1000.0);
        assert_eq!(p.end(), 2000.0);
    }

    #[test]
    fn test_parse_reversed_range() {
        let p = position_from_str("chr3:2000-1000").unwrap();
        assert!(p.is_reversed());
    }

    #[test]
    fn test_parse_sex_chromosomes() {
        assert_eq!(
            position_from_str("chrX:5").unwrap().chromosome(),
            Chromosome::X
        );
        assert_eq!(
            position_from_str("CHRY:5-6").unwrap().chromosome(),
            Chromosome::Y
        );
    }

    #[test]
    fn test_parse_without_prefix() {
        let p = position_from_str("7:100-200").unwrap();
        assert_eq!(p.chromosome(), Chromosome::new(7));
    }

    #[test]
    fn test_parse_zero_coordinate() {
        let p = position_from_str("chr1:0-20000").unwrap();
        assert_eq!(p.start(), 0.0);
    }

    #[test]
    fn test_parse_surrounding_whitespace() {
        assert!(position_from_str("  chr1:100-200\n").is_ok());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in [
            "",
            "chr1",
            "chr1:",
            "chr1:abc",
            "chr1:100-",
            "chr1:100-200-300",
            "chr1:100:200",
            "chrM:100",
            "chr0:100",
            "chr1:100-200 extra",
            "chr1:-100",
        ] {
            assert!(
                position_from_str(input).is_err(),
                "expected '{}' to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_parse_error_carries_input() {
        let err = position_from_str("nope").unwrap_err();
        assert_eq!(
            err,
            SvError::InvalidPosition {
                input: "nope".to_string()
            }
        );
    }

    #[test]
    fn test_parse_position_leaves_remaining() {
        let (rest, p) = parse_position("chr2:10-20\tnext").unwrap();
        assert_eq!(rest, "\tnext");
        assert_eq!(p.end(), 20.0);
    }
}
