//! Structured results of the alignment scan

use super::message::Message;
use crate::interval::Position;
use serde::Serialize;
use std::fmt;

/// Kind of a top-level alignment finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// Overlap with a direct record
    SitePosition,
    /// Overlap with an alternative record
    AlternativeSite,
    /// Overlap with an empty record
    Unmapped,
}

impl FindingKind {
    /// Report message for this kind.
    pub fn message(&self) -> Message {
        match self {
            FindingKind::SitePosition => Message::SitePosition,
            FindingKind::AlternativeSite => Message::AlternativeSite,
            FindingKind::Unmapped => Message::Unmapped,
        }
    }
}

/// Part of a query covered by one alignment record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappingFinding {
    pub kind: FindingKind,
    /// Query ∩ record source, in HG38
    pub part: Position,
    /// Projection of `part` into CHM13; `None` for unmapped parts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Position>,
    /// The record's target runs backwards
    pub reversed: bool,
    /// Findings about the CHM13 counterpart
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<NestedFinding>,
}

impl MappingFinding {
    /// Finding for a part with no counterpart.
    pub fn unmapped(part: Position) -> Self {
        Self {
            kind: FindingKind::Unmapped,
            part,
            target: None,
            reversed: false,
            nested: Vec::new(),
        }
    }
}

impl fmt::Display for MappingFinding {
    /// Single report line, without indentation or nested findings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.part, self.kind.message())?;
        if let Some(target) = &self.target {
            write!(f, " {}", target)?;
        }
        if self.reversed {
            write!(f, " {}", Message::Reversed)?;
        }
        Ok(())
    }
}

/// Finding about the CHM13 counterpart of a mapped part.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NestedFinding {
    /// `part` of the counterpart has no HG38 source
    NoMappingBack { part: Position },
    /// `part` of the counterpart has two HG38 sources
    MultipleSources {
        part: Position,
        first: Position,
        second: Position,
    },
}

impl NestedFinding {
    /// Report message for this finding.
    pub fn message(&self) -> Message {
        match self {
            NestedFinding::NoMappingBack { .. } => Message::NoMappingBack,
            NestedFinding::MultipleSources { .. } => Message::MultipleSources,
        }
    }
}

impl fmt::Display for NestedFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NestedFinding::NoMappingBack { part } => write!(f, "{} {}", part, self.message()),
            NestedFinding::MultipleSources {
                part,
                first,
                second,
            } => write!(f, "{} {} {} {}", part, self.message(), first, second),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_display_site_position() {
        let finding = MappingFinding {
            kind: FindingKind::SitePosition,
            part: pos("chr1:150-175"),
            target: Some(pos("chr1:1200-1250")),
            reversed: false,
            nested: Vec::new(),
        };
        assert_eq!(
            finding.to_string(),
            "chr1:150-175 site positions in CHM13 chr1:1200-1250"
        );
    }

    #[test]
    fn test_display_reversed() {
        let finding = MappingFinding {
            kind: FindingKind::AlternativeSite,
            part: pos("chr1:150-175"),
            target: Some(pos("chr1:1200-1150")),
            reversed: true,
            nested: Vec::new(),
        };
        assert_eq!(
            finding.to_string(),
            "chr1:150-175 alternative site mapping in CHM13 chr1:1200-1150 (Reversed)"
        );
    }

    #[test]
    fn test_display_unmapped() {
        let finding = MappingFinding::unmapped(pos("chr2:10-20"));
        assert_eq!(finding.to_string(), "chr2:10-20 no mapping from HG38 to CHM13");
    }

    #[test]
    fn test_display_nested() {
        let nested = NestedFinding::NoMappingBack {
            part: pos("chr1:1200-1210"),
        };
        assert_eq!(
            nested.to_string(),
            "chr1:1200-1210 in CHM13 have no mapping to HG38"
        );

        let nested = NestedFinding::MultipleSources {
            part: pos("chr1:1200-1210"),
            first: pos("chr1:200-210"),
            second: pos("chr4:900-890"),
        };
        assert_eq!(
            nested.to_string(),
            "chr1:1200-1210 in CHM13 have multiple sources in HG38 chr1:200-210 chr4:900-890"
        );
    }

    #[test]
    fn test_serialize_unmapped_omits_target() {
        let finding = MappingFinding::unmapped(pos("chr2:10-20"));
        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["kind"], "unmapped");
        assert_eq!(json["part"], "chr2:10-20");
        assert!(json.get("target").is_none());
    }
}
