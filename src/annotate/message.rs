//! Report message templates

use serde::Serialize;
use std::fmt;

/// Fixed phrases used in annotation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// The alignment target runs backwards
    Reversed,
    /// Part of the query has no CHM13 counterpart
    Unmapped,
    /// Counterpart through a direct alignment
    SitePosition,
    /// Counterpart through an alternative alignment
    AlternativeSite,
    /// Counterpart contains CHM13 sequence absent from HG38
    NoMappingBack,
    /// Counterpart contains CHM13 sequence with two HG38 sources
    MultipleSources,
}

impl Message {
    /// All messages, in report order.
    pub const ALL: [Message; 6] = [
        Message::Reversed,
        Message::Unmapped,
        Message::SitePosition,
        Message::AlternativeSite,
        Message::NoMappingBack,
        Message::MultipleSources,
    ];

    /// Text written to reports.
    pub fn template(&self) -> &'static str {
        match self {
            Message::Reversed => "(Reversed)",
            Message::Unmapped => "no mapping from HG38 to CHM13",
            Message::SitePosition => "site positions in CHM13",
            Message::AlternativeSite => "alternative site mapping in CHM13",
            Message::NoMappingBack => "in CHM13 have no mapping to HG38",
            Message::MultipleSources => "in CHM13 have multiple sources in HG38",
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template())
    }
}
