//! Error types for ferro-sv
//!
//! Every validation point in the crate returns a [`SvError`]. The binary is
//! the only place that turns an error into a process exit; the parsing,
//! mapping and annotation procedures stay pure and testable.

use std::fmt;
use thiserror::Error;

/// Error codes for categorizing errors
///
/// These codes can be used for programmatic error handling
/// and for documentation lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // Parse errors (E1xxx)
    /// Invalid `chr:pos` / `chr:start-end` text
    InvalidPosition = 1001,
    /// Row with the wrong number of fields or an unparsable field
    MalformedRecord = 1002,

    // Data errors (E2xxx)
    /// Inversion leg with inconsistent coordinates or partner
    InvalidInversion = 2001,
    /// Required input file is missing
    MissingInput = 2002,
    /// Configuration file could not be used
    InvalidConfig = 2003,

    // Mapping errors (E3xxx)
    /// Interval ordering violates the mapping precondition
    InvalidMapping = 3001,
    /// Interval operation across two chromosomes
    ChromosomeMismatch = 3002,

    // IO errors (E9xxx)
    /// File IO error
    IoError = 9001,
    /// JSON serialization error
    JsonError = 9002,
}

impl ErrorCode {
    /// Get the error code as a string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("E{:04}", *self as u16)
    }

    /// Get a brief description of this error code
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidPosition => "invalid position format",
            ErrorCode::MalformedRecord => "malformed input record",
            ErrorCode::InvalidInversion => "invalid inversion leg",
            ErrorCode::MissingInput => "missing input file",
            ErrorCode::InvalidConfig => "invalid configuration",
            ErrorCode::InvalidMapping => "invalid interval ordering for mapping",
            ErrorCode::ChromosomeMismatch => "intervals on different chromosomes",
            ErrorCode::IoError => "file I/O error",
            ErrorCode::JsonError => "JSON serialization error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for ferro-sv operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SvError {
    /// Text that is neither `chr:pos` nor `chr:start-end`
    #[error("Incorrectly specified position '{input}': expected chr:pos or chr:start-end")]
    InvalidPosition { input: String },

    /// Row that does not match the expected layout
    #[error("Malformed record in {source_name} at line {line}: {msg}")]
    MalformedRecord {
        source_name: String,
        line: usize,
        msg: String,
    },

    /// Inversion leg that cannot be reconstructed
    #[error("Invalid inversion leg {id}: {msg}")]
    InvalidInversion { id: i64, msg: String },

    /// Mapping requested with a reversed whole or part interval
    #[error("Invalid mapping: {msg}")]
    InvalidMapping { msg: String },

    /// Intersection requested across chromosomes
    #[error("Cannot intersect {left} with {right}: different chromosomes")]
    ChromosomeMismatch { left: String, right: String },

    /// Required file does not exist
    #[error("Input file not found: {path}")]
    MissingInput { path: String },

    /// Configuration problem
    #[error("Configuration error: {msg}")]
    Config { msg: String },

    /// IO error (for file operations)
    #[error("IO error: {msg}")]
    Io { msg: String },

    /// JSON serialization error
    #[error("JSON error: {msg}")]
    Json { msg: String },
}

impl SvError {
    /// Create a malformed-record error for a named input.
    pub fn malformed(source_name: impl Into<String>, line: usize, msg: impl Into<String>) -> Self {
        SvError::MalformedRecord {
            source_name: source_name.into(),
            line,
            msg: msg.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            SvError::InvalidPosition { .. } => ErrorCode::InvalidPosition,
            SvError::MalformedRecord { .. } => ErrorCode::MalformedRecord,
            SvError::InvalidInversion { .. } => ErrorCode::InvalidInversion,
            SvError::InvalidMapping { .. } => ErrorCode::InvalidMapping,
            SvError::ChromosomeMismatch { .. } => ErrorCode::ChromosomeMismatch,
            SvError::MissingInput { .. } => ErrorCode::MissingInput,
            SvError::Config { .. } => ErrorCode::InvalidConfig,
            SvError::Io { .. } => ErrorCode::IoError,
            SvError::Json { .. } => ErrorCode::JsonError,
        }
    }

    /// Error message prefixed with its code, e.g. `[E1001] ...`
    pub fn detailed_message(&self) -> String {
        format!("[{}] {}", self.code(), self)
    }
}

impl From<std::io::Error> for SvError {
    fn from(err: std::io::Error) -> Self {
        SvError::Io {
            msg: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SvError {
    fn from(err: serde_json::Error) -> Self {
        SvError::Json {
            msg: err.to_string(),
        }
    }
}
