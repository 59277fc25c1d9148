//! Report and error formats of the `view` command and the binary

use crate::error::SvError;
use serde::Serialize;
use std::io::{self, Write};
use std::str::FromStr;

/// Format of `view` reports and of error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented text report (default)
    #[default]
    Text,
    /// JSON format
    Json,
}

impl FromStr for OutputFormat {
    type Err = std::convert::Infallible;

    /// Unknown names fall back to text.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferro_sv::cli::OutputFormat;
    /// use std::str::FromStr;
    ///
    /// assert!(matches!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json));
    /// assert!(matches!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        })
    }
}

#[derive(Serialize)]
struct ErrorOutput<'a> {
    status: &'static str,
    code: String,
    description: &'static str,
    message: &'a str,
}

/// Write `error` as one line of text or one JSON object.
///
/// # Examples
///
/// ```
/// use ferro_sv::cli::{output_error, OutputFormat};
/// use ferro_sv::SvError;
/// use std::io::Cursor;
///
/// let mut buffer = Cursor::new(Vec::new());
/// let error = SvError::InvalidPosition { input: "chr1".to_string() };
/// output_error(&mut buffer, &error, OutputFormat::Text).unwrap();
/// let result = String::from_utf8(buffer.into_inner()).unwrap();
/// assert!(result.starts_with("ERROR: [E1001]"));
/// ```
pub fn output_error<W: Write>(
    writer: &mut W,
    error: &SvError,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let message = error.to_string();
            let output = ErrorOutput {
                status: "error",
                code: error.code().as_str(),
                description: error.code().description(),
                message: &message,
            };
            serde_json::to_writer(&mut *writer, &output)?;
            writeln!(writer)
        }
        OutputFormat::Text => writeln!(writer, "ERROR: {}", error.detailed_message()),
    }
}
