//! Error types for JSON parsing and diagnosis.

use std::fmt;
use thiserror::Error;

/// Result type for JSON parsing operations.
pub type Result<T> = std::result::Result<T, ErrorReport>;

/// The classified shape of a syntax error.
///
/// Each kind names a distinct shape of malformed input, not a severity.
/// All are user-facing and recoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value was expected and the next significant character is a closer
    /// or the end of input.
    MissingValue,
    /// A closing brace or bracket that does not close anything.
    UnmatchedBrace,
    /// A comma as the very last character of the input.
    TrailingComma,
    /// Any other mismatch.
    UnexpectedToken,
    /// Nesting exceeded the configured depth limit.
    MaxDepthExceeded,
}

impl ErrorKind {
    /// The kind name used on the "Error Type" line of a rendered report.
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::MissingValue => "MissingValue",
            ErrorKind::UnmatchedBrace => "UnmatchedBrace",
            ErrorKind::TrailingComma => "TrailingComma",
            ErrorKind::UnexpectedToken => "UnexpectedToken",
            ErrorKind::MaxDepthExceeded => "MaxDepthExceeded",
        }
    }

    /// The human-readable label for this kind.
    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::MissingValue => "Missing Value",
            ErrorKind::UnmatchedBrace => "Unmatched Brace",
            ErrorKind::TrailingComma => "Trailing Comma",
            ErrorKind::UnexpectedToken => "Unexpected Token",
            ErrorKind::MaxDepthExceeded => "Maximum Depth Exceeded",
        }
    }
}

/// The single source character at which parsing first failed, or the
/// end-of-input sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offending {
    /// A concrete character in the source text.
    Char(char),
    /// Parsing failed at the end of the input.
    EndOfInput,
}

impl fmt::Display for Offending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Offending::Char(c) => write!(f, "{}", c),
            // End of input renders as an empty character slot.
            Offending::EndOfInput => Ok(()),
        }
    }
}

/// The externally visible syntax diagnostic.
///
/// Line and column are 1-based and counted against the original input
/// text. The context snippet is a window of source text followed by a
/// caret line marking the exact column.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} at line {}, column {}", .kind.label(), .line, .column)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub line: usize,
    pub column: usize,
    pub offending: Offending,
    pub context: String,
}

/// The internal signal that grammar matching could not continue.
///
/// Produced by the value parser at the first token that violates a
/// production, consumed by the classifier together with the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParseFailure {
    /// No grammar production matched at this position.
    Mismatch {
        line: usize,
        column: usize,
        offset: usize,
        offending: Offending,
    },
    /// The nesting depth limit was exceeded at this position.
    TooDeep {
        line: usize,
        column: usize,
        offset: usize,
    },
}
