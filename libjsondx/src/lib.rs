//! JSON parser that produces either a structured value tree or a precisely
//! classified syntax diagnostic.
//!
//! # Parsing Pipeline
//!
//! The parser operates in three phases:
//!
//! 1. **Scanner**: Converts source text into positioned tokens. Total;
//!    unrecognized input becomes an `Invalid` token so every lexical detail
//!    survives to the classifier.
//!
//! 2. **Value Parser**: Recursive descent over the token stream, building a
//!    [`Value`] tree or failing at the first token that cannot continue the
//!    grammar.
//!
//! 3. **Diagnostic Classifier**: Turns a raw failure into an
//!    [`ErrorReport`] with one of a small set of error kinds, a 1-based
//!    line/column, the offending character, and a context snippet with a
//!    caret marking the exact column.
//!
//! Parsing is a pure computation over the input text: no I/O, no shared
//! state, deterministic output for identical input.

mod classify;
mod encode;
mod error;
mod parser;
mod scanner;
mod value;

pub use encode::{encode, encode_pretty};
pub use error::{ErrorKind, ErrorReport, Offending, Result};
pub use value::Value;

/// Default nesting-depth limit. Each nesting level costs one stack frame,
/// so unbounded depth on untrusted input risks stack exhaustion.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Parse a JSON document from a string.
///
/// # Example
///
/// ```
/// use libjsondx::parse;
///
/// let value = parse(r#"{"a": [1, 2.5, "x"], "b": null}"#).unwrap();
/// assert_eq!(value.get("a").unwrap().as_array().unwrap().len(), 3);
/// ```
pub fn parse(input: &str) -> Result<Value> {
    parse_with_limit(input, DEFAULT_MAX_DEPTH)
}

/// Parse a JSON document with an explicit nesting-depth limit.
///
/// Exceeding the limit yields an [`ErrorKind::MaxDepthExceeded`] report
/// positioned at the opening brace or bracket of the level that went too
/// deep.
pub fn parse_with_limit(input: &str, max_depth: usize) -> Result<Value> {
    let tokens = scanner::tokenize(input);
    parser::parse_tokens(&tokens, max_depth).map_err(|failure| classify::classify(input, &failure))
}
