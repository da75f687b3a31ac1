//! Phase 3: Diagnostic Classifier
//!
//! Turns a raw parse failure into a classified error report. The
//! classification is heuristic by design: it decides between several
//! superficially similar failure shapes using only the offending character
//! and its local text context, in a fixed priority order. It is total: any
//! failure yields exactly one report.

use crate::error::{ErrorKind, ErrorReport, Offending, ParseFailure};

/// Characters of source text kept on each side of the offending position
/// in the context snippet.
const CONTEXT_SPAN: usize = 40;

/// Classify a parse failure against the original source text.
///
/// Priority order, first match wins:
/// 1. `MissingValue` — failed at end of input, or at a closer whose
///    immediately preceding character is whitespace (or start of input).
/// 2. `TrailingComma` — failed at a comma that is the final character of
///    the entire input.
/// 3. `UnmatchedBrace` — failed at any other closer.
/// 4. `UnexpectedToken` — everything else.
///
/// A depth-limit failure maps to `MaxDepthExceeded` ahead of all of these.
pub(crate) fn classify(source: &str, failure: &ParseFailure) -> ErrorReport {
    match *failure {
        ParseFailure::TooDeep {
            line,
            column,
            offset,
        } => ErrorReport {
            kind: ErrorKind::MaxDepthExceeded,
            line,
            column,
            offending: char_at(source, offset),
            context: context_snippet(source, offset),
        },
        ParseFailure::Mismatch {
            line,
            column,
            offset,
            offending,
        } => ErrorReport {
            kind: classify_kind(source, offset, offending),
            line,
            column,
            offending,
            context: context_snippet(source, offset),
        },
    }
}

fn classify_kind(source: &str, offset: usize, offending: Offending) -> ErrorKind {
    let c = match offending {
        Offending::EndOfInput => return ErrorKind::MissingValue,
        Offending::Char(c) => c,
    };
    match c {
        '}' | ']' if preceded_by_whitespace(source, offset) => ErrorKind::MissingValue,
        '}' | ']' => ErrorKind::UnmatchedBrace,
        ',' if offset + 1 == source.len() => ErrorKind::TrailingComma,
        _ => ErrorKind::UnexpectedToken,
    }
}

/// Whether the character just before `offset` is whitespace, or the offset
/// is the start of the input. A closer in that position means a value slot
/// was left empty.
fn preceded_by_whitespace(source: &str, offset: usize) -> bool {
    source[..offset]
        .chars()
        .next_back()
        .map_or(true, |c| c.is_ascii_whitespace())
}

fn char_at(source: &str, offset: usize) -> Offending {
    match source[offset..].chars().next() {
        Some(c) => Offending::Char(c),
        None => Offending::EndOfInput,
    }
}

/// Extract a bounded window of the offending line and draw a caret under
/// the offending column.
///
/// The window keeps at most [`CONTEXT_SPAN`] characters on either side of
/// the offending position, clipped to the line containing it. The caret
/// line is spaces up to the offending column followed by `^`.
fn context_snippet(source: &str, offset: usize) -> String {
    let before_all = &source[..offset];
    let line_start = before_all.rfind('\n').map_or(0, |i| i + 1);
    let before_line = &before_all[line_start..];
    let skip = before_line.chars().count().saturating_sub(CONTEXT_SPAN);
    let before: String = before_line.chars().skip(skip).collect();

    let after_line = source[offset..].split('\n').next().unwrap_or("");
    let after: String = after_line.chars().take(CONTEXT_SPAN).collect();

    let pad = " ".repeat(before.chars().count());
    format!("{}{}\n{}^", before, after, pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mismatch(line: usize, column: usize, offset: usize, offending: Offending) -> ParseFailure {
        ParseFailure::Mismatch {
            line,
            column,
            offset,
            offending,
        }
    }

    #[test]
    fn test_closer_after_whitespace_is_missing_value() {
        let source = r#"{"k": ] "#;
        let report = classify(source, &mismatch(1, 7, 6, Offending::Char(']')));
        assert_eq!(report.kind, ErrorKind::MissingValue);
    }

    #[test]
    fn test_closer_after_content_is_unmatched_brace() {
        // The `]` directly follows the colon, so rule 1 does not fire.
        let source = r#"{"k":]"#;
        let report = classify(source, &mismatch(1, 6, 5, Offending::Char(']')));
        assert_eq!(report.kind, ErrorKind::UnmatchedBrace);
    }

    #[test]
    fn test_end_of_input_is_missing_value() {
        let source = r#"{"k": 1"#;
        let report = classify(source, &mismatch(1, 8, 7, Offending::EndOfInput));
        assert_eq!(report.kind, ErrorKind::MissingValue);
        assert_eq!(report.offending, Offending::EndOfInput);
    }

    #[test]
    fn test_terminal_comma_is_trailing_comma() {
        let source = "{},";
        let report = classify(source, &mismatch(1, 3, 2, Offending::Char(',')));
        assert_eq!(report.kind, ErrorKind::TrailingComma);
    }

    #[test]
    fn test_non_terminal_comma_is_unexpected_token() {
        // Content follows the comma, so the narrow trailing-comma rule
        // does not fire.
        let source = "{}, 1";
        let report = classify(source, &mismatch(1, 3, 2, Offending::Char(',')));
        assert_eq!(report.kind, ErrorKind::UnexpectedToken);
    }

    #[test]
    fn test_context_caret_marks_column() {
        let source = r#"{"k": ]}"#;
        let report = classify(source, &mismatch(1, 7, 6, Offending::Char(']')));
        assert_eq!(report.context, "{\"k\": ]}\n      ^");
    }

    #[test]
    fn test_context_clips_to_offending_line() {
        let source = "{\n  \"a\": ]\n}";
        let report = classify(source, &mismatch(2, 8, 9, Offending::Char(']')));
        assert_eq!(report.context, "  \"a\": ]\n       ^");
    }

    #[test]
    fn test_context_window_is_bounded() {
        let long = "x".repeat(100);
        let source = format!("{}]", long);
        let report = classify(&source, &mismatch(1, 101, 100, Offending::Char(']')));
        let mut lines = report.context.lines();
        let window = lines.next().unwrap();
        assert_eq!(window, format!("{}]", "x".repeat(CONTEXT_SPAN)));
        assert_eq!(lines.next().unwrap(), format!("{}^", " ".repeat(40)));
    }

    #[test]
    fn test_context_at_end_of_input() {
        let source = "[1, 2";
        let report = classify(source, &mismatch(1, 6, 5, Offending::EndOfInput));
        assert_eq!(report.context, "[1, 2\n     ^");
    }

    #[test]
    fn test_too_deep_maps_to_max_depth_exceeded() {
        let source = "[[[1]]]";
        let failure = ParseFailure::TooDeep {
            line: 1,
            column: 3,
            offset: 2,
        };
        let report = classify(source, &failure);
        assert_eq!(report.kind, ErrorKind::MaxDepthExceeded);
        assert_eq!(report.offending, Offending::Char('['));
    }
}
