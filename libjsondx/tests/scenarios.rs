//! End-to-end scenarios: each malformed input must produce one specific
//! error kind at one specific position, and valid input must produce the
//! expected value tree.

use libjsondx::{encode, parse, parse_with_limit, ErrorKind, Offending, Value};

fn report(input: &str) -> libjsondx::ErrorReport {
    parse(input).expect_err("input should not parse")
}

#[test]
fn test_unterminated_object_reports_missing_value_at_end_of_input() {
    // The grammar still expects a comma or closer when the input ends, so
    // the failure lands on the end-of-input sentinel one column past the
    // final character.
    let r = report(r#"{"example1": "value""#);
    assert_eq!(r.kind, ErrorKind::MissingValue);
    assert_eq!((r.line, r.column), (1, 21));
    assert_eq!(r.offending, Offending::EndOfInput);
}

#[test]
fn test_closer_in_value_position_reports_missing_value() {
    let r = report(r#"{"example2": ] "#);
    assert_eq!(r.kind, ErrorKind::MissingValue);
    assert_eq!((r.line, r.column), (1, 14));
    assert_eq!(r.offending, Offending::Char(']'));
}

#[test]
fn test_empty_value_slot_before_closing_brace_reports_missing_value() {
    let r = report(r#"{"example3": "value", "example4": }"#);
    assert_eq!(r.kind, ErrorKind::MissingValue);
    assert_eq!((r.line, r.column), (1, 35));
    assert_eq!(r.offending, Offending::Char('}'));
}

#[test]
fn test_comma_then_spaced_closer_reports_missing_value() {
    let r = report(r#"{"example4": [1, 2, 3, ], "example5": "value"}"#);
    assert_eq!(r.kind, ErrorKind::MissingValue);
    assert_eq!((r.line, r.column), (1, 24));
    assert_eq!(r.offending, Offending::Char(']'));
}

#[test]
fn test_comma_at_very_end_reports_trailing_comma() {
    let input = r#"{"example6": "value", "example7": "value"},"#;
    let r = report(input);
    assert_eq!(r.kind, ErrorKind::TrailingComma);
    assert_eq!((r.line, r.column), (1, 43));
    assert_eq!(r.offending, Offending::Char(','));
    // Context is clipped to a 40-character window before the caret.
    assert_eq!(
        r.context,
        concat!(
            "example6\": \"value\", \"example7\": \"value\"},\n",
            "                                        ^"
        )
    );
}

#[test]
fn test_comma_directly_against_closer_reports_unmatched_brace() {
    // Pinned behavior: with no whitespace between the comma and the
    // closer, the missing-value rule does not fire and the closer falls
    // through to the unmatched-brace rule.
    let r = report("[1,]");
    assert_eq!(r.kind, ErrorKind::UnmatchedBrace);
    assert_eq!((r.line, r.column), (1, 4));
    assert_eq!(r.offending, Offending::Char(']'));
}

#[test]
fn test_stray_closer_reports_unmatched_brace() {
    let r = report("1]");
    assert_eq!(r.kind, ErrorKind::UnmatchedBrace);
    assert_eq!((r.line, r.column), (1, 2));
}

#[test]
fn test_garbage_reports_unexpected_token() {
    let r = report("{#}");
    assert_eq!(r.kind, ErrorKind::UnexpectedToken);
    assert_eq!(r.offending, Offending::Char('#'));
}

#[test]
fn test_valid_document_parses() {
    let v = parse(r#"{"a": [1, 2.5, "x"], "b": null}"#).unwrap();
    let pairs = v.as_object().unwrap();
    assert_eq!(pairs.len(), 2);
    let a = v.get("a").unwrap().as_array().unwrap();
    assert_eq!(a.len(), 3);
    assert_eq!(a[0].as_integer().unwrap().to_string(), "1");
    assert_eq!(a[1].as_float(), Some(2.5));
    assert_eq!(a[2].as_str(), Some("x"));
    assert!(v.get("b").unwrap().is_null());
}

#[test]
fn test_parsed_string_has_quotes_stripped() {
    let v = parse(r#""abc""#).unwrap();
    assert_eq!(v.as_str(), Some("abc"));
    assert_eq!(v.as_str().unwrap().chars().count(), 3);
}

#[test]
fn test_empty_containers_parse() {
    assert_eq!(parse("{}").unwrap().as_object().unwrap().len(), 0);
    assert_eq!(parse("[]").unwrap().as_array().unwrap().len(), 0);
}

#[test]
fn test_identical_input_yields_identical_results() {
    let good = r#"{"a": [1, 2.5], "b": "x"}"#;
    assert_eq!(parse(good).unwrap(), parse(good).unwrap());

    let bad = r#"{"a": }"#;
    assert_eq!(parse(bad).unwrap_err(), parse(bad).unwrap_err());
}

#[test]
fn test_encode_then_parse_round_trips() {
    let original = Value::Object(vec![
        (
            "a".to_string(),
            Value::Array(vec![
                Value::from(1i64),
                Value::Float(2.5),
                Value::from("x"),
            ]),
        ),
        ("b".to_string(), Value::Null),
        ("c".to_string(), Value::Bool(false)),
        ("d".to_string(), Value::Float(3.0)),
    ]);
    let text = encode(&original);
    assert_eq!(parse(&text).unwrap(), original);
}

#[test]
fn test_depth_limit_reports_max_depth_exceeded() {
    let deep = format!("{}1{}", "[".repeat(200), "]".repeat(200));
    let r = parse(&deep).expect_err("should exceed the default limit");
    assert_eq!(r.kind, ErrorKind::MaxDepthExceeded);

    assert!(parse_with_limit(&deep, 200).is_ok());
}

#[test]
fn test_error_positions_use_original_line_numbers() {
    let input = "{\n  \"a\": 1,\n  \"b\": ]\n}";
    let r = report(input);
    assert_eq!(r.kind, ErrorKind::MissingValue);
    assert_eq!((r.line, r.column), (3, 8));
    assert_eq!(r.context, "  \"b\": ]\n       ^");
}
