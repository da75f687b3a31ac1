//! Encode values back to JSON text.
//!
//! The compact form is the round-trip form: floats always carry a decimal
//! point or exponent so the numeric subtype survives re-parsing.

use crate::value::Value;

/// Encode a value as compact JSON on a single line.
pub fn encode(value: &Value) -> String {
    let mut out = String::new();
    encode_compact(value, &mut out);
    out
}

/// Encode a value as indented JSON, two spaces per level.
pub fn encode_pretty(value: &Value) -> String {
    encode_indented(value, 0)
}

fn encode_compact(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Integer(n) => out.push_str(&n.to_string()),
        Value::Float(f) => out.push_str(&encode_float(*f)),
        Value::String(s) => out.push_str(&encode_string(s)),
        Value::Array(arr) => {
            out.push('[');
            for (i, item) in arr.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                encode_compact(item, out);
            }
            out.push(']');
        }
        Value::Object(pairs) => {
            out.push('{');
            for (i, (key, item)) in pairs.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&encode_string(key));
                out.push_str(": ");
                encode_compact(item, out);
            }
            out.push('}');
        }
    }
}

fn encode_indented(value: &Value, indent: usize) -> String {
    let pad = "  ".repeat(indent);
    let pad1 = "  ".repeat(indent + 1);

    match value {
        Value::Array(arr) if !arr.is_empty() => {
            let items: Vec<String> = arr
                .iter()
                .map(|v| format!("{}{}", pad1, encode_indented(v, indent + 1)))
                .collect();
            format!("[\n{}\n{}]", items.join(",\n"), pad)
        }
        Value::Object(pairs) if !pairs.is_empty() => {
            let items: Vec<String> = pairs
                .iter()
                .map(|(k, v)| {
                    format!(
                        "{}{}: {}",
                        pad1,
                        encode_string(k),
                        encode_indented(v, indent + 1)
                    )
                })
                .collect();
            format!("{{\n{}\n{}}}", items.join(",\n"), pad)
        }
        other => encode(other),
    }
}

fn encode_float(f: f64) -> String {
    if f.is_nan() || f.is_infinite() {
        // JSON has no representation for these.
        return "null".to_string();
    }
    let s = format!("{}", f);
    if s.contains('.') || s.contains('e') {
        s
    } else {
        format!("{}.0", s)
    }
}

fn encode_string(s: &str) -> String {
    let mut result = String::from("\"");
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            '\x08' => result.push_str("\\b"),
            '\x0c' => result.push_str("\\f"),
            c if c.is_control() => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result.push('"');
    result
}
