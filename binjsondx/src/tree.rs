//! Tree view of a parsed value, for humans.
//!
//! Dictionaries expand into keyed branches, lists and strings show their
//! lengths, numbers show their lexical subtype.

use libjsondx::Value;

/// Render a value tree rooted at "JSON Root".
pub fn render_tree(value: &Value) -> String {
    let mut out = String::from("JSON Root\n");
    push_value(&mut out, "", true, value);
    out
}

fn push_value(out: &mut String, prefix: &str, is_last: bool, value: &Value) {
    match value {
        Value::Object(pairs) => {
            push_line(out, prefix, is_last, "Dictionary");
            let indent = child_prefix(prefix, is_last);
            for (i, (key, item)) in pairs.iter().enumerate() {
                let last = i + 1 == pairs.len();
                push_line(out, &indent, last, &format!("Key: {}", key));
                push_value(out, &child_prefix(&indent, last), true, item);
            }
        }
        Value::Array(items) => {
            push_line(
                out,
                prefix,
                is_last,
                &format!("List (length={})", items.len()),
            );
            let indent = child_prefix(prefix, is_last);
            for (i, item) in items.iter().enumerate() {
                push_value(out, &indent, i + 1 == items.len(), item);
            }
        }
        Value::Null => push_line(out, prefix, is_last, "Null"),
        Value::Bool(b) => push_line(out, prefix, is_last, &format!("Bool: {}", b)),
        Value::Integer(n) => push_line(out, prefix, is_last, &format!("Number: {} (type=int)", n)),
        Value::Float(f) => push_line(out, prefix, is_last, &format!("Number: {} (type=float)", f)),
        Value::String(s) => push_line(
            out,
            prefix,
            is_last,
            &format!("String: '{}' (length={})", s, s.chars().count()),
        ),
    }
}

fn push_line(out: &mut String, prefix: &str, is_last: bool, label: &str) {
    out.push_str(prefix);
    out.push_str(if is_last { "└── " } else { "├── " });
    out.push_str(label);
    out.push('\n');
}

fn child_prefix(prefix: &str, is_last: bool) -> String {
    format!("{}{}", prefix, if is_last { "    " } else { "│   " })
}

#[cfg(test)]
mod tests {
    use super::*;
    use libjsondx::parse;

    #[test]
    fn test_render_scalar() {
        let v = parse("42").unwrap();
        assert_eq!(render_tree(&v), "JSON Root\n└── Number: 42 (type=int)\n");
    }

    #[test]
    fn test_render_document() {
        let v = parse(r#"{"name": "Lyza", "skills": ["C", "Python"], "age": 21}"#).unwrap();
        let expected = "\
JSON Root
└── Dictionary
    ├── Key: name
    │   └── String: 'Lyza' (length=4)
    ├── Key: skills
    │   └── List (length=2)
    │       ├── String: 'C' (length=1)
    │       └── String: 'Python' (length=6)
    └── Key: age
        └── Number: 21 (type=int)
";
        assert_eq!(render_tree(&v), expected);
    }

    #[test]
    fn test_render_float_subtype() {
        let v = parse("[2.5, null, true]").unwrap();
        let rendered = render_tree(&v);
        assert!(rendered.contains("Number: 2.5 (type=float)"));
        assert!(rendered.contains("├── Null"));
        assert!(rendered.contains("└── Bool: true"));
    }
}
