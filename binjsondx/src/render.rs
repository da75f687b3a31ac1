//! Fixed-layout rendering of syntax error reports.
//!
//! The layout is a stable contract: consumers diff this output, so every
//! banner is exactly 57 columns and the field lines never change shape.

use libjsondx::ErrorReport;

/// Render a report as the banner-framed block:
///
/// ```text
/// =================== JSON SYNTAX ERROR ===================
/// Error Type: MissingValue
/// Missing Value at line 1, column 14.
/// Problematic Character: ']'
/// ======================== CONTEXT ========================
/// {"example2": ]
///              ^
/// =========================================================
/// ```
pub fn render(report: &ErrorReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} JSON SYNTAX ERROR {}\n",
        "=".repeat(19),
        "=".repeat(19)
    ));
    out.push_str(&format!("Error Type: {}\n", report.kind.name()));
    out.push_str(&format!(
        "{} at line {}, column {}.\n",
        report.kind.label(),
        report.line,
        report.column
    ));
    out.push_str(&format!("Problematic Character: '{}'\n", report.offending));
    out.push_str(&format!("{} CONTEXT {}\n", "=".repeat(24), "=".repeat(24)));
    out.push_str(&report.context);
    out.push('\n');
    out.push_str(&"=".repeat(57));
    out
}
