//! Prometheus text exposition format helpers.
//!
//! Shared formatting routines used by the counter and histogram families
//! when rendering themselves into the exposition document.

use std::fmt::Write;

/// Content type of the text exposition format, including the format version.
pub const TEXT_FORMAT_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Writes the `# HELP` and `# TYPE` header lines for a metric family.
///
/// Emitted even for families with no series yet, so scrapers always see
/// the full set of declared families.
pub(crate) fn write_family_header(
    out: &mut String,
    name: &str,
    help: &str,
    kind: &str,
) -> std::fmt::Result {
    writeln!(out, "# HELP {name} {}", escape_help(help))?;
    writeln!(out, "# TYPE {name} {kind}")
}

/// Escapes a help string for a `# HELP` line.
///
/// Backslashes and line feeds must be escaped; double quotes are legal here.
fn escape_help(help: &str) -> String {
    help.replace('\\', "\\\\").replace('\n', "\\n")
}

/// Escapes a label value for use inside `{label="value"}`.
pub(crate) fn escape_label_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Formats a sample value or bucket bound.
///
/// `f64::Display` produces the shortest round-trip form (`1`, `0.005`,
/// `2.5`), matching the Rust exposition convention rather than the
/// trailing `.0` some clients emit.
pub(crate) fn format_value(value: f64) -> String {
    if value == f64::INFINITY {
        "+Inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value}")
    }
}
