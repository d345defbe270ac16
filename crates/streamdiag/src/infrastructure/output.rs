//! Output helpers for the CLI: report formatting and writing to a file or
//! stdout.

use std::io::Write;
use std::path::Path;

use streamdiag_core::Report;

/// Human-readable multi-line rendering of a validation report.
///
/// ```text
/// Validation failed with 1 error(s)
///
/// Errors:
///   - Layer 0: Missing required field 'keyFunctions'
///
/// Warnings:
///   - Layer 0, Category 0, Technology 0, Link 0: URL may be invalid: not a url
/// ```
pub fn format_report(report: &Report) -> String {
    let mut out = report.summary.message.clone();
    out.push('\n');
    for (title, lines) in [("Errors", &report.errors), ("Warnings", &report.warnings)] {
        if lines.is_empty() {
            continue;
        }
        out.push('\n');
        out.push_str(title);
        out.push_str(":\n");
        for line in lines {
            out.push_str("  - ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

/// Writes `contents` to `path`, or to stdout when `path` is `None`.
///
/// # Errors
///
/// Any I/O error from creating the file or writing to stdout.
pub fn write_output(path: Option<&Path>, contents: &str) -> std::io::Result<()> {
    match path {
        Some(path) => std::fs::write(path, contents),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            if !contents.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()
        }
    }
}
