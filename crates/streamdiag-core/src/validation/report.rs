//! Validation report types.

use serde::Serialize;
use serde_json::Value;

/// Outcome of validating one candidate document.
///
/// Serialises with camelCase keys (`isValid`, `totalErrors`) so the JSON form
/// matches what contributors already see from the browser tooling.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// `true` iff `errors` is empty.
    pub is_valid: bool,
    /// Schema violations, in traversal order.
    pub errors: Vec<String>,
    /// Advisory findings (suspicious URLs), in traversal order.
    pub warnings: Vec<String>,
    pub summary: ReportSummary,
}

/// Counts plus a one-line human-readable verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_errors: usize,
    pub total_warnings: usize,
    pub message: String,
}

/// Result of [`crate::validate_json_string`].
///
/// Exactly one of `data` / `error` is set: `data` holds the parsed value when
/// the text was well-formed JSON, `error` holds the parser message otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonValidation {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub report: Report,
}

impl Report {
    /// Builds a report from accumulated findings.
    pub fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        let summary = ReportSummary::describe(errors.len(), warnings.len());
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            summary,
        }
    }

    /// A report for text that could not be parsed as JSON at all.
    pub fn parse_failure(message: &str) -> Self {
        Self {
            is_valid: false,
            errors: vec![format!("JSON parsing error: {message}")],
            warnings: Vec::new(),
            summary: ReportSummary {
                total_errors: 1,
                total_warnings: 0,
                message: format!("Invalid JSON format: {message}"),
            },
        }
    }
}

impl ReportSummary {
    fn describe(total_errors: usize, total_warnings: usize) -> Self {
        let message = if total_errors > 0 {
            format!("Validation failed with {total_errors} error(s)")
        } else if total_warnings > 0 {
            format!("Validation passed with {total_warnings} warning(s)")
        } else {
            "Validation passed successfully!".to_string()
        };
        Self {
            total_errors,
            total_warnings,
            message,
        }
    }
}
