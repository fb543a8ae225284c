//! Mismatch report entity

use serde::Serialize;

/// Consistency report between a declared and a detected media type
///
/// Built once per file and consumed by whatever renders the per-file badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MismatchReport {
    /// Type supplied by the caller, echoed as given (may be empty)
    pub declared_type: String,
    /// Type produced by classification (empty when unknown)
    pub detected_type: String,
    pub is_match: bool,
    /// Human-readable description, empty when `is_match` is true
    pub issue: String,
}

impl MismatchReport {
    /// Creates a report for types that agree
    pub fn matched(declared_type: &str, detected_type: &str) -> Self {
        Self {
            declared_type: declared_type.to_string(),
            detected_type: detected_type.to_string(),
            is_match: true,
            issue: String::new(),
        }
    }

    /// Creates a report for types that disagree
    pub fn mismatched(declared_type: &str, detected_type: &str) -> Self {
        Self {
            declared_type: declared_type.to_string(),
            detected_type: detected_type.to_string(),
            is_match: false,
            issue: format!(
                "Declared {} != detected {}",
                or_unknown(declared_type),
                or_unknown(detected_type)
            ),
        }
    }

    /// Short badge text for this report
    pub fn badge(&self) -> &'static str {
        if self.is_match { "OK" } else { "Mismatch" }
    }
}

fn or_unknown(mime: &str) -> &str {
    if mime.is_empty() { "unknown" } else { mime }
}
