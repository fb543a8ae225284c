//! Plain-text rendering of reports

use crate::application::dto::BatchReport;
use crate::domain::entities::SignatureRule;
use std::fmt::Write;

/// Renders one line per file plus the warning banner
pub fn render_batch(report: &BatchReport) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<9} {:<28} {:<20} {:<24} {}",
        "STATUS", "FILE", "DETECTED", "UPLOAD AS", "ISSUE"
    );
    for file in &report.files {
        let issue = match &file.read_error {
            Some(error) => error.as_str(),
            None => file.report.issue.as_str(),
        };
        let _ = writeln!(
            out,
            "{:<9} {:<28} {:<20} {:<24} {}",
            file.report.badge(),
            file.identity.name,
            file.classification.to_string(),
            file.upload_type,
            issue
        );
    }

    if let Some(warning) = report.warning() {
        let _ = writeln!(out, "\n[!] {}", warning);
    }
    out
}

/// Renders the batch report as pretty-printed JSON
pub fn render_json(report: &BatchReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Exit status for `check`: 2 when mismatches are denied and present
pub fn exit_status(report: &BatchReport, deny_mismatch: bool) -> u8 {
    if deny_mismatch && report.has_mismatch() { 2 } else { 0 }
}

/// Renders the rule table with hex patterns
pub fn render_rules(rules: &[SignatureRule]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<3} {:<34} {:<6} {:<18} {}",
        "#", "PATTERN", "SPAN", "MIME", "NAME"
    );
    for (index, rule) in rules.iter().enumerate() {
        let pattern = rule
            .segments()
            .iter()
            .map(|s| format!("@{} {}", s.offset(), hex::encode_upper(s.pattern())))
            .collect::<Vec<_>>()
            .join(" + ");
        let _ = writeln!(
            out,
            "{:<3} {:<34} {:<6} {:<18} {}",
            index + 1,
            pattern,
            rule.span(),
            rule.mime(),
            rule.media_type().name()
        );
    }
    out
}
