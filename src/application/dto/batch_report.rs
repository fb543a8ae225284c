//! Batch report DTO

use crate::domain::entities::{Classification, FileIdentity, MismatchReport};
use serde::Serialize;

/// Banner shown when any file in a batch has a mismatched type
pub const MISMATCH_WARNING: &str =
    "Some files have mismatched MIME types. Continue only if you trust them.";

/// Result of inspecting a single file
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInspection {
    /// Identity of the inspected file
    pub identity: FileIdentity,
    /// Content classification (unknown after a read failure)
    pub classification: Classification,
    /// Declared vs detected comparison
    pub report: MismatchReport,
    /// Content type the file should be uploaded with
    pub upload_type: String,
    /// Read failure, if the prefix could not be obtained
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_error: Option<String>,
}

impl FileInspection {
    pub fn is_match(&self) -> bool {
        self.report.is_match
    }
}

/// Result of inspecting a batch, in input order
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub files: Vec<FileInspection>,
}

impl BatchReport {
    pub fn new(files: Vec<FileInspection>) -> Self {
        Self { files }
    }

    /// Returns true if any file was flagged
    pub fn has_mismatch(&self) -> bool {
        self.files.iter().any(|f| !f.is_match())
    }

    /// Returns the warning banner when any file was flagged
    pub fn warning(&self) -> Option<&'static str> {
        self.has_mismatch().then_some(MISMATCH_WARNING)
    }

    pub fn mismatch_count(&self) -> usize {
        self.files.iter().filter(|f| !f.is_match()).count()
    }

    /// Number of files whose prefix could not be read
    pub fn read_failures(&self) -> usize {
        self.files.iter().filter(|f| f.read_error.is_some()).count()
    }

    /// Looks up a file by its `name-size-modified` key
    pub fn get(&self, key: &str) -> Option<&FileInspection> {
        self.files.iter().find(|f| f.identity.key() == key)
    }

    /// Returns a summary string
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Inspected {} files: {} mismatched",
            self.files.len(),
            self.mismatch_count()
        );
        let failures = self.read_failures();
        if failures > 0 {
            summary.push_str(&format!(", {} unreadable", failures));
        }
        summary
    }
}
