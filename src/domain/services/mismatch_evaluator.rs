//! Mismatch evaluator service
//!
//! Compares a caller-declared media type with the detected one.

use crate::domain::entities::{Classification, MismatchReport};
use serde::{Deserialize, Serialize};

/// How two normalized media types are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchPolicy {
    /// Normalized types must be equal
    #[default]
    Exact,
    /// Either normalized type may be a prefix of the other
    ///
    /// Tolerates a truncated declared type, but also accepts unrelated pairs
    /// such as `image/jp` and `image/jpeg`, and an empty declared type
    /// against anything.
    PrefixTolerant,
}

/// Strips parameters after `;`, surrounding whitespace and ASCII case
pub fn normalize(media_type: &str) -> String {
    media_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Evaluates declared types against detected ones
#[derive(Debug, Clone, Copy, Default)]
pub struct MismatchEvaluator {
    policy: MatchPolicy,
}

impl MismatchEvaluator {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Builds the report for one file
    ///
    /// Content that could not be classified is never reported as a
    /// mismatch: failing to classify must not block or warn about an upload.
    pub fn evaluate(&self, declared_type: &str, detected_type: &str) -> MismatchReport {
        if detected_type.is_empty() {
            return MismatchReport::matched(declared_type, detected_type);
        }

        if self.types_match(declared_type, detected_type) {
            MismatchReport::matched(declared_type, detected_type)
        } else {
            MismatchReport::mismatched(declared_type, detected_type)
        }
    }

    /// Same as [`evaluate`](Self::evaluate) for a classification result
    pub fn evaluate_classification(
        &self,
        declared_type: &str,
        detected: Classification,
    ) -> MismatchReport {
        self.evaluate(declared_type, detected.mime())
    }

    fn types_match(&self, declared_type: &str, detected_type: &str) -> bool {
        let declared = normalize(declared_type);
        let detected = normalize(detected_type);

        match self.policy {
            MatchPolicy::Exact => declared == detected,
            MatchPolicy::PrefixTolerant => {
                declared.starts_with(&detected) || detected.starts_with(&declared)
            }
        }
    }
}
