//! Content classifier
//!
//! Composes the signature matcher and the text heuristic into the full
//! classification pipeline.

use super::signature_matcher::MIN_PREFIX_LEN;
use super::{SignatureMatcher, TextHeuristic};
use crate::domain::entities::Classification;

/// Classifies byte prefixes by content
///
/// Signatures are tried first; the text heuristic only runs on a miss.
/// The classifier holds no mutable state and can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    signatures: SignatureMatcher,
    text: TextHeuristic,
}

impl Classifier {
    /// Classifies `prefix`
    ///
    /// Prefixes shorter than four bytes are always unknown.
    pub fn classify(&self, prefix: &[u8]) -> Classification {
        if prefix.len() < MIN_PREFIX_LEN {
            return Classification::Unknown;
        }

        match self.signatures.classify(prefix) {
            Classification::Unknown => self.text.classify(prefix),
            known => known,
        }
    }
}

/// Classifies `prefix` with the built-in rules
pub fn classify(prefix: &[u8]) -> Classification {
    Classifier::default().classify(prefix)
}
