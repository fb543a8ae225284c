//! Domain services
//!
//! Stateless logic operating on domain entities: classification and
//! declared-type evaluation.

mod classifier;
mod mismatch_evaluator;
mod signature_matcher;
mod text_heuristic;

pub use classifier::{Classifier, classify};
pub use mismatch_evaluator::{MatchPolicy, MismatchEvaluator, normalize};
pub use signature_matcher::{MIN_PREFIX_LEN, SIGNATURE_RULES, SignatureMatcher};
pub use text_heuristic::{PRINTABLE_THRESHOLD, TEXT_SAMPLE_LEN, TextHeuristic};
