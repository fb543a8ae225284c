//! Domain entities
//!
//! Core values of the sniffing domain: media types, signature rules,
//! classification results and mismatch reports.

mod file_identity;
mod media_type;
mod mismatch_report;
mod signature_rule;

pub use file_identity::FileIdentity;
pub use media_type::{Classification, MediaType};
pub use mismatch_report::MismatchReport;
pub use signature_rule::{Segment, SignatureRule};
