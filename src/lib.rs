//! Content-based media type sniffing for file uploads.
//!
//! A bounded prefix of each file is matched against a fixed table of magic
//! numbers, with a plain-text heuristic as fallback. The detected type is
//! then compared with the type the environment declared.
//!
//! ```
//! use mimesniff::domain::services::{classify, MismatchEvaluator};
//!
//! let detected = classify(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
//! let report = MismatchEvaluator::default().evaluate("image/jpeg", detected.mime());
//! assert!(!report.is_match);
//! ```

pub mod application;
pub mod error;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::dto::{BatchReport, FileInspection, SniffOptions};
pub use application::{InspectFilesUseCase, upload_content_type};
pub use domain::entities::{Classification, FileIdentity, MediaType, MismatchReport};
pub use domain::services::{MatchPolicy, classify};
pub use error::ConfigError;
