//! Data Transfer Objects

mod batch_report;
mod sniff_options;

pub use batch_report::{BatchReport, FileInspection, MISMATCH_WARNING};
pub use sniff_options::{DEFAULT_PREFIX_LEN, SniffOptions};
