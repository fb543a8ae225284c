//! Application layer
//!
//! Use cases that orchestrate reading, classification and evaluation.

pub mod dto;
mod inspect_files;
mod upload_type;

pub use inspect_files::InspectFilesUseCase;
pub use upload_type::{FALLBACK_CONTENT_TYPE, upload_content_type};
