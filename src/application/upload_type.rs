//! Upload content type selection

use crate::domain::entities::Classification;

/// Content type used when neither content nor environment tell us anything
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Picks the content type an outgoing file part is tagged with
///
/// Detected content wins over the declared type; an empty or blank
/// declared type falls through to `application/octet-stream`.
pub fn upload_content_type(detected: Classification, declared_type: &str) -> String {
    if detected.is_known() {
        return detected.mime().to_string();
    }
    let declared_type = declared_type.trim();
    if declared_type.is_empty() {
        FALLBACK_CONTENT_TYPE.to_string()
    } else {
        declared_type.to_string()
    }
}
