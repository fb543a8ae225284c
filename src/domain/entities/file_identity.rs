//! File identity entity
//!
//! Batch reads may finish in any order, so results are paired back to
//! their originating file by this identity rather than by completion order.

use serde::Serialize;
use std::fmt;

/// Identity of a candidate file within a batch
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FileIdentity {
    /// File name as presented to the user
    pub name: String,
    /// Size in bytes, 0 if unknown
    pub size: u64,
    /// Last modification time in milliseconds since the Unix epoch, if known
    pub modified: Option<u64>,
}

impl FileIdentity {
    pub fn new(name: impl Into<String>, size: u64, modified: Option<u64>) -> Self {
        Self {
            name: name.into(),
            size,
            modified,
        }
    }

    /// Returns the `name-size-modified` key
    pub fn key(&self) -> String {
        format!("{}-{}-{}", self.name, self.size, self.modified.unwrap_or(0))
    }
}

impl fmt::Display for FileIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_joins_name_size_and_mtime() {
        let id = FileIdentity::new("photo.jpg", 2048, Some(1_700_000_000_000));
        assert_eq!(id.key(), "photo.jpg-2048-1700000000000");
        assert_eq!(FileIdentity::new("a", 1, None).key(), "a-1-0");
    }
}
