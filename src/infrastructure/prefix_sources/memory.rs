//! In-memory prefix source

use crate::domain::entities::FileIdentity;
use crate::domain::repositories::{PrefixReadError, PrefixSource};

/// File content already held in memory
#[derive(Debug, Clone)]
pub struct InMemoryFile {
    identity: FileIdentity,
    declared_type: String,
    data: Vec<u8>,
}

impl InMemoryFile {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            identity: FileIdentity::new(name, data.len() as u64, None),
            declared_type: declared_type.into(),
            data,
        }
    }
}

impl PrefixSource for InMemoryFile {
    fn identity(&self) -> &FileIdentity {
        &self.identity
    }

    fn declared_type(&self) -> &str {
        &self.declared_type
    }

    fn read_prefix(&self, max_len: usize) -> Result<Vec<u8>, PrefixReadError> {
        Ok(self.data[..self.data.len().min(max_len)].to_vec())
    }
}
