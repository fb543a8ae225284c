//! Sniff options DTO

use crate::domain::services::{MatchPolicy, SignatureMatcher};
use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default number of leading bytes read per file
pub const DEFAULT_PREFIX_LEN: usize = 4100;

/// Options for inspecting a batch of files
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SniffOptions {
    /// Maximum number of leading bytes read from each file
    pub prefix_len: usize,
    /// How declared and detected types are compared
    pub match_policy: MatchPolicy,
    /// Upper bound on prefix reads in flight (None = all at once)
    pub max_concurrent_reads: Option<usize>,
}

impl Default for SniffOptions {
    fn default() -> Self {
        Self {
            prefix_len: DEFAULT_PREFIX_LEN,
            match_policy: MatchPolicy::Exact,
            max_concurrent_reads: None,
        }
    }
}

impl SniffOptions {
    /// Loads options from a JSON file; omitted keys keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })
    }

    /// Sets the prefix length
    pub fn with_prefix_len(mut self, prefix_len: usize) -> Self {
        self.prefix_len = prefix_len;
        self
    }

    /// Sets the match policy
    pub fn with_match_policy(mut self, policy: MatchPolicy) -> Self {
        self.match_policy = policy;
        self
    }

    /// Limits how many prefix reads run at once
    pub fn with_max_concurrent_reads(mut self, limit: usize) -> Self {
        self.max_concurrent_reads = Some(limit);
        self
    }

    /// Checks that every built-in rule can be evaluated with these options
    pub fn validate(&self) -> Result<(), ConfigError> {
        let minimum = SignatureMatcher::default().required_prefix_len();
        if self.prefix_len < minimum {
            return Err(ConfigError::PrefixTooShort {
                actual: self.prefix_len,
                minimum,
            });
        }
        if self.max_concurrent_reads == Some(0) {
            return Err(ConfigError::ZeroConcurrency);
        }
        Ok(())
    }
}
