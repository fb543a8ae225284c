//! Error types shared across layers

use std::io;
use thiserror::Error;

/// Errors that can occur when loading or validating sniffing options
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Prefix length {actual} is below the minimum of {minimum} bytes")]
    PrefixTooShort { actual: usize, minimum: usize },

    #[error("Concurrent read limit must be at least 1")]
    ZeroConcurrency,

    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
