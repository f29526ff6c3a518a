//! Error types for the userdi crate

use thiserror::Error;

/// Main error type for the userdi crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("no registration for capability '{capability}'")]
    UnregisteredCapability { capability: String },

    #[error("cyclic dependency detected: {}", chain.join(" -> "))]
    CyclicDependency { chain: Vec<String> },

    #[error("user not found: {email}")]
    UserNotFound { email: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
