use identity_did_common::ResolutionError;
use thiserror::Error;

/// Error states for did:web method
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DIDWebError {
    #[error("Invalid DID ({0}) Error: {1}")]
    InvalidDid(String, String),

    #[error("Couldn't build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Network error: url ({0}): {1}")]
    Network(String, String),

    #[error("Request to ({0}) timed out after {1}ms")]
    Timeout(String, u128),

    #[error("url ({0}) returned HTTP status {1}")]
    HttpStatus(String, u16),

    #[error("url ({0}) didn't return a valid DID Document: {1}")]
    InvalidDocument(String, String),

    #[error("DID Document id ({found}) doesn't match requested DID ({expected})")]
    IdMismatch { expected: String, found: String },
}

impl DIDWebError {
    /// Maps onto the resolution error taxonomy.
    /// Unreachable or absent documents are `notFound`, malformed ones are `invalidDid`.
    pub fn resolution_error(&self) -> ResolutionError {
        match self {
            DIDWebError::InvalidDid(..)
            | DIDWebError::InvalidDocument(..)
            | DIDWebError::IdMismatch { .. } => ResolutionError::InvalidDid,
            DIDWebError::ClientBuild(_)
            | DIDWebError::Network(..)
            | DIDWebError::Timeout(..)
            | DIDWebError::HttpStatus(..) => ResolutionError::NotFound,
        }
    }
}
