//! DID resolution result types
//!
//! See <https://w3c.github.io/did-resolution/#did-resolution-result>

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Document;

/// Closed error taxonomy reported in `didResolutionMetadata.error`.
///
/// See https://www.w3.org/TR/did-spec-registries/#error
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Error)]
#[serde(rename_all = "camelCase")]
pub enum ResolutionError {
    /// The DID is malformed, or breaks the structural rules of its method
    #[error("invalidDid")]
    InvalidDid,
    /// The DID is well formed but no document exists for it
    #[error("notFound")]
    NotFound,
    /// The DID was deactivated; the stale document is still returned
    #[error("deactivated")]
    Deactivated,
    /// Method specific error code
    #[serde(untagged)]
    #[error("{0}")]
    Other(String),
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionMetadata {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<ResolutionError>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub updated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub deactivated: Option<bool>,
}

/// Output of every resolver: document, document metadata and resolution metadata
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionResult {
    pub did_document: Option<Document>,
    #[serde(default)]
    pub did_document_metadata: DocumentMetadata,
    #[serde(default)]
    pub did_resolution_metadata: ResolutionMetadata,
}

impl ResolutionResult {
    /// Successful resolution with empty document metadata
    pub fn resolved(document: Document) -> Self {
        Self::resolved_with_metadata(document, DocumentMetadata::default())
    }

    pub fn resolved_with_metadata(document: Document, metadata: DocumentMetadata) -> Self {
        ResolutionResult {
            did_document: Some(document),
            did_document_metadata: metadata,
            did_resolution_metadata: ResolutionMetadata::default(),
        }
    }

    /// Failed resolution, no document
    pub fn error(error: ResolutionError, message: impl Into<String>) -> Self {
        ResolutionResult {
            did_document: None,
            did_document_metadata: DocumentMetadata::default(),
            did_resolution_metadata: ResolutionMetadata {
                error: Some(error),
                message: Some(message.into()),
            },
        }
    }

    pub fn invalid_did(message: impl Into<String>) -> Self {
        Self::error(ResolutionError::InvalidDid, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::error(ResolutionError::NotFound, message)
    }

    /// Deactivated DID: the stale document is returned alongside the error
    pub fn deactivated(document: Document, metadata: DocumentMetadata) -> Self {
        ResolutionResult {
            did_resolution_metadata: ResolutionMetadata {
                error: Some(ResolutionError::Deactivated),
                message: Some(format!("DID ({}) has been deactivated", document.id)),
            },
            did_document: Some(document),
            did_document_metadata: DocumentMetadata {
                deactivated: Some(true),
                ..metadata
            },
        }
    }

    /// true when no resolution error was reported
    pub fn is_ok(&self) -> bool {
        self.did_resolution_metadata.error.is_none()
    }

    pub fn error_code(&self) -> Option<&ResolutionError> {
        self.did_resolution_metadata.error.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.did_resolution_metadata.message.as_deref()
    }
}
