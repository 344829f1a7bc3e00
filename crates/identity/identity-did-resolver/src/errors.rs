//! Error types for the DID Resolver Registry
use identity_did_web::DIDWebError;
use thiserror::Error;

/// Failures while constructing a [crate::DIDResolverRegistry].
///
/// Resolution itself never fails with this type; errors are reported in the
/// resolution metadata.
#[derive(Error, Debug)]
pub enum ResolverRegistryError {
    /// The did:web resolver couldn't be created
    #[error("did:web resolver error: {0}")]
    WebResolver(#[from] DIDWebError),
}
