use thiserror::Error;

/// Error states for did:key method
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Wrong DID method or structure
    #[error("Invalid DID ({0}) Error: {1}")]
    InvalidDid(String, String),

    /// Multibase prefix other than base58btc
    #[error("Unsupported multibase prefix '{0}': did:key requires 'z' (base58btc)")]
    UnsupportedMultibase(char),

    /// base58btc decoding failed
    #[error("Couldn't decode base58btc: {0}")]
    Decoding(String),

    /// Multicodec prefix isn't Ed25519
    #[error("Unsupported public key type: multicodec prefix 0x{0} isn't Ed25519 (0xed01)")]
    UnsupportedPublicKeyType(String),

    /// Public key length doesn't match what is expected
    #[error("Invalid Ed25519 public key length: expected 32 bytes, got {0}")]
    InvalidPublicKeyLength(usize),
}
