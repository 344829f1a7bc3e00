use thiserror::Error;

/// Error states for did:pkh method
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Wrong DID method or structure
    #[error("Invalid DID ({0}) Error: {1}")]
    InvalidDid(String, String),

    /// Method specific id isn't a CAIP-10 account id
    #[error(
        "Invalid CAIP-10 account id ({0}): expected `<namespace>:<reference>:<address>` or `<namespace>:<address>`"
    )]
    InvalidAccountId(String),
}
