use thiserror::Error;

/// Administrative failures of the Local DID Registry.
/// Distinct from resolution errors, these signal misuse by the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("DID ({0}) is already registered")]
    AlreadyExists(String),

    #[error("DID ({0}) is not registered")]
    NotFound(String),

    #[error("cannot update deactivated DID ({0})")]
    Deactivated(String),
}
