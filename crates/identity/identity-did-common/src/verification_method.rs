//! DID Verification Method Definition
//! <https://www.w3.org/TR/did-core/#verification-methods>

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::DocumentError;

pub const ED25519_VERIFICATION_KEY_2020: &str = "Ed25519VerificationKey2020";
pub const BLOCKCHAIN_VERIFICATION_METHOD_2021: &str = "BlockchainVerificationMethod2021";
pub const JSON_WEB_KEY_2020: &str = "JsonWebKey2020";
pub const MULTIKEY: &str = "Multikey";

/// The key material carried by a Verification Method.
///
/// A Verification Method carries exactly one of these. Serialized flattened
/// into the method, so the variant name becomes the JSON property
/// (`publicKeyJwk`, `publicKeyMultibase` or `blockchainAccountId`).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum KeyRepresentation {
    /// JWK-like key map
    PublicKeyJwk(Map<String, Value>),
    /// Multibase encoded public key (usually base58btc + multicodec)
    PublicKeyMultibase(String),
    /// CAIP-10 blockchain account identifier
    BlockchainAccountId(String),
}

impl KeyRepresentation {
    /// Verification method type conventionally paired with this representation
    pub fn default_type(&self) -> &'static str {
        match self {
            KeyRepresentation::PublicKeyJwk(_) => JSON_WEB_KEY_2020,
            KeyRepresentation::PublicKeyMultibase(_) => MULTIKEY,
            KeyRepresentation::BlockchainAccountId(_) => BLOCKCHAIN_VERIFICATION_METHOD_2021,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMethod {
    pub id: String,

    #[serde(rename = "type")]
    pub type_: String,

    pub controller: String,

    #[serde(flatten)]
    pub key: KeyRepresentation,
}

impl VerificationMethod {
    /// Creates a verification method whose type is derived from the key representation
    pub fn new(id: impl Into<String>, controller: impl Into<String>, key: KeyRepresentation) -> Self {
        VerificationMethod {
            id: id.into(),
            type_: key.default_type().to_string(),
            controller: controller.into(),
            key,
        }
    }

    /// Attempts to extract Public Key Bytes from the Verification Method
    /// WARN: Only multibase encoded keys are supported
    pub fn public_key_bytes(&self) -> Result<Vec<u8>, DocumentError> {
        match &self.key {
            KeyRepresentation::PublicKeyMultibase(key) => {
                Ok(identity_encoding::decode_multikey(key)?)
            }
            KeyRepresentation::PublicKeyJwk(_) => Err(DocumentError::VM(format!(
                "({}) publicKeyJwk extraction isn't supported",
                self.id
            ))),
            KeyRepresentation::BlockchainAccountId(_) => Err(DocumentError::VM(format!(
                "({}) blockchain accounts carry no public key",
                self.id
            ))),
        }
    }
}
