/*!
 * DID (Decentralized Identifier) parsing
 *
 * A DID has the shape `did:<method>:<method-specific-id>`. The method-specific
 * identifier may itself contain colons (`did:web:example.com:user:alice`), so
 * everything after the method segment is kept verbatim.
 *
 * Method resolvers re-validate their own prefix and identifier rules, this
 * module only enforces the generic shape.
 */

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use thiserror::Error;

const DID_PREFIX: &str = "did:";

/// A structurally valid Decentralized Identifier
///
/// # Examples
///
/// ```
/// use identity_did_common::DID;
///
/// let did: DID = "did:web:example.com:user:alice".parse().unwrap();
/// assert_eq!(did.method(), "web");
/// assert_eq!(did.method_specific_id(), "example.com:user:alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DID {
    method: String,
    method_specific_id: String,
}

/// Errors that can occur when parsing a DID
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DIDError {
    /// DID string does not start with "did:"
    #[error("DID must start with 'did:'")]
    MissingPrefix,
    /// DID has no method-specific identifier segment
    #[error("DID must have the form did:<method>:<method-specific-id>")]
    MissingSegments,
    /// Method name is empty
    #[error("DID method must not be empty")]
    EmptyMethod,
}

impl DID {
    /// The method name, e.g. `key` for `did:key:z6Mk...`
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Everything after `did:<method>:`, colons preserved
    pub fn method_specific_id(&self) -> &str {
        &self.method_specific_id
    }
}

impl FromStr for DID {
    type Err = DIDError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.strip_prefix(DID_PREFIX).ok_or(DIDError::MissingPrefix)?;

        let (method, method_specific_id) =
            rest.split_once(':').ok_or(DIDError::MissingSegments)?;

        if method.is_empty() {
            return Err(DIDError::EmptyMethod);
        }

        Ok(DID {
            method: method.to_string(),
            method_specific_id: method_specific_id.to_string(),
        })
    }
}

impl fmt::Display for DID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "did:{}:{}", self.method, self.method_specific_id)
    }
}

impl Serialize for DID {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DID {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Parses a DID string, returning `None` for anything malformed.
///
/// Never panics, whatever the input.
pub fn parse(did: &str) -> Option<DID> {
    did.parse().ok()
}
