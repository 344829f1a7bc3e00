/*!
*   DID Document Definition
*/

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, SeqAccess, Visitor},
};
use thiserror::Error;

use crate::{one_or_many::OneOrMany, service::Service, verification_method::VerificationMethod};

pub mod did;
pub mod document;
pub mod one_or_many;
pub mod resolution;
pub mod service;
pub mod verification_method;

pub use did::{DID, DIDError, parse};
pub use document::DocumentExt;
pub use resolution::{DocumentMetadata, ResolutionError, ResolutionMetadata, ResolutionResult};

/// Core DID context, first entry of every `@context`
pub const DID_CONTEXT_V1: &str = "https://www.w3.org/ns/did/v1";

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Verification method error: {0}")]
    VM(String),

    #[error("Encoding error: {0}")]
    Encoding(#[from] identity_encoding::EncodingError),
}

/// A [DID Document]
///
/// [DID Document]: https://www.w3.org/TR/did-core/
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// DID Subject Identifier
    pub id: String,

    #[serde(rename = "@context")]
    #[serde(deserialize_with = "de_context")]
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub context: Vec<String>,

    /// DID(s) authorized to manage this document
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub controller: Option<OneOrMany<String>>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub verification_method: Vec<VerificationMethod>,

    /// References (by id) into `verification_method`
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub authentication: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub assertion_method: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub key_agreement: Vec<String>,

    /// Set of Services
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub service: Vec<Service>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub updated: Option<DateTime<Utc>>,
}

impl Document {
    /// Creates an empty document for `id` with the core DID context
    pub fn new(id: impl Into<String>) -> Self {
        Document {
            id: id.into(),
            context: vec![DID_CONTEXT_V1.to_string()],
            controller: None,
            verification_method: Vec::new(),
            authentication: Vec::new(),
            assertion_method: Vec::new(),
            key_agreement: Vec::new(),
            service: Vec::new(),
            created: None,
            updated: None,
        }
    }
}

/// `@context` may be a single string or an ordered list of strings
fn de_context<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrVecVisitor;

    impl<'de> Visitor<'de> for StringOrVecVisitor {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a sequence of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_owned()])
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(elem) = seq.next_element()? {
                vec.push(elem);
            }
            Ok(vec)
        }
    }

    deserializer.deserialize_any(StringOrVecVisitor)
}
