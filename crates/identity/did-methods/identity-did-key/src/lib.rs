//! Implementation of the did:key method for Ed25519 keys
//! [https://w3c-ccg.github.io/did-method-key/]

use crate::errors::Error;
use identity_did_common::{
    DID_CONTEXT_V1, Document, ResolutionResult,
    verification_method::{ED25519_VERIFICATION_KEY_2020, KeyRepresentation, VerificationMethod},
};
use identity_did_resolver_traits::Resolver;
use identity_encoding::{BASE58BTC_PREFIX, ED25519_PUB_PREFIX, decode_base58btc};
use tracing::debug;

pub mod create;
pub mod errors;

pub const DID_KEY_PREFIX: &str = "did:key:";
pub const ED25519_2020_CONTEXT: &str = "https://w3id.org/security/suites/ed25519-2020/v1";
const ED25519_PUBLIC_KEY_LENGTH: usize = 32;

pub struct DIDKey;

impl DIDKey {
    /// Resolves a Key DID method and returns a DID Document or error
    pub fn resolve(did: &str) -> Result<Document, Error> {
        let Some(identifier) = did.strip_prefix(DID_KEY_PREFIX) else {
            return Err(Error::InvalidDid(
                did.to_string(),
                "DID doesn't start with did:key:".to_string(),
            ));
        };

        let Some(prefix) = identifier.chars().next() else {
            return Err(Error::InvalidDid(
                did.to_string(),
                "missing multibase encoded key".to_string(),
            ));
        };

        // did:key only supports base58btc as denoted by the leading z prefix
        if prefix != BASE58BTC_PREFIX {
            return Err(Error::UnsupportedMultibase(prefix));
        }

        let decoded = decode_base58btc(identifier).map_err(|e| Error::Decoding(e.to_string()))?;

        let Some(public_key) = decoded.strip_prefix(&ED25519_PUB_PREFIX) else {
            let found: String = decoded.iter().take(2).map(|b| format!("{b:02x}")).collect();
            return Err(Error::UnsupportedPublicKeyType(found));
        };

        if public_key.len() != ED25519_PUBLIC_KEY_LENGTH {
            return Err(Error::InvalidPublicKeyLength(public_key.len()));
        }

        let key_id = [did, "#", identifier].concat();

        Ok(Document {
            context: vec![DID_CONTEXT_V1.to_string(), ED25519_2020_CONTEXT.to_string()],
            verification_method: vec![VerificationMethod {
                id: key_id.clone(),
                type_: ED25519_VERIFICATION_KEY_2020.to_string(),
                controller: did.to_string(),
                key: KeyRepresentation::PublicKeyMultibase(identifier.to_string()),
            }],
            authentication: vec![key_id.clone()],
            assertion_method: vec![key_id],
            ..Document::new(did)
        })
    }
}

/// Resolver for `did:key`, derives DID Documents from public key material.
///
/// Resolution is pure computation (no IO).
pub struct KeyResolver;

impl Resolver for KeyResolver {
    fn name(&self) -> &str {
        "KeyResolver"
    }

    fn resolve(&self, did: &str) -> ResolutionResult {
        match DIDKey::resolve(did) {
            Ok(doc) => ResolutionResult::resolved(doc),
            Err(e) => {
                debug!("did:key resolution of ({did}) failed: {e}");
                ResolutionResult::invalid_did(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use identity_did_common::{DocumentExt, ResolutionError};
    use identity_encoding::{ED25519_PUB, X25519_PUB, encode_multikey};

    const DID_KEY: &str = "did:key:z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK";

    #[test]
    fn resolves_ed25519() {
        let doc = DIDKey::resolve(DID_KEY).unwrap();
        let key_id = [DID_KEY, "#z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK"].concat();

        assert_eq!(doc.id, DID_KEY);
        assert_eq!(doc.context, vec![DID_CONTEXT_V1, ED25519_2020_CONTEXT]);
        assert_eq!(doc.verification_method.len(), 1);

        let vm = &doc.verification_method[0];
        assert_eq!(vm.id, key_id);
        assert_eq!(vm.type_, "Ed25519VerificationKey2020");
        assert_eq!(vm.controller, DID_KEY);
        assert_eq!(
            vm.key,
            KeyRepresentation::PublicKeyMultibase(
                "z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK".to_string()
            )
        );

        assert_eq!(doc.authentication, vec![key_id.clone()]);
        assert_eq!(doc.assertion_method, vec![key_id.clone()]);
        assert!(doc.contains_authentication(&key_id));
        assert!(doc.key_agreement.is_empty());
        assert!(doc.created.is_none());
    }

    #[test]
    fn resolution_is_deterministic() {
        assert_eq!(
            DIDKey::resolve(DID_KEY).unwrap(),
            DIDKey::resolve(DID_KEY).unwrap()
        );
    }

    #[test]
    fn rejects_other_methods() {
        assert!(matches!(
            DIDKey::resolve("did:web:example.com"),
            Err(Error::InvalidDid(_, _))
        ));
    }

    #[test]
    fn rejects_empty_identifier() {
        assert!(matches!(
            DIDKey::resolve("did:key:"),
            Err(Error::InvalidDid(_, _))
        ));
    }

    #[test]
    fn rejects_non_base58btc_multibase() {
        assert_eq!(
            DIDKey::resolve("did:key:f6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK"),
            Err(Error::UnsupportedMultibase('f'))
        );
        let message = DIDKey::resolve("did:key:uABC").unwrap_err().to_string();
        assert!(message.contains("'u'"));
    }

    #[test]
    fn rejects_invalid_base58() {
        assert!(matches!(
            DIDKey::resolve("did:key:z0OIl"),
            Err(Error::Decoding(_))
        ));
    }

    #[test]
    fn rejects_short_unknown_key() {
        assert!(DIDKey::resolve("did:key:z6MkUnknown").is_err());
    }

    #[test]
    fn rejects_wrong_multicodec() {
        let did = [DID_KEY_PREFIX, &encode_multikey(X25519_PUB, &[9u8; 32])].concat();
        assert_eq!(
            DIDKey::resolve(&did),
            Err(Error::UnsupportedPublicKeyType("ec01".to_string()))
        );
    }

    #[test]
    fn rejects_wrong_key_length() {
        for len in [0, 31, 33, 64] {
            let did = [DID_KEY_PREFIX, &encode_multikey(ED25519_PUB, &vec![1u8; len])].concat();
            assert_eq!(DIDKey::resolve(&did), Err(Error::InvalidPublicKeyLength(len)));
        }
    }

    #[test]
    fn key_resolver_maps_errors_to_invalid_did() {
        let result = Resolver::resolve(&KeyResolver, "did:key:z6MkUnknown");
        assert_eq!(result.error_code(), Some(&ResolutionError::InvalidDid));
        assert!(result.did_document.is_none());
        assert!(result.message().is_some());

        let result = Resolver::resolve(&KeyResolver, "did:key:z0OIl");
        assert_eq!(result.error_code(), Some(&ResolutionError::InvalidDid));
        assert!(result.message().unwrap().contains("base58"));
    }

    #[test]
    fn key_resolver_resolves() {
        let result = Resolver::resolve(&KeyResolver, DID_KEY);
        assert!(result.is_ok());
        assert_eq!(result.did_document.unwrap().id, DID_KEY);
    }

    #[test]
    fn malformed_input_never_panics() {
        for input in [
            "", "did:key", "did:key:", "did:key:z", "did:key:zz", "did:key:🦀", "did:key:z🦀",
            "did:key:z1", "did:key:z11111111111111111111111111111111111111",
        ] {
            let result = Resolver::resolve(&KeyResolver, input);
            assert_eq!(result.error_code(), Some(&ResolutionError::InvalidDid), "{input}");
        }
    }
}
