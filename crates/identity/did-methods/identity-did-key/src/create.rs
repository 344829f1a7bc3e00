use ed25519_dalek::SigningKey;
use identity_encoding::{ED25519_PUB, encode_multikey};
use rand_core::OsRng;

use crate::{DID_KEY_PREFIX, DIDKey};

impl DIDKey {
    /// Builds the did:key identifier for a raw Ed25519 public key
    pub fn from_ed25519_public_key(public_key: &[u8; 32]) -> String {
        [DID_KEY_PREFIX, &encode_multikey(ED25519_PUB, public_key)].concat()
    }

    /// Generates a fresh Ed25519 key pair and returns its did:key with the signing key
    pub fn generate() -> (String, SigningKey) {
        let signing_key = SigningKey::generate(&mut OsRng);
        let did = Self::from_ed25519_public_key(signing_key.verifying_key().as_bytes());
        (did, signing_key)
    }
}
