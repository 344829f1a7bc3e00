//! Implementation of the did:pkh method
//! [https://github.com/w3c-ccg/did-pkh/blob/main/did-pkh-method-draft.md]
//!
//! The method specific id is a CAIP-10 account id, used verbatim as the
//! `blockchainAccountId` of the single verification method.

use crate::errors::Error;
use identity_did_common::{
    Document, ResolutionResult,
    verification_method::{
        BLOCKCHAIN_VERIFICATION_METHOD_2021, KeyRepresentation, VerificationMethod,
    },
};
use identity_did_resolver_traits::Resolver;
use tracing::debug;

pub mod account;
pub mod errors;

pub use account::AccountId;

pub const DID_PKH_PREFIX: &str = "did:pkh:";

pub struct DIDPkh;

impl DIDPkh {
    /// Resolves a did:pkh DID and returns a DID Document or error
    pub fn resolve(did: &str) -> Result<Document, Error> {
        let Some(account_id) = did.strip_prefix(DID_PKH_PREFIX) else {
            return Err(Error::InvalidDid(
                did.to_string(),
                "DID doesn't start with did:pkh:".to_string(),
            ));
        };

        if account_id.is_empty() {
            return Err(Error::InvalidDid(
                did.to_string(),
                "missing CAIP-10 account id".to_string(),
            ));
        }

        AccountId::parse(account_id)?;

        let key_id = [did, "#blockchainAccountId"].concat();

        Ok(Document {
            verification_method: vec![VerificationMethod {
                id: key_id.clone(),
                type_: BLOCKCHAIN_VERIFICATION_METHOD_2021.to_string(),
                controller: did.to_string(),
                key: KeyRepresentation::BlockchainAccountId(account_id.to_string()),
            }],
            authentication: vec![key_id.clone()],
            assertion_method: vec![key_id],
            ..Document::new(did)
        })
    }
}

/// Resolver for `did:pkh`. Pure computation, no IO.
pub struct PkhResolver;

impl Resolver for PkhResolver {
    fn name(&self) -> &str {
        "PkhResolver"
    }

    fn resolve(&self, did: &str) -> ResolutionResult {
        match DIDPkh::resolve(did) {
            Ok(doc) => ResolutionResult::resolved(doc),
            Err(e) => {
                debug!("did:pkh resolution of ({did}) failed: {e}");
                ResolutionResult::invalid_did(e.to_string())
            }
        }
    }
}
