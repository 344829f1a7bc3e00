use identity_did_common::{
    Document, one_or_many::OneOrMany, service::Service, verification_method::VerificationMethod,
};
use serde::Deserialize;

/// Partial DID Document used by [`crate::LocalRegistry::update`].
///
/// Each `Some` field replaces the stored one. `id` and the timestamps are
/// owned by the registry and can't be set here.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentUpdate {
    #[serde(rename = "@context")]
    pub context: Option<Vec<String>>,
    pub controller: Option<OneOrMany<String>>,
    pub verification_method: Option<Vec<VerificationMethod>>,
    pub authentication: Option<Vec<String>>,
    pub assertion_method: Option<Vec<String>>,
    pub key_agreement: Option<Vec<String>>,
    pub service: Option<Vec<Service>>,
}

impl DocumentUpdate {
    pub(crate) fn apply(self, document: &mut Document) {
        if let Some(context) = self.context {
            document.context = context;
        }
        if let Some(controller) = self.controller {
            document.controller = Some(controller);
        }
        if let Some(verification_method) = self.verification_method {
            document.verification_method = verification_method;
        }
        if let Some(authentication) = self.authentication {
            document.authentication = authentication;
        }
        if let Some(assertion_method) = self.assertion_method {
            document.assertion_method = assertion_method;
        }
        if let Some(key_agreement) = self.key_agreement {
            document.key_agreement = key_agreement;
        }
        if let Some(service) = self.service {
            document.service = service;
        }
    }
}
