//! Lookup helpers over a DID Document

use crate::{Document, service::Service, verification_method::VerificationMethod};

pub trait DocumentExt {
    /// Does this Document reference the given verification method id for authentication?
    fn contains_authentication(&self, id: &str) -> bool;

    /// Does this Document reference the given verification method id for assertions?
    fn contains_assertion_method(&self, id: &str) -> bool;

    /// Returns a DID Verification Method if found by ID
    fn get_verification_method(&self, id: &str) -> Option<&VerificationMethod>;

    /// Returns the first service whose id ends with `#<fragment>`
    fn find_service(&self, fragment: &str) -> Option<&Service>;
}

impl DocumentExt for Document {
    fn contains_authentication(&self, id: &str) -> bool {
        self.authentication.iter().any(|r| r == id)
    }

    fn contains_assertion_method(&self, id: &str) -> bool {
        self.assertion_method.iter().any(|r| r == id)
    }

    fn get_verification_method(&self, id: &str) -> Option<&VerificationMethod> {
        self.verification_method.iter().find(|vm| vm.id == id)
    }

    fn find_service(&self, fragment: &str) -> Option<&Service> {
        let suffix = ["#", fragment].concat();
        self.service.iter().find(|s| s.id.ends_with(&suffix))
    }
}
