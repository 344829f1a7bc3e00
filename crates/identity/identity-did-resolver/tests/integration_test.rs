use std::sync::Arc;

use identity_did_common::{Document, ResolutionError, ResolutionResult};
use identity_did_key::DIDKey;
use identity_did_registry::{DocumentUpdate, LocalRegistry};
use identity_did_resolver::{DIDResolverRegistry, config::ResolverConfigBuilder};
use identity_did_resolver_traits::{AsyncResolver, Resolver};
use identity_did_web::Scheme;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

const DID_PKH: &str = "did:pkh:eip155:1:0xab16a96D359eC26a11e2C2b3d8f8B8942d5Bfcdb";

fn registry() -> DIDResolverRegistry {
    DIDResolverRegistry::new_isolated(ResolverConfigBuilder::default().build()).unwrap()
}

#[tokio::test]
async fn malformed_dids_are_invalid() {
    let registry = registry();
    for did in [
        "garbage",
        "",
        "did",
        "did:",
        "did:key",
        "did::abc",
        "DID:key:z6Mk",
        "urn:uuid:1234",
        " did:key:z6Mk",
    ] {
        let result = registry.resolve(did).await;
        assert_eq!(result.error_code(), Some(&ResolutionError::InvalidDid), "{did:?}");
        assert!(result.did_document.is_none());
    }

    let result = registry.resolve("garbage").await;
    assert_eq!(result.message(), Some("Malformed DID: garbage"));
}

#[tokio::test]
async fn resolves_generated_did_key() {
    let registry = registry();
    let (did, signing_key) = DIDKey::generate();

    let result = registry.resolve(&did).await;
    assert!(result.is_ok());

    let doc = result.did_document.unwrap();
    assert_eq!(
        doc.verification_method[0].public_key_bytes().unwrap(),
        signing_key.verifying_key().to_bytes()
    );
}

#[tokio::test]
async fn resolves_did_pkh() {
    let result = registry().resolve(DID_PKH).await;
    assert!(result.is_ok());

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        value["didDocument"]["verificationMethod"][0]["blockchainAccountId"],
        json!("eip155:1:0xab16a96D359eC26a11e2C2b3d8f8B8942d5Bfcdb")
    );
    assert_eq!(
        value["didDocument"]["verificationMethod"][0]["type"],
        json!("BlockchainVerificationMethod2021")
    );

    let result = registry().resolve("did:pkh:eip155").await;
    assert_eq!(result.error_code(), Some(&ResolutionError::InvalidDid));
    assert!(result.message().unwrap().contains("CAIP-10"));
}

#[tokio::test]
async fn local_registry_fallback_lifecycle() {
    let local = Arc::new(LocalRegistry::new());
    let registry =
        DIDResolverRegistry::new(ResolverConfigBuilder::default().build(), Some(local.clone()))
            .unwrap();

    assert_eq!(
        registry.resolve("did:custom:abc123").await.error_code(),
        Some(&ResolutionError::NotFound)
    );

    local
        .register("did:custom:abc123", Document::new("did:custom:abc123"))
        .unwrap();
    let result = registry.resolve("did:custom:abc123").await;
    assert!(result.is_ok());
    assert!(result.did_document_metadata.created.is_some());

    local
        .update(
            "did:custom:abc123",
            DocumentUpdate {
                controller: Some(identity_did_common::one_or_many::OneOrMany::One(
                    "did:custom:admin".to_string(),
                )),
                ..Default::default()
            },
        )
        .unwrap();
    assert!(
        registry
            .resolve("did:custom:abc123")
            .await
            .did_document
            .unwrap()
            .controller
            .is_some()
    );

    local.deactivate("did:custom:abc123").unwrap();
    let result = registry.resolve("did:custom:abc123").await;
    assert_eq!(result.error_code(), Some(&ResolutionError::Deactivated));
    assert_eq!(result.did_document.unwrap().id, "did:custom:abc123");
}

#[tokio::test]
async fn method_resolvers_ignore_local_registry() {
    let registry = registry();
    // a registered did:key entry never shadows the key resolver
    let did = "did:key:z6MkUnknown";
    registry
        .local_registry()
        .register(did, Document::new(did))
        .unwrap();

    assert_eq!(
        registry.resolve(did).await.error_code(),
        Some(&ResolutionError::InvalidDid)
    );
}

struct CustomResolver;

impl Resolver for CustomResolver {
    fn name(&self) -> &str {
        "CustomResolver"
    }

    fn resolve(&self, did: &str) -> ResolutionResult {
        if did.ends_with(":known") {
            ResolutionResult::resolved(Document::new(did))
        } else {
            ResolutionResult::error(
                ResolutionError::Other("methodNotSupported".to_string()),
                "only :known",
            )
        }
    }
}

#[tokio::test]
async fn custom_method_registration() {
    let mut registry = registry();
    assert!(
        registry
            .register_method("custom", Arc::new(CustomResolver))
            .is_none()
    );

    assert_eq!(registry.list_methods(), vec!["custom", "key", "pkh", "web"]);
    assert_eq!(
        registry.get_method_resolver("custom").unwrap().name(),
        "CustomResolver"
    );

    assert!(registry.resolve("did:custom:known").await.is_ok());

    let result = registry.resolve("did:custom:other").await;
    assert_eq!(
        result.error_code(),
        Some(&ResolutionError::Other("methodNotSupported".to_string()))
    );
    assert_eq!(
        serde_json::to_value(&result.did_resolution_metadata).unwrap()["error"],
        json!("methodNotSupported")
    );
}

#[tokio::test]
async fn register_method_replaces_existing() {
    let mut registry = registry();
    let previous = registry.register_method("key", Arc::new(CustomResolver));
    assert_eq!(previous.unwrap().name(), "KeyResolver");
    assert!(registry.resolve("did:key:known").await.is_ok());
}

#[tokio::test]
async fn registry_is_an_async_resolver() {
    let registry: Arc<dyn AsyncResolver> = Arc::new(registry());
    assert_eq!(registry.name(), "DIDResolverRegistry");
    assert!(registry.resolve(DID_PKH).await.is_ok());
    assert_eq!(
        registry.resolve("garbage").await.error_code(),
        Some(&ResolutionError::InvalidDid)
    );
}

#[tokio::test]
async fn routes_did_web() {
    let server = MockServer::start().await;
    let did = format!("did:web:127.0.0.1%3A{}", server.address().port());

    Mock::given(method("GET"))
        .and(path("/.well-known/did.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "@context": ["https://www.w3.org/ns/did/v1"],
            "id": did
        })))
        .mount(&server)
        .await;

    let config = ResolverConfigBuilder::default()
        .with_web_scheme(Scheme::Http)
        .with_web_timeout(2000)
        .build();
    let registry = DIDResolverRegistry::new_isolated(config).unwrap();

    let result = registry.resolve(&did).await;
    assert!(result.is_ok(), "{:?}", result.did_resolution_metadata);
    assert_eq!(result.did_document.unwrap().id, did);
}

#[tokio::test]
async fn did_web_falls_back_when_disabled() {
    let config = ResolverConfigBuilder::default().with_web(false).build();
    let registry = DIDResolverRegistry::new_isolated(config).unwrap();

    let did = "did:web:example.com";
    assert_eq!(
        registry.resolve(did).await.error_code(),
        Some(&ResolutionError::NotFound)
    );

    registry
        .local_registry()
        .register(did, Document::new(did))
        .unwrap();
    assert!(registry.resolve(did).await.is_ok());
}

#[test]
fn shared_instances() {
    identity_did_resolver::reset_shared();
    identity_did_registry::reset_shared();

    let a = identity_did_resolver::shared().unwrap();
    let b = identity_did_resolver::shared().unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert!(Arc::ptr_eq(a.local_registry(), &identity_did_registry::shared()));

    identity_did_resolver::reset_shared();
    let c = identity_did_resolver::shared().unwrap();
    assert!(!Arc::ptr_eq(&a, &c));
}
