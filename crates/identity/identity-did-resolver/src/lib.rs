/*!
 * DID Resolver Registry
 *
 * Routes a DID to the resolver registered for its method. DIDs whose method
 * has no resolver fall back to the Local DID Registry, so locally issued
 * identifiers of any method resolve without a dedicated resolver.
 *
 * `key` and `pkh` are always registered; `web` unless disabled in the
 * [config::ResolverConfig].
 */

use std::{future::Future, pin::Pin, sync::Arc};

use ahash::AHashMap as HashMap;
use config::ResolverConfig;
use errors::ResolverRegistryError;
use identity_did_common::{ResolutionResult, parse};
use identity_did_key::KeyResolver;
use identity_did_pkh::PkhResolver;
use identity_did_registry::LocalRegistry;
use identity_did_resolver_traits::AsyncResolver;
use identity_did_web::WebResolver;
use tracing::debug;

pub mod config;
pub mod errors;
pub mod shared;

pub use shared::{reset_shared, shared};

/// [DIDResolverRegistry] is the single entry point for resolving DIDs
/// config: Configuration for the registry
/// resolvers: method name to resolver map
/// local_registry: fallback for methods without a resolver
pub struct DIDResolverRegistry {
    config: ResolverConfig,
    resolvers: HashMap<String, Arc<dyn AsyncResolver>>,
    local_registry: Arc<LocalRegistry>,
}

impl DIDResolverRegistry {
    /// Creates a registry with the built in method resolvers.
    ///
    /// `local_registry` defaults to the process-wide [identity_did_registry::shared] instance.
    /// Fails only if the did:web HTTP client can't be built.
    pub fn new(
        config: ResolverConfig,
        local_registry: Option<Arc<LocalRegistry>>,
    ) -> Result<Self, ResolverRegistryError> {
        let local_registry = local_registry.unwrap_or_else(identity_did_registry::shared);

        let mut registry = DIDResolverRegistry {
            config,
            resolvers: HashMap::new(),
            local_registry,
        };

        registry.register_method("key", Arc::new(KeyResolver));
        registry.register_method("pkh", Arc::new(PkhResolver));
        if registry.config.enable_web {
            let web = WebResolver::new(registry.config.web_resolver_config())?;
            registry.register_method("web", Arc::new(web));
        }

        Ok(registry)
    }

    /// Creates a registry backed by its own empty [LocalRegistry], sharing no state
    /// with the process-wide instances
    pub fn new_isolated(config: ResolverConfig) -> Result<Self, ResolverRegistryError> {
        Self::new(config, Some(Arc::new(LocalRegistry::new())))
    }

    /// Resolves a DID.
    ///
    /// Malformed or oversized DIDs are `invalidDid`. Otherwise the result of
    /// the method resolver (or the local registry) is returned as is.
    pub async fn resolve(&self, did: &str) -> ResolutionResult {
        // If DID's size is greater than the limit we don't resolve it
        if did.len() > self.config.max_did_size_in_bytes {
            return ResolutionResult::invalid_did(format!(
                "The DID size of {}bytes exceeds the limit of {}",
                did.len(),
                self.config.max_did_size_in_bytes
            ));
        }

        let Some(parsed) = parse(did) else {
            debug!("malformed DID ({did})");
            return ResolutionResult::invalid_did(format!("Malformed DID: {did}"));
        };

        match self.resolvers.get(parsed.method()) {
            Some(resolver) => {
                debug!("resolving did ({did}) with ({})", resolver.name());
                resolver.resolve(did).await
            }
            None => {
                debug!(
                    "no resolver for method ({}), falling back to local registry for did ({did})",
                    parsed.method()
                );
                self.local_registry.resolve(did)
            }
        }
    }

    /// Adds or replaces the resolver for `method`. Returns the replaced resolver, if any.
    ///
    /// Intended for startup; the registry is immutable once shared.
    pub fn register_method(
        &mut self,
        method: &str,
        resolver: Arc<dyn AsyncResolver>,
    ) -> Option<Arc<dyn AsyncResolver>> {
        debug!("registering resolver ({}) for method ({method})", resolver.name());
        self.resolvers.insert(method.to_string(), resolver)
    }

    /// Methods with a registered resolver, sorted
    pub fn list_methods(&self) -> Vec<String> {
        let mut methods: Vec<String> = self.resolvers.keys().cloned().collect();
        methods.sort();
        methods
    }

    pub fn get_method_resolver(&self, method: &str) -> Option<Arc<dyn AsyncResolver>> {
        self.resolvers.get(method).cloned()
    }

    /// The fallback registry, also used to register locally issued DIDs
    pub fn local_registry(&self) -> &Arc<LocalRegistry> {
        &self.local_registry
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }
}

impl AsyncResolver for DIDResolverRegistry {
    fn name(&self) -> &str {
        "DIDResolverRegistry"
    }

    fn resolve<'a>(
        &'a self,
        did: &'a str,
    ) -> Pin<Box<dyn Future<Output = ResolutionResult> + Send + 'a>> {
        Box::pin(DIDResolverRegistry::resolve(self, did))
    }
}
