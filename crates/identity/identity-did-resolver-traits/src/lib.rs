/*!
 * Pluggable DID resolution traits.
 *
 * Provides [`Resolver`] (sync) and [`AsyncResolver`] (async) traits for
 * decoupling DID resolution from concrete types. External consumers implement
 * these traits for custom DID methods; the resolver registry composes them
 * with the built-in resolvers.
 *
 * Every [`Resolver`] is automatically an [`AsyncResolver`] via blanket impl,
 * so the registry only needs `Arc<dyn AsyncResolver>` for composition.
 *
 * # Return Convention
 *
 * Resolvers always return a [`ResolutionResult`]. Malformed input is reported
 * through `didResolutionMetadata.error`, never by panicking.
 */

use std::future::Future;
use std::pin::Pin;

use identity_did_common::ResolutionResult;

/// Synchronous DID resolver for methods that require no IO.
///
/// Implement this for methods where resolution is pure computation
/// (e.g., `did:key`, `did:pkh`). Every `Resolver` is automatically
/// an [`AsyncResolver`] via blanket impl.
pub trait Resolver: Send + Sync {
    /// Human-readable name for this resolver (e.g., `"KeyResolver"`).
    fn name(&self) -> &str;

    /// Resolve the given DID string.
    fn resolve(&self, did: &str) -> ResolutionResult;
}

/// Asynchronous DID resolver for methods that require IO.
///
/// Implement this directly for methods that need network access,
/// database lookups, or other async operations (e.g., `did:web`).
///
/// Sync resolvers get this for free via the blanket impl.
///
/// This trait is dyn-compatible: the registry stores resolvers as
/// `Arc<dyn AsyncResolver>`.
pub trait AsyncResolver: Send + Sync {
    /// Human-readable name for this resolver (e.g., `"WebResolver"`).
    fn name(&self) -> &str;

    /// Resolve the given DID string.
    fn resolve<'a>(
        &'a self,
        did: &'a str,
    ) -> Pin<Box<dyn Future<Output = ResolutionResult> + Send + 'a>>;
}

/// Every sync [`Resolver`] is automatically an [`AsyncResolver`].
impl<T: Resolver> AsyncResolver for T {
    fn name(&self) -> &str {
        Resolver::name(self)
    }

    fn resolve<'a>(
        &'a self,
        did: &'a str,
    ) -> Pin<Box<dyn Future<Output = ResolutionResult> + Send + 'a>> {
        Box::pin(std::future::ready(Resolver::resolve(self, did)))
    }
}
