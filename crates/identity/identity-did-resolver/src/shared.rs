//! Process-wide resolver registry instance

use std::sync::{Arc, PoisonError, RwLock};

use crate::{DIDResolverRegistry, config::ResolverConfig, errors::ResolverRegistryError};

static SHARED: RwLock<Option<Arc<DIDResolverRegistry>>> = RwLock::new(None);

/// Returns the process-wide resolver registry, creating it on first use with
/// the default configuration and the process-wide local registry.
pub fn shared() -> Result<Arc<DIDResolverRegistry>, ResolverRegistryError> {
    if let Some(registry) = SHARED.read().unwrap_or_else(PoisonError::into_inner).as_ref() {
        return Ok(registry.clone());
    }

    let mut guard = SHARED.write().unwrap_or_else(PoisonError::into_inner);
    if let Some(registry) = guard.as_ref() {
        return Ok(registry.clone());
    }

    let registry = Arc::new(DIDResolverRegistry::new(ResolverConfig::default(), None)?);
    *guard = Some(registry.clone());
    Ok(registry)
}

/// Drops the process-wide resolver registry; the next [`shared`] call rebuilds it.
pub fn reset_shared() {
    SHARED.write().unwrap_or_else(PoisonError::into_inner).take();
}
