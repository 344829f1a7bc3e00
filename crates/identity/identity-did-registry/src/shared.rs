//! Process-wide registry instance

use std::sync::{Arc, PoisonError, RwLock};

use crate::LocalRegistry;

static SHARED: RwLock<Option<Arc<LocalRegistry>>> = RwLock::new(None);

/// Returns the process-wide registry, creating it on first use
pub fn shared() -> Arc<LocalRegistry> {
    if let Some(registry) = SHARED.read().unwrap_or_else(PoisonError::into_inner).as_ref() {
        return registry.clone();
    }

    SHARED
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(|| Arc::new(LocalRegistry::new()))
        .clone()
}

/// Drops the process-wide registry; the next [`shared`] call starts empty.
/// Handles obtained earlier keep working on the old instance.
pub fn reset_shared() {
    SHARED.write().unwrap_or_else(PoisonError::into_inner).take();
}
