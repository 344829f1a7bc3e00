/*!
 * Local DID Registry
 *
 * Stores self-issued DID Documents in memory alongside their registry
 * metadata. Deactivation is a soft delete: the document is kept and still
 * resolves, flagged as deactivated.
 */

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use ahash::AHashMap as HashMap;
use chrono::{DateTime, Utc};
use identity_did_common::{Document, DocumentMetadata, ResolutionResult};
use identity_did_resolver_traits::Resolver;
use tracing::debug;

pub mod errors;
pub mod shared;
pub mod update;

pub use errors::RegistryError;
pub use shared::{reset_shared, shared};
pub use update::DocumentUpdate;

/// Registry bookkeeping kept beside (not inside) each document
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegistryMetadata {
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub deactivated: bool,
}

impl From<RegistryMetadata> for DocumentMetadata {
    fn from(metadata: RegistryMetadata) -> Self {
        DocumentMetadata {
            created: Some(metadata.created),
            updated: Some(metadata.updated),
            deactivated: Some(metadata.deactivated),
        }
    }
}

#[derive(Clone, Debug)]
struct Entry {
    document: Document,
    metadata: RegistryMetadata,
}

#[derive(Debug, Default)]
pub struct LocalRegistry {
    entries: RwLock<HashMap<String, Entry>>,
}

impl LocalRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        LocalRegistry {
            entries: RwLock::new(HashMap::new()),
        }
    }

    // A writer that panicked can't leave an entry half written, so poisoned
    // locks are recovered
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Entry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Entry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores `document` under `did`. The document id is forced to `did` and
    /// `created`/`updated` are set to now.
    /// Returns the document as stored.
    pub fn register(&self, did: &str, mut document: Document) -> Result<Document, RegistryError> {
        let mut entries = self.write();
        if entries.contains_key(did) {
            return Err(RegistryError::AlreadyExists(did.to_string()));
        }

        let now = Utc::now();
        document.id = did.to_string();
        document.created = Some(now);
        document.updated = Some(now);

        entries.insert(
            did.to_string(),
            Entry {
                document: document.clone(),
                metadata: RegistryMetadata {
                    created: now,
                    updated: now,
                    deactivated: false,
                },
            },
        );
        debug!("registered DID ({did})");

        Ok(document)
    }

    /// Resolves a registered DID.
    /// Deactivated DIDs still return their document, flagged `deactivated`.
    pub fn resolve(&self, did: &str) -> ResolutionResult {
        let entries = self.read();
        let Some(entry) = entries.get(did) else {
            return ResolutionResult::not_found(format!("DID ({did}) not found in local registry"));
        };

        if entry.metadata.deactivated {
            ResolutionResult::deactivated(entry.document.clone(), entry.metadata.into())
        } else {
            ResolutionResult::resolved_with_metadata(entry.document.clone(), entry.metadata.into())
        }
    }

    /// Merges `update` into the stored document and bumps `updated`.
    /// The document id is never changed.
    pub fn update(&self, did: &str, update: DocumentUpdate) -> Result<Document, RegistryError> {
        let mut entries = self.write();
        let Some(entry) = entries.get_mut(did) else {
            return Err(RegistryError::NotFound(did.to_string()));
        };
        if entry.metadata.deactivated {
            return Err(RegistryError::Deactivated(did.to_string()));
        }

        let now = Utc::now();
        update.apply(&mut entry.document);
        entry.document.updated = Some(now);
        entry.metadata.updated = now;
        debug!("updated DID ({did})");

        Ok(entry.document.clone())
    }

    /// Soft deletes a DID. Calling it again leaves the DID deactivated.
    pub fn deactivate(&self, did: &str) -> Result<(), RegistryError> {
        let mut entries = self.write();
        let Some(entry) = entries.get_mut(did) else {
            return Err(RegistryError::NotFound(did.to_string()));
        };

        let now = Utc::now();
        entry.metadata.deactivated = true;
        entry.metadata.updated = now;
        entry.document.updated = Some(now);
        debug!("deactivated DID ({did})");

        Ok(())
    }

    /// All registered DIDs (including deactivated ones), sorted
    pub fn list(&self) -> Vec<String> {
        let mut dids: Vec<String> = self.read().keys().cloned().collect();
        dids.sort();
        dids
    }

    pub fn metadata(&self, did: &str) -> Option<RegistryMetadata> {
        self.read().get(did).map(|entry| entry.metadata)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl Resolver for LocalRegistry {
    fn name(&self) -> &str {
        "LocalRegistry"
    }

    fn resolve(&self, did: &str) -> ResolutionResult {
        LocalRegistry::resolve(self, did)
    }
}
