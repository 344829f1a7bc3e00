/*!
 * Minimal did:web resolver.
 *
 * Fetches `did.json` over HTTP(S) with a single bounded GET and checks the
 * returned document is for the requested DID. Every failure is reported in
 * the resolution metadata, never as a panic.
 */

use std::{future::Future, pin::Pin, time::Duration};

use identity_did_common::{Document, ResolutionResult};
use identity_did_resolver_traits::AsyncResolver;
use reqwest::Client;
use tracing::{debug, warn};

pub mod errors;
pub mod url;

pub use errors::DIDWebError;
pub use crate::url::{DID_WEB_PREFIX, Scheme, did_to_url};

/// Default network timeout for a did:web fetch
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebResolverConfig {
    /// Upper bound on the whole request (connect + response body)
    pub timeout: Duration,
    /// `https` everywhere except local testing
    pub scheme: Scheme,
}

impl Default for WebResolverConfig {
    fn default() -> Self {
        WebResolverConfig {
            timeout: DEFAULT_TIMEOUT,
            scheme: Scheme::Https,
        }
    }
}

/// did:web resolver. Holds only its own HTTP client; no state is shared
/// with other resolvers while a request is in flight.
#[derive(Clone)]
pub struct WebResolver {
    client: Client,
    config: WebResolverConfig,
}

impl WebResolver {
    pub fn new(config: WebResolverConfig) -> Result<Self, DIDWebError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DIDWebError::ClientBuild(e.to_string()))?;

        Ok(WebResolver { client, config })
    }

    pub fn config(&self) -> &WebResolverConfig {
        &self.config
    }

    fn map_request_error(&self, url: &str, e: reqwest::Error) -> DIDWebError {
        if e.is_timeout() {
            DIDWebError::Timeout(url.to_string(), self.config.timeout.as_millis())
        } else {
            DIDWebError::Network(url.to_string(), e.to_string())
        }
    }

    /// Fetches and validates the DID Document for a did:web DID
    pub async fn resolve_document(&self, did: &str) -> Result<Document, DIDWebError> {
        let url = did_to_url(did, self.config.scheme)?;
        debug!("resolving did:web ({did}) from ({url})");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.map_request_error(url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DIDWebError::HttpStatus(url.to_string(), status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_request_error(url.as_str(), e))?;

        let document: Document = serde_json::from_str(&body)
            .map_err(|e| DIDWebError::InvalidDocument(url.to_string(), e.to_string()))?;

        if document.id != did {
            return Err(DIDWebError::IdMismatch {
                expected: did.to_string(),
                found: document.id,
            });
        }

        Ok(document)
    }
}

impl AsyncResolver for WebResolver {
    fn name(&self) -> &str {
        "WebResolver"
    }

    fn resolve<'a>(
        &'a self,
        did: &'a str,
    ) -> Pin<Box<dyn Future<Output = ResolutionResult> + Send + 'a>> {
        Box::pin(async move {
            match self.resolve_document(did).await {
                Ok(doc) => ResolutionResult::resolved(doc),
                Err(e) => {
                    warn!("did:web resolution of ({did}) failed: {e}");
                    ResolutionResult::error(e.resolution_error(), e.to_string())
                }
            }
        })
    }
}
