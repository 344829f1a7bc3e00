//! Handles the configuration for the DID Resolver Registry.
//!
//! Call the [ResolverConfigBuilder] to create a new configuration.
//!
//! Example: defaults
//! ```rust
//! use identity_did_resolver::config::ResolverConfigBuilder;
//! let config = ResolverConfigBuilder::default().build();
//! ```
//!
//! Example: custom settings
//! ```rust
//! use identity_did_resolver::config::ResolverConfigBuilder;
//! let config = ResolverConfigBuilder::default()
//!     .with_web_timeout(2000)
//!     .with_max_did_size_in_bytes(512)
//!     .build();
//! ```

use std::time::Duration;

use identity_did_web::{Scheme, WebResolverConfig};

/// Configuration for the DID Resolver Registry.
///
/// Use the [ResolverConfigBuilder] to create a new configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolverConfig {
    pub(crate) web_timeout: Duration,
    pub(crate) web_scheme: Scheme,
    pub(crate) max_did_size_in_bytes: usize,
    pub(crate) enable_web: bool,
}

impl ResolverConfig {
    pub fn web_timeout(&self) -> Duration {
        self.web_timeout
    }

    pub fn web_scheme(&self) -> Scheme {
        self.web_scheme
    }

    pub fn max_did_size_in_bytes(&self) -> usize {
        self.max_did_size_in_bytes
    }

    pub fn enable_web(&self) -> bool {
        self.enable_web
    }

    /// Settings handed to the did:web resolver
    pub fn web_resolver_config(&self) -> WebResolverConfig {
        WebResolverConfig {
            timeout: self.web_timeout,
            scheme: self.web_scheme,
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfigBuilder::default().build()
    }
}

/// Resolver Config Builder to construct options for the registry.
///
/// - web_timeout: timeout for did:web requests in milliseconds (default: 5000 (5 seconds)).
/// - web_scheme: scheme used for did:web requests (default: https).
/// - max_did_size_in_bytes: longer DIDs are rejected as invalid (default: 1_000).
/// - enable_web: register the did:web resolver (default: true).
pub struct ResolverConfigBuilder {
    web_timeout: u32,
    web_scheme: Scheme,
    max_did_size_in_bytes: usize,
    enable_web: bool,
}

impl Default for ResolverConfigBuilder {
    fn default() -> Self {
        Self {
            web_timeout: 5000,
            web_scheme: Scheme::Https,
            max_did_size_in_bytes: 1_000,
            enable_web: true,
        }
    }
}

impl ResolverConfigBuilder {
    /// Set the timeout for did:web requests in milliseconds.
    /// Default: 5000 (5 seconds)
    pub fn with_web_timeout(mut self, web_timeout: u32) -> Self {
        self.web_timeout = web_timeout;
        self
    }

    /// Fetch did:web documents over plain HTTP. Only useful for local testing.
    pub fn with_web_scheme(mut self, web_scheme: Scheme) -> Self {
        self.web_scheme = web_scheme;
        self
    }

    /// Set maximum size in bytes of did to be resolved
    /// Default: 1_000 bytes
    pub fn with_max_did_size_in_bytes(mut self, max_did_size_in_bytes: usize) -> Self {
        self.max_did_size_in_bytes = max_did_size_in_bytes;
        self
    }

    /// Enable or disable the built in did:web resolver.
    /// When disabled, did:web DIDs fall back to the local registry.
    pub fn with_web(mut self, enable_web: bool) -> Self {
        self.enable_web = enable_web;
        self
    }

    /// Build the [ResolverConfig].
    pub fn build(self) -> ResolverConfig {
        ResolverConfig {
            web_timeout: Duration::from_millis(self.web_timeout.into()),
            web_scheme: self.web_scheme,
            max_did_size_in_bytes: self.max_did_size_in_bytes,
            enable_web: self.enable_web,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ResolverConfigBuilder::default().build();
        assert_eq!(config.web_timeout(), Duration::from_secs(5));
        assert_eq!(config.web_scheme(), Scheme::Https);
        assert_eq!(config.max_did_size_in_bytes(), 1_000);
        assert!(config.enable_web());
        assert_eq!(config, ResolverConfig::default());
    }

    #[test]
    fn custom() {
        let config = ResolverConfigBuilder::default()
            .with_web_timeout(250)
            .with_web_scheme(Scheme::Http)
            .with_max_did_size_in_bytes(64)
            .with_web(false)
            .build();

        assert_eq!(
            config.web_resolver_config(),
            WebResolverConfig {
                timeout: Duration::from_millis(250),
                scheme: Scheme::Http,
            }
        );
        assert_eq!(config.max_did_size_in_bytes(), 64);
        assert!(!config.enable_web());
    }
}
