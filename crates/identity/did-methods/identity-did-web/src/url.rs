//! did:web to HTTP(S) URL translation

use std::fmt::{Display, Formatter};

use percent_encoding::percent_decode_str;
use url::Url;

use crate::errors::DIDWebError;

pub const DID_WEB_PREFIX: &str = "did:web:";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scheme {
    Http,
    #[default]
    Https,
}

impl Display for Scheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Scheme::Http => write!(f, "http"),
            Scheme::Https => write!(f, "https"),
        }
    }
}

fn invalid(did: &str, reason: impl Into<String>) -> DIDWebError {
    DIDWebError::InvalidDid(did.to_string(), reason.into())
}

/// Converts a did:web DID into the URL of its DID Document.
///
/// The first segment is the (percent-encoded) host, remaining colon
/// delimited segments form the path. No path means `/.well-known/did.json`.
pub fn did_to_url(did: &str, scheme: Scheme) -> Result<Url, DIDWebError> {
    let Some(method_specific_id) = did.strip_prefix(DID_WEB_PREFIX) else {
        return Err(invalid(did, "DID doesn't start with did:web:"));
    };

    let mut segments = method_specific_id.split(':');
    let host = segments.next().unwrap_or_default();
    if host.is_empty() {
        return Err(invalid(did, "missing domain"));
    }

    let host = percent_decode_str(host)
        .decode_utf8()
        .map_err(|e| invalid(did, format!("domain isn't valid UTF-8: {e}")))?;
    if host.contains(['/', '?', '#', '@', '\\']) {
        return Err(invalid(did, format!("domain ({host}) contains reserved characters")));
    }

    let mut path = String::new();
    for segment in segments {
        if segment.is_empty() {
            return Err(invalid(did, "empty path segment"));
        }
        if segment.contains(['/', '?', '#', '\\']) {
            return Err(invalid(
                did,
                format!("path segment ({segment}) contains reserved characters"),
            ));
        }
        path.push('/');
        path.push_str(segment);
    }
    if path.is_empty() {
        path.push_str("/.well-known");
    }
    path.push_str("/did.json");

    Url::parse(&format!("{scheme}://{host}{path}"))
        .map_err(|e| invalid(did, format!("Invalid URL: {e}")))
}
