//! https://www.w3.org/TR/did-core/#services

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,

    #[serde(rename = "type")]
    pub type_: String,

    /// serviceEndpoint
    pub service_endpoint: Endpoint,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
}

/// Service Endpoint definitions
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Endpoint {
    /// Single String (URL)
    Url(Url),

    /// Can be either a Map or a Set of Strings/Maps
    Map(Value),
}

impl Endpoint {
    /// Returns the URI String for a service Endpoint, if available
    pub fn get_uri(&self) -> Option<String> {
        match self {
            Endpoint::Url(uri) => Some(uri.to_string()),
            Endpoint::Map(map) => map
                .get("uri")
                .and_then(|uri| uri.as_str())
                .map(|s| s.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn url_endpoint() {
        let service: Service = serde_json::from_value(json!({
            "id": "did:example:123#linked-domain",
            "type": "LinkedDomains",
            "serviceEndpoint": "https://bar.example.com/"
        }))
        .unwrap();
        assert!(matches!(service.service_endpoint, Endpoint::Url(_)));
        assert_eq!(
            service.service_endpoint.get_uri().as_deref(),
            Some("https://bar.example.com/")
        );
        assert_eq!(service.description, None);
    }

    #[test]
    fn map_endpoint() {
        let service: Service = serde_json::from_value(json!({
            "id": "did:example:123#dm",
            "type": "DIDCommMessaging",
            "serviceEndpoint": { "uri": "https://mediator.example.com", "accept": ["didcomm/v2"] },
            "description": "Mediator"
        }))
        .unwrap();
        assert!(matches!(service.service_endpoint, Endpoint::Map(_)));
        assert_eq!(
            service.service_endpoint.get_uri().as_deref(),
            Some("https://mediator.example.com")
        );
        assert_eq!(service.description.as_deref(), Some("Mediator"));
    }

    #[test]
    fn map_endpoint_without_uri() {
        let endpoint = Endpoint::Map(json!(["https://a.example.com", "https://b.example.com"]));
        assert_eq!(endpoint.get_uri(), None);
    }
}
