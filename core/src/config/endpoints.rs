//! Agent gateway endpoint configuration

use serde::{Deserialize, Serialize};

/// A reachable agent gateway endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    /// Unique name for this endpoint (used for selection)
    pub name: String,

    /// Full URL the question payload is POSTed to
    #[serde(default = "default_url")]
    pub url: String,

    /// Transport-level request timeout in seconds.
    ///
    /// The lifecycle itself never times a pending request out; when this
    /// fires it surfaces as an ordinary transport failure.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_url() -> String {
    "http://localhost:8787/agent".to_string()
}

fn default_timeout() -> u64 {
    60
}

impl EndpointConfig {
    /// Endpoint for a locally running agent backend.
    pub fn local_default() -> Self {
        Self {
            name: "local".to_string(),
            url: default_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self::local_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_defaults() {
        let endpoint = EndpointConfig::default();
        assert_eq!(endpoint.name, "local");
        assert!(endpoint.url.contains("localhost"));
        assert_eq!(endpoint.timeout_seconds, 60);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let endpoint: EndpointConfig = serde_yml::from_str("name: staging").unwrap();
        assert_eq!(endpoint.name, "staging");
        assert_eq!(endpoint.url, "http://localhost:8787/agent");
        assert_eq!(endpoint.timeout_seconds, 60);
    }
}
