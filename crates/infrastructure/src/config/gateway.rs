//! Provider gateway configuration: where provider operations are executed.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// HTTP gateway fronting every provider
#[derive(Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base URL; operations are served under `{base_url}/{provider}/{operation}`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token for the gateway (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Bound on a single provider call in milliseconds (default: 30000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

pub(super) fn default_base_url() -> String {
    "http://localhost:8042".to_string()
}

pub(super) const fn default_timeout_ms() -> u64 {
    30_000
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl GatewayConfig {
    /// The API key as a string reference (for request headers)
    #[must_use]
    pub fn api_key_str(&self) -> Option<&str> {
        self.api_key.as_ref().map(ExposeSecret::expose_secret)
    }

    /// Per-call timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.base_url, "http://localhost:8042");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.api_key_str().is_none());
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = GatewayConfig {
            api_key: Some(SecretString::from("super-secret".to_owned())),
            ..GatewayConfig::default()
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn api_key_is_never_serialized() {
        let config = GatewayConfig {
            api_key: Some(SecretString::from("super-secret".to_owned())),
            ..GatewayConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("api_key"));
    }
}
