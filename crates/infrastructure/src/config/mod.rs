//! Application configuration
//!
//! Split into focused sub-modules:
//! - `gateway`: where provider operations are executed
//! - `catalog`: enabled providers and refresh cadence
//! - `preferences`: fallback order overrides
//!
//! Telemetry settings live next to the subscriber setup in
//! [`crate::telemetry`].

mod catalog;
mod gateway;
mod preferences;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use catalog::CatalogConfig;
pub use gateway::GatewayConfig;
pub use preferences::PreferencesConfig;

use crate::telemetry::TelemetryConfig;

/// Prefix of environment variable overrides, e.g. `LANGTOOLS_GATEWAY__BASE_URL`
pub const ENV_PREFIX: &str = "LANGTOOLS";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Provider gateway configuration
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Capability catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Fallback order overrides
    #[serde(default)]
    pub preferences: PreferencesConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config.toml"))
    }

    /// Load configuration from the given file (if present) and the environment
    ///
    /// Later sources override earlier ones: built-in defaults, then the
    /// file, then `LANGTOOLS_*` variables with `__` between sections.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("gateway.base_url", gateway::default_base_url())?
            .set_default("gateway.timeout_ms", gateway::default_timeout_ms())?
            // Load from file if exists
            .add_source(config::File::from(path).required(false))
            // Override with environment variables (e.g., LANGTOOLS_GATEWAY__TIMEOUT_MS)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Reject settings that would make every request fail
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.gateway.timeout_ms == 0 {
            return Err(invalid("gateway.timeout_ms must be greater than zero"));
        }
        if self.catalog.manifest_path.is_none() && self.gateway.base_url.trim().is_empty() {
            return Err(invalid("gateway.base_url must be set when no manifest is configured"));
        }
        if self.catalog.providers.is_empty() {
            return Err(invalid("catalog.providers must name at least one provider"));
        }
        if let Some((kind, _)) = self
            .preferences
            .overrides()
            .find(|(_, order)| order.is_empty())
        {
            return Err(invalid(format!(
                "preferences for {kind} must not be empty; remove the key to keep the defaults"
            )));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> config::ConfigError {
    config::ConfigError::Message(message.into())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use domain::Provider;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.gateway.timeout_ms, 30_000);
        assert_eq!(config.telemetry.log_filter, "info");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_from(Path::new("/nonexistent/langtools.toml")).unwrap();
        assert_eq!(config.gateway.base_url, "http://localhost:8042");
        assert_eq!(config.catalog.providers.len(), Provider::all().len());
    }

    #[test]
    fn file_values_override_defaults() {
        let file = write_config(
            r#"
            [gateway]
            base_url = "https://gateway.example.com"
            timeout_ms = 5000

            [catalog]
            providers = ["DeepL", "Azure"]
            refresh_interval_secs = 0

            [preferences]
            translation = ["Azure", "DeepL"]

            [telemetry]
            json = true
            "#,
        );

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.gateway.base_url, "https://gateway.example.com");
        assert_eq!(config.gateway.timeout_ms, 5000);
        assert_eq!(config.catalog.providers, vec![Provider::DeepL, Provider::Azure]);
        assert!(config.catalog.refresh_interval().is_none());
        assert_eq!(
            config.preferences.translation,
            Some(vec![Provider::Azure, Provider::DeepL])
        );
        assert!(config.telemetry.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn api_key_is_read_from_file() {
        let file = write_config(
            r#"
            [gateway]
            api_key = "gw-key"
            "#,
        );

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.gateway.api_key_str(), Some("gw-key"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = AppConfig::default();
        config.gateway.timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_provider_list_is_rejected() {
        let mut config = AppConfig::default();
        config.catalog.providers.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_override_is_rejected() {
        let mut config = AppConfig::default();
        config.preferences.dictionary = Some(vec![]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("dictionary lookup"));
    }
}
