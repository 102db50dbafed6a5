//! Capability catalog configuration: enabled providers and refresh cadence.

use std::path::PathBuf;
use std::time::Duration;

use domain::Provider;
use serde::{Deserialize, Serialize};

/// Which providers are registered and how often their capabilities are reloaded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Providers to register (default: all)
    #[serde(default = "default_providers")]
    pub providers: Vec<Provider>,

    /// Seconds between capability refreshes (default: 3600, 0 disables)
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,

    /// Read capabilities from a TOML manifest instead of the gateway
    #[serde(default)]
    pub manifest_path: Option<PathBuf>,
}

fn default_providers() -> Vec<Provider> {
    Provider::all().to_vec()
}

const fn default_refresh_interval() -> u64 {
    3600
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            providers: default_providers(),
            refresh_interval_secs: default_refresh_interval(),
            manifest_path: None,
        }
    }
}

impl CatalogConfig {
    /// Periodic refresh interval, `None` when disabled
    #[must_use]
    pub const fn refresh_interval(&self) -> Option<Duration> {
        if self.refresh_interval_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.refresh_interval_secs))
        }
    }
}
