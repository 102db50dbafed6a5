//! Infrastructure layer - Adapters for external systems
//!
//! Implements the `ProviderCatalog` port over an HTTP gateway or a static
//! manifest, and provides configuration loading, logging setup, the
//! periodic catalog refresh task and the wiring that ties them together.

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod tasks;
pub mod telemetry;

pub use adapters::*;
pub use bootstrap::{build_language_tools, build_provider_catalog};
pub use config::{AppConfig, CatalogConfig, GatewayConfig, PreferencesConfig};
pub use tasks::spawn_catalog_refresh;
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};
