//! Adapters implementing the `ProviderCatalog` port

mod gateway_provider_catalog;
mod static_provider_catalog;

pub use gateway_provider_catalog::GatewayProviderCatalog;
pub use static_provider_catalog::{Manifest, StaticProviderCatalog};
