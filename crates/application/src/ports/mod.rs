//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod provider_catalog;

#[cfg(test)]
pub use provider_catalog::MockProviderCatalog;
pub use provider_catalog::{BreakdownRequest, ProviderCatalog, ProviderError};
