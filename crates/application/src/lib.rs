//! Application layer - provider selection and dispatch
//!
//! Owns the capability catalog snapshot, narrows it to the candidates that
//! can serve a request, walks the preference list to pick exactly one
//! provider option, and dispatches the call through the `ProviderCatalog`
//! port. Adapters in the infrastructure layer implement that port.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
