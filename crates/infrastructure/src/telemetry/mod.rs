//! Logging initialisation
//!
//! Installs a `tracing` subscriber writing human-readable or JSON lines.

mod subscriber;

pub use subscriber::{TelemetryConfig, TelemetryError, init_telemetry};
