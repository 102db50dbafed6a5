//! Capability catalog refresh task
//!
//! Periodically rebuilds the capability snapshot so newly added languages
//! and voices become selectable without a restart.

use std::sync::Arc;
use std::time::Duration;

use application::CapabilityCatalog;
use tracing::{debug, info, warn};

/// Spawn a background task that refreshes `catalog` every `interval`.
///
/// The first refresh happens one interval after startup; the caller is
/// expected to have loaded the initial snapshot already. Provider failures
/// are logged and never stop the task.
///
/// Returns a `JoinHandle` that can be used to abort the task when shutting down.
pub fn spawn_catalog_refresh(
    catalog: Arc<CapabilityCatalog>,
    interval: Duration,
) -> tokio::task::JoinHandle<()> {
    info!(
        interval_secs = interval.as_secs(),
        "Starting capability catalog refresh task"
    );

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // Don't run immediately on startup
        ticker.tick().await;

        loop {
            ticker.tick().await;
            debug!("Running capability catalog refresh");

            let report = catalog.refresh().await;
            for failure in &report.failures {
                warn!(
                    provider = %failure.provider,
                    error = %failure.error,
                    "Provider left out of refreshed catalog"
                );
            }
        }
    })
}
