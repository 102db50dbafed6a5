//! Wiring - builds the language tools service from configuration

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::ProviderCatalog;
use application::{CapabilityCatalog, LanguageToolsService, RequestDispatcher, SelectionEngine};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::adapters::{GatewayProviderCatalog, StaticProviderCatalog};
use crate::config::AppConfig;
use crate::tasks::spawn_catalog_refresh;

/// Pick the provider catalog adapter
///
/// A configured manifest wins over the gateway.
pub fn build_provider_catalog(
    config: &AppConfig,
) -> Result<Arc<dyn ProviderCatalog>, ApplicationError> {
    let providers = &config.catalog.providers;
    match &config.catalog.manifest_path {
        Some(path) => Ok(Arc::new(StaticProviderCatalog::from_path(path, providers)?)),
        None => {
            info!(base_url = %config.gateway.base_url, "Using provider gateway");
            Ok(Arc::new(GatewayProviderCatalog::new(
                config.gateway.clone(),
                providers.clone(),
            )?))
        },
    }
}

/// Validate `config`, build the service and load the initial capability snapshot
///
/// Providers failing their first listing are left out until the next
/// refresh; they do not prevent startup. When `catalog.refresh_interval_secs`
/// is non-zero the periodic refresh task is started as well, and its handle is
/// returned so the caller can abort it on shutdown.
pub async fn build_language_tools(
    config: &AppConfig,
) -> Result<(LanguageToolsService, Option<JoinHandle<()>>), ApplicationError> {
    config
        .validate()
        .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

    let source = build_provider_catalog(config)?;
    let catalog = Arc::new(CapabilityCatalog::new(Arc::clone(&source)));

    let report = catalog.refresh().await;
    if report.is_partial() {
        warn!(
            failed = report.failures.len(),
            "Starting with an incomplete capability catalog"
        );
    }

    let refresh_task = config
        .catalog
        .refresh_interval()
        .map(|interval| spawn_catalog_refresh(Arc::clone(&catalog), interval));
    if refresh_task.is_none() {
        info!("Periodic capability refresh disabled");
    }

    let engine = SelectionEngine::new(config.preferences.to_table());
    let dispatcher = RequestDispatcher::with_timeout(source, config.gateway.timeout());

    Ok((
        LanguageToolsService::new(catalog, engine, dispatcher),
        refresh_task,
    ))
}
