//! Application-level errors

use domain::{CapabilityKind, DomainError, Provider};
use thiserror::Error;

use crate::ports::ProviderError;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// No provider option satisfies the request
    ///
    /// Raised before any provider call is attempted.
    #[error("No service found for {detail}")]
    NoCandidate {
        /// Capability that was requested
        kind: CapabilityKind,
        /// Languages (and gender) involved, human readable
        detail: String,
    },

    /// The selected provider's call failed
    #[error("{provider} request failed{}: {body}", status_suffix(.status))]
    ProviderRequest {
        /// Provider the request was committed to
        provider: Provider,
        /// HTTP status, when the provider answered at all
        status: Option<u16>,
        /// Raw response body or transport error description
        body: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" with status {s}")).unwrap_or_default()
}

impl ApplicationError {
    /// Create a no-candidate error
    pub fn no_candidate(kind: CapabilityKind, detail: impl Into<String>) -> Self {
        Self::NoCandidate {
            kind,
            detail: detail.into(),
        }
    }

    /// Wrap a port-level failure of `provider`
    pub fn provider_request(provider: Provider, err: ProviderError) -> Self {
        Self::ProviderRequest {
            provider,
            status: err.status(),
            body: err.body(),
        }
    }

    /// Check if an outer layer may reasonably retry this error
    ///
    /// The engine itself never retries nor falls back to another provider.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ProviderRequest { status, .. } => {
                status.is_none_or(|s| s == 429 || (500..600).contains(&s))
            },
            _ => false,
        }
    }
}
