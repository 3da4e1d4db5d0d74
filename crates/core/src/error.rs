use crate::domain::{DataDomain, ErrorInfo};
use thiserror::Error;

/// Reasons the primary view cannot be shown
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    #[error("Local storage is unavailable")]
    CapabilityUnavailable,

    #[error("Failed to load {domain}: {error}")]
    DomainFetch { domain: DataDomain, error: ErrorInfo },
}
