use crate::domain::{DataDomain, DomainPayload, SystemStatus};
use anyhow::Result;

/// Something the bootstrap can ask to be loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchTarget {
    Domain(DataDomain),
    SystemStatus,
}

impl FetchTarget {
    /// The full bootstrap set: every domain plus the system status
    pub fn bootstrap_set() -> [FetchTarget; 7] {
        [
            FetchTarget::Domain(DataDomain::Series),
            FetchTarget::Domain(DataDomain::CustomFilters),
            FetchTarget::Domain(DataDomain::Tags),
            FetchTarget::Domain(DataDomain::QualityProfiles),
            FetchTarget::Domain(DataDomain::LanguageProfiles),
            FetchTarget::Domain(DataDomain::UiSettings),
            FetchTarget::SystemStatus,
        ]
    }
}

impl std::fmt::Display for FetchTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchTarget::Domain(domain) => write!(f, "{}", domain),
            FetchTarget::SystemStatus => write!(f, "System Status"),
        }
    }
}

/// Fire-and-forget fetch request sink.
///
/// Implementations must not block; completion is reported later as an event.
pub trait FetchTrigger {
    fn trigger(&self, target: FetchTarget);
}

/// Port for loading reference data.
/// This is blocking - caller should run in spawn_blocking
pub trait ReferenceDataPort: Send + Sync {
    fn load(&self, domain: DataDomain) -> Result<DomainPayload>;

    fn system_status(&self) -> Result<SystemStatus>;
}
