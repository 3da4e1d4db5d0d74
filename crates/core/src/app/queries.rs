use super::readiness::{aggregate, Readiness, ReadinessSnapshot};
use crate::domain::{AppChrome, DataDomain, DimensionsState, DomainStatus, Event, UiSettings};

/// Read-only projection of application state for UI consumption.
///
/// This is the single owner of domain status and chrome state; it only
/// changes through [`apply`](Self::apply).
#[derive(Debug, Default, Clone)]
pub struct ReadProjection {
    /// Load status of every reference data domain
    pub domains: ReadinessSnapshot,

    /// Item counts reported by successful loads
    pub item_counts: [usize; 6],

    /// Sidebar, version and connectivity
    pub chrome: AppChrome,

    /// Last pushed terminal dimensions
    pub dimensions: DimensionsState,

    /// Settings from the UI settings domain
    pub ui_settings: UiSettings,
}

impl ReadProjection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a known chrome state, e.g. a restored sidebar flag
    pub fn with_chrome(chrome: AppChrome) -> Self {
        Self {
            chrome,
            ..Self::default()
        }
    }

    /// Apply an event to update the projection
    pub fn apply(&mut self, event: &Event) {
        match event {
            Event::DomainPopulated { domain, item_count } => {
                self.domains.set(*domain, DomainStatus::populated());
                self.item_counts[domain.index()] = *item_count;
            }

            Event::DomainFailed { domain, error } => {
                self.domains.set(*domain, DomainStatus::failed(error.clone()));
            }

            Event::DomainErrorCleared { domain } => {
                if self.domains.status(*domain).has_error() {
                    self.domains.set(*domain, DomainStatus::unpopulated());
                }
            }

            Event::UiSettingsLoaded { settings } => {
                self.ui_settings = *settings;
            }

            Event::SystemStatusLoaded { status } => {
                self.chrome.version = status.version.clone();
                self.chrome.is_updated = status.is_updated;
            }

            Event::ConnectionChanged { is_disconnected } => {
                self.chrome.is_disconnected = *is_disconnected;
            }

            Event::SidebarVisibilityChanged { visible } => {
                self.chrome.is_sidebar_visible = *visible;
            }

            Event::DimensionsChanged { dimensions } => {
                self.dimensions = *dimensions;
            }

            Event::Error { .. } | Event::QuitRequested => {
                // No state change needed
            }
        }
    }

    /// Aggregated readiness of all domains
    pub fn readiness(&self) -> Readiness {
        aggregate(&self.domains)
    }

    pub fn item_count(&self, domain: DataDomain) -> usize {
        self.item_counts[domain.index()]
    }

    /// Domains whose last fetch failed
    pub fn failed_domains(&self) -> Vec<DataDomain> {
        self.domains.errors().map(|(domain, _)| domain).collect()
    }
}
