use super::capability::{probe, CapabilityResult};
use super::orchestrator::BootstrapOrchestrator;
use super::queries::ReadProjection;
use super::readiness::{Readiness, ReadinessSnapshot};
use super::selector::{select_view, ViewState};
use super::sidebar::SidebarToggle;
use crate::domain::{AppChrome, DimensionsState, UiSettings};
use crate::error::BootstrapError;
use crate::ports::{FetchTrigger, StoragePort};
use tracing::{debug, info};

/// State forwarded to whichever page is selected
#[derive(Debug, Clone, Copy)]
pub struct PageProps<'a> {
    pub readiness: Readiness,
    pub domains: &'a ReadinessSnapshot,
    pub chrome: &'a AppChrome,
    pub dimensions: DimensionsState,
    pub ui_settings: UiSettings,
}

impl<'a> PageProps<'a> {
    fn from_projection(projection: &'a ReadProjection) -> Self {
        Self {
            readiness: projection.readiness(),
            domains: &projection.domains,
            chrome: &projection.chrome,
            dimensions: projection.dimensions,
            ui_settings: projection.ui_settings,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ErrorPage<'a> {
    pub capability: CapabilityResult,
    pub props: PageProps<'a>,
}

impl ErrorPage<'_> {
    /// Everything that keeps the primary view from rendering
    pub fn failures(&self) -> Vec<BootstrapError> {
        let mut failures = Vec::new();
        if !self.capability.supported {
            failures.push(BootstrapError::CapabilityUnavailable);
        }
        failures.extend(self.props.domains.errors().map(|(domain, error)| {
            BootstrapError::DomainFetch {
                domain,
                error: error.clone(),
            }
        }));
        failures
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LoadingPage<'a> {
    pub props: PageProps<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ReadyPage<'a> {
    pub props: PageProps<'a>,
    pub on_sidebar_toggle: SidebarToggle,
}

/// The page to render plus what it is allowed to see
#[derive(Debug, Clone, Copy)]
pub enum PageSelection<'a> {
    Error(ErrorPage<'a>),
    Loading(LoadingPage<'a>),
    Ready(ReadyPage<'a>),
}

impl PageSelection<'_> {
    pub fn state(&self) -> ViewState {
        match self {
            PageSelection::Error(_) => ViewState::Error,
            PageSelection::Loading(_) => ViewState::Loading,
            PageSelection::Ready(_) => ViewState::Ready,
        }
    }
}

/// Gates the primary view until reference data and local storage are usable.
///
/// The storage probe runs once in the constructor and its result is kept for
/// the lifetime of the coordinator.
#[derive(Debug)]
pub struct PageCoordinator {
    capability: CapabilityResult,
    activated: bool,
}

impl PageCoordinator {
    pub fn new(storage: &dyn StoragePort) -> Self {
        Self::with_capability(probe(storage))
    }

    pub fn with_capability(capability: CapabilityResult) -> Self {
        info!("Page coordinator created (storage supported: {})", capability.supported);
        Self {
            capability,
            activated: false,
        }
    }

    pub fn capability(&self) -> CapabilityResult {
        self.capability
    }

    /// One-shot mount hook. Later calls on the same coordinator do nothing.
    pub fn activate(&mut self, projection: &ReadProjection, trigger: &dyn FetchTrigger) -> usize {
        if self.activated {
            debug!("Page coordinator already activated");
            return 0;
        }
        self.activated = true;
        BootstrapOrchestrator::on_activate(&projection.readiness(), trigger)
    }

    pub fn view_state(&self, projection: &ReadProjection) -> ViewState {
        select_view(&projection.readiness(), self.capability)
    }

    /// Select the page for the current projection
    pub fn render<'a>(&self, projection: &'a ReadProjection) -> PageSelection<'a> {
        let props = PageProps::from_projection(projection);
        match select_view(&props.readiness, self.capability) {
            ViewState::Error => PageSelection::Error(ErrorPage {
                capability: self.capability,
                props,
            }),
            ViewState::Loading => PageSelection::Loading(LoadingPage { props }),
            ViewState::Ready => PageSelection::Ready(ReadyPage {
                props,
                on_sidebar_toggle: SidebarToggle,
            }),
        }
    }
}
