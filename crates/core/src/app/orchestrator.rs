use super::readiness::Readiness;
use crate::ports::{FetchTarget, FetchTrigger};
use tracing::{debug, info};

/// Issues the initial fetches when the page is mounted
pub struct BootstrapOrchestrator;

impl BootstrapOrchestrator {
    /// Trigger every bootstrap fetch unless the domains are already populated.
    ///
    /// Only `is_populated` is checked, so fetches still in flight from an
    /// earlier activation are triggered again. Returns the number of triggers.
    pub fn on_activate(readiness: &Readiness, trigger: &dyn FetchTrigger) -> usize {
        if readiness.is_populated {
            debug!("Reference data already populated, skipping bootstrap fetches");
            return 0;
        }

        let targets = FetchTarget::bootstrap_set();
        info!("Bootstrapping {} fetches", targets.len());
        for target in targets {
            trigger.trigger(target);
        }
        targets.len()
    }
}
