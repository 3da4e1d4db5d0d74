use crate::ports::StoragePort;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

/// Sentinel key written and removed by the probe
pub const PROBE_KEY: &str = "showdeckTest";

/// Whether local storage worked when the coordinator was built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityResult {
    pub supported: bool,
}

impl CapabilityResult {
    pub const SUPPORTED: Self = Self { supported: true };
    pub const UNSUPPORTED: Self = Self { supported: false };
}

/// Round-trip the sentinel key through `storage`.
///
/// Every failure, including a panicking adapter, reports unsupported.
pub fn probe(storage: &dyn StoragePort) -> CapabilityResult {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        storage.set_item(PROBE_KEY, PROBE_KEY)?;
        storage.remove_item(PROBE_KEY)
    }));

    match outcome {
        Ok(Ok(())) => {
            debug!("Storage probe succeeded");
            CapabilityResult::SUPPORTED
        }
        Ok(Err(e)) => {
            warn!("Storage probe failed: {:#}", e);
            CapabilityResult::UNSUPPORTED
        }
        Err(_) => {
            warn!("Storage probe panicked");
            CapabilityResult::UNSUPPORTED
        }
    }
}
