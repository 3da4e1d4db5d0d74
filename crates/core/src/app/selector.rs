use super::capability::CapabilityResult;
use super::readiness::Readiness;

/// Which page the shell should render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Error,
    Loading,
    Ready,
}

/// Project the current readiness onto a page. Holds no state between calls.
pub fn select_view(readiness: &Readiness, capability: CapabilityResult) -> ViewState {
    if readiness.has_error || !capability.supported {
        ViewState::Error
    } else if readiness.is_populated {
        ViewState::Ready
    } else {
        ViewState::Loading
    }
}
