use super::{
    chrome::{DimensionsState, SystemStatus, UiSettings},
    reference::{DataDomain, ErrorInfo},
};

/// Domain events emitted by the application service and the shell
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A domain finished loading without error
    DomainPopulated { domain: DataDomain, item_count: usize },

    /// A domain's fetch completed with an error
    DomainFailed { domain: DataDomain, error: ErrorInfo },

    /// A retry collaborator cleared a domain's error before re-fetching it
    DomainErrorCleared { domain: DataDomain },

    /// UI settings payload arrived
    UiSettingsLoaded { settings: UiSettings },

    /// System status arrived
    SystemStatusLoaded { status: SystemStatus },

    /// Connectivity to the library backend changed
    ConnectionChanged { is_disconnected: bool },

    /// The sidebar flag was persisted with this value
    SidebarVisibilityChanged { visible: bool },

    /// The terminal was resized
    DimensionsChanged { dimensions: DimensionsState },

    /// An error not tied to a domain
    Error { msg: String },

    /// User requested to quit the application
    QuitRequested,
}
