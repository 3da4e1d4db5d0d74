use crate::domain::DataDomain;
use crate::ports::FetchTarget;

/// Commands that can be sent to the application service
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Load one domain or the system status
    Fetch { target: FetchTarget },

    /// Persist a new sidebar visibility
    SetSidebarVisible { visible: bool },

    /// Clear the errors of these domains and load them again
    RetryFailed { domains: Vec<DataDomain> },

    /// Quit the application
    Quit,
}
