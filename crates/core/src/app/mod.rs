pub mod capability;
pub mod commands;
pub mod coordinator;
pub mod orchestrator;
pub mod queries;
pub mod readiness;
pub mod selector;
pub mod sidebar;

// Re-exports
pub use capability::*;
pub use commands::*;
pub use coordinator::*;
pub use orchestrator::*;
pub use queries::*;
pub use readiness::*;
pub use selector::*;
pub use sidebar::*;
