pub mod reference;
pub mod chrome;
pub mod events;

// Re-exports for convenience
pub use reference::*;
pub use chrome::*;
pub use events::*;
