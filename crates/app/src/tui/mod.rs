pub mod model;
pub mod trigger;
pub mod update;
pub mod view;

// Re-exports for convenience
pub use model::*;
pub use trigger::*;
pub use update::*;
pub use view::*;
