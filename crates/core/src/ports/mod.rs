pub mod fetch;
pub mod persistence;
pub mod storage;

// Re-exports
pub use fetch::*;
pub use persistence::*;
pub use storage::*;
