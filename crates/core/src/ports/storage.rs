use anyhow::Result;

/// Key/value facility the shell needs for remembering local UI state.
///
/// Only the write-then-remove round trip is required by the capability probe.
pub trait StoragePort: Send + Sync {
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    fn remove_item(&self, key: &str) -> Result<()>;
}
