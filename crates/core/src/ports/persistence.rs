use anyhow::Result;
use std::path::PathBuf;

/// Configuration store interface
pub trait ConfigStore: Send + Sync {
    /// Load configuration from storage
    fn load(&self) -> Result<AppConfig>;

    /// Save configuration to storage
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// Durable home of the sidebar layout flag
pub trait LayoutStore: Send + Sync {
    /// Last persisted visibility, `None` when nothing was stored yet
    fn load_sidebar_visible(&self) -> Result<Option<bool>>;

    /// Persist the visibility flag
    fn save_sidebar_visible(&self, visible: bool) -> Result<()>;
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AppConfig {
    pub version: u32,
    pub library_dir: PathBuf,
    pub state_dir: PathBuf,
    pub ui: UiConfig,
}

/// UI configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UiConfig {
    /// Terminals narrower than this many columns count as small screens
    pub small_screen_width: u16,
    pub sidebar_visible_default: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let base = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            version: 1,
            library_dir: base.join("library"),
            state_dir: base.join(".showdeck"),
            ui: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            small_screen_width: 100,
            sidebar_visible_default: true,
        }
    }
}
