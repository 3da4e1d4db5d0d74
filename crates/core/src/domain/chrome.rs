use serde::{Deserialize, Serialize};

/// Application-wide UI state not tied to a data domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppChrome {
    pub is_sidebar_visible: bool,
    pub version: String,
    pub is_updated: bool,
    pub is_disconnected: bool,
}

impl Default for AppChrome {
    fn default() -> Self {
        Self {
            is_sidebar_visible: true,
            version: String::new(),
            is_updated: false,
            is_disconnected: false,
        }
    }
}

/// Terminal size as pushed by the resize handler
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DimensionsState {
    pub width: u16,
    pub height: u16,
    pub is_small_screen: bool,
}

impl DimensionsState {
    /// Classify a terminal as small when it is narrower than `small_screen_width` columns
    pub fn classify(width: u16, height: u16, small_screen_width: u16) -> Self {
        Self {
            width,
            height,
            is_small_screen: width < small_screen_width,
        }
    }
}

/// Settings carried by the `UiSettings` domain that the shell cares about
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiSettings {
    #[serde(default, rename = "enableColorImpairedMode")]
    pub enable_color_impaired_mode: bool,
}

/// Server status fetched alongside the domains
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemStatus {
    pub version: String,
    #[serde(default, rename = "isUpdated")]
    pub is_updated: bool,
}
