use super::commands::Command;
use crate::domain::AppChrome;

/// Flips the sidebar flag through the owning store.
///
/// The toggle never mutates chrome state itself; it produces the request
/// that the application service persists and echoes back as an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarToggle;

impl SidebarToggle {
    pub fn toggle(&self, chrome: &AppChrome) -> Command {
        Command::SetSidebarVisible {
            visible: !chrome.is_sidebar_visible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_negates_current_flag() {
        let visible = AppChrome { is_sidebar_visible: true, ..AppChrome::default() };
        let hidden = AppChrome { is_sidebar_visible: false, ..AppChrome::default() };

        assert_eq!(SidebarToggle.toggle(&visible), Command::SetSidebarVisible { visible: false });
        assert_eq!(SidebarToggle.toggle(&hidden), Command::SetSidebarVisible { visible: true });
    }

    #[test]
    fn test_toggle_does_not_touch_chrome() {
        let chrome = AppChrome::default();
        let _ = SidebarToggle.toggle(&chrome);
        let _ = SidebarToggle.toggle(&chrome);
        assert!(chrome.is_sidebar_visible);
    }
}
