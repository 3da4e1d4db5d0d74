use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use showdeck_core::app::{Command, PageSelection};
use showdeck_core::domain::{DimensionsState, Event};
use super::model::TuiModel;

/// Messages that can be sent from the TUI to the application service
#[derive(Debug, Clone, PartialEq)]
pub enum TuiMessage {
    /// Send a command to the app service
    Command(Command),

    /// Apply an event locally
    Event(Event),

    /// No action needed
    None,
}

/// The Update function - handles user input and updates the model
pub struct TuiUpdate;

impl TuiUpdate {
    /// Handle a key press and update the model accordingly
    /// Returns a TuiMessage that should be dispatched by the main loop
    pub fn handle_key(model: &mut TuiModel, key: KeyCode, modifiers: KeyModifiers) -> Result<TuiMessage> {
        if let Some(msg) = Self::handle_global_keys(model, key, modifiers) {
            return Ok(msg);
        }

        let message = match model.page() {
            PageSelection::Ready(page) => match key {
                KeyCode::Char('b') | KeyCode::Tab => {
                    TuiMessage::Command(page.on_sidebar_toggle.toggle(page.props.chrome))
                }
                _ => TuiMessage::None,
            },
            PageSelection::Error(page) => match key {
                KeyCode::Char('r') => {
                    let domains: Vec<_> = page.props.domains.errors().map(|(d, _)| d).collect();
                    if domains.is_empty() {
                        TuiMessage::None
                    } else {
                        TuiMessage::Command(Command::RetryFailed { domains })
                    }
                }
                _ => TuiMessage::None,
            },
            PageSelection::Loading(_) => TuiMessage::None,
        };

        Ok(message)
    }

    /// Handle terminal resize
    pub fn handle_resize(model: &TuiModel, width: u16, height: u16) -> TuiMessage {
        let dimensions = DimensionsState::classify(width, height, model.small_screen_width);
        if dimensions == model.projection.dimensions {
            return TuiMessage::None;
        }
        TuiMessage::Event(Event::DimensionsChanged { dimensions })
    }

    /// Handle global keys that work on every page
    fn handle_global_keys(model: &mut TuiModel, key: KeyCode, modifiers: KeyModifiers) -> Option<TuiMessage> {
        match key {
            KeyCode::Char('q') if modifiers.is_empty() => Some(TuiMessage::Command(Command::Quit)),

            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                Some(TuiMessage::Command(Command::Quit))
            }

            KeyCode::Esc => {
                if model.errors.is_empty() {
                    Some(TuiMessage::Command(Command::Quit))
                } else {
                    // Dismiss the error overlay first
                    model.clear_errors();
                    Some(TuiMessage::None)
                }
            }

            _ => None,
        }
    }
}
