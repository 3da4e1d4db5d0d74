use showdeck_core::app::{PageCoordinator, PageSelection, ReadProjection, ViewState};
use showdeck_core::domain::{AppChrome, Event};
use showdeck_core::ports::FetchTrigger;

/// The TUI Model - this represents the complete UI state
#[derive(Debug)]
pub struct TuiModel {
    /// Core data, updated only from events
    pub projection: ReadProjection,

    /// Gate for the primary view, created once per mount
    pub coordinator: PageCoordinator,

    /// Width below which the terminal counts as a small screen
    pub small_screen_width: u16,

    /// Error messages to display
    pub errors: Vec<String>,

    /// Status messages to display
    pub messages: Vec<String>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl TuiModel {
    pub fn new(coordinator: PageCoordinator, chrome: AppChrome, small_screen_width: u16) -> Self {
        Self {
            projection: ReadProjection::with_chrome(chrome),
            coordinator,
            small_screen_width,
            errors: Vec::new(),
            messages: Vec::new(),
            should_quit: false,
        }
    }

    /// Mount the page: run the one-shot bootstrap
    pub fn mount(&mut self, trigger: &dyn FetchTrigger) -> usize {
        self.coordinator.activate(&self.projection, trigger)
    }

    /// Apply an event to update both projection and UI state
    pub fn apply_event(&mut self, event: &Event) {
        self.projection.apply(event);

        match event {
            Event::DomainPopulated { domain, item_count } => {
                self.messages.push(format!("Loaded {} ({} items)", domain, item_count));
            }

            Event::DomainErrorCleared { domain } => {
                self.messages.push(format!("Retrying {}", domain));
            }

            Event::ConnectionChanged { is_disconnected: true } => {
                self.messages.push("Lost connection to the library".to_string());
            }

            Event::Error { msg } => {
                self.errors.push(msg.clone());
            }

            Event::QuitRequested => {
                self.should_quit = true;
            }

            _ => {}
        }
    }

    /// Page to render for the current projection
    pub fn page(&self) -> PageSelection<'_> {
        self.coordinator.render(&self.projection)
    }

    pub fn view_state(&self) -> ViewState {
        self.coordinator.view_state(&self.projection)
    }

    /// Most recent status message, if any
    pub fn last_message(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    /// Clear all error messages
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }
}
