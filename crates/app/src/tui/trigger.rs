use showdeck_core::app::Command;
use showdeck_core::ports::{FetchTarget, FetchTrigger};
use tokio::sync::mpsc;
use tracing::error;

/// Turns bootstrap fetch triggers into service commands
pub struct CommandTrigger {
    command_tx: mpsc::UnboundedSender<Command>,
}

impl CommandTrigger {
    pub fn new(command_tx: mpsc::UnboundedSender<Command>) -> Self {
        Self { command_tx }
    }
}

impl FetchTrigger for CommandTrigger {
    fn trigger(&self, target: FetchTarget) {
        if let Err(e) = self.command_tx.send(Command::Fetch { target }) {
            error!("Failed to send fetch for {}: {}", target, e);
        }
    }
}
