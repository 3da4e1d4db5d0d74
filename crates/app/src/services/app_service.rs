use anyhow::Result;
use showdeck_core::app::Command;
use showdeck_core::domain::{DataDomain, ErrorInfo, Event};
use showdeck_core::ports::{FetchTarget, LayoutStore, ReferenceDataPort};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

/// Executes fetch and persistence requests on behalf of the shell.
///
/// Results are reported as events; the service keeps no readiness state of
/// its own, the shell's projection is the only owner.
pub struct AppService {
    // Ports (dependency injection)
    reference_port: Arc<dyn ReferenceDataPort>,
    layout_store: Arc<dyn LayoutStore>,

    // Event bus
    event_tx: mpsc::UnboundedSender<Event>,
    event_rx: mpsc::UnboundedReceiver<Event>,

    // External event sender (for TUI)
    event_tx_external: mpsc::UnboundedSender<Event>,

    // Command receiver
    command_rx: mpsc::UnboundedReceiver<Command>,

    // Background task management
    tasks: JoinSet<Result<()>>,
}

impl AppService {
    pub fn new(
        reference_port: Arc<dyn ReferenceDataPort>,
        layout_store: Arc<dyn LayoutStore>,
    ) -> (Self, mpsc::UnboundedReceiver<Event>, mpsc::UnboundedSender<Command>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (event_tx_external, event_rx_external) = mpsc::unbounded_channel();
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        let service = Self {
            reference_port,
            layout_store,
            event_tx,
            event_rx,
            event_tx_external,
            command_rx,
            tasks: JoinSet::new(),
        };

        (service, event_rx_external, command_tx)
    }

    /// Start the application service
    pub async fn start(&mut self) -> Result<()> {
        info!("Starting AppService");

        self.restore_layout();

        self.run_event_loop().await
    }

    /// Handle a command (CQRS Command side)
    pub fn handle_command(&mut self, cmd: Command) -> Result<()> {
        match cmd {
            Command::Fetch { target: FetchTarget::Domain(domain) } => {
                info!("Fetching {}", domain);
                self.fetch_domain(domain);
            }
            Command::Fetch { target: FetchTarget::SystemStatus } => {
                info!("Fetching system status");
                self.fetch_system_status();
            }
            Command::SetSidebarVisible { visible } => {
                info!("Setting sidebar visibility to {}", visible);
                self.persist_sidebar_visibility(visible);
            }
            Command::RetryFailed { domains } => {
                info!("Retrying {} failed domains", domains.len());
                for domain in domains {
                    let _ = self.event_tx.send(Event::DomainErrorCleared { domain });
                    self.fetch_domain(domain);
                }
            }
            Command::Quit => {
                info!("Quit command received");
                let _ = self.event_tx.send(Event::QuitRequested);
            }
        }
        Ok(())
    }

    /// Emit the persisted sidebar flag, if any
    fn restore_layout(&mut self) {
        let layout_store = self.layout_store.clone();
        let event_tx = self.event_tx.clone();

        self.tasks.spawn(async move {
            let result = tokio::task::spawn_blocking(move || layout_store.load_sidebar_visible()).await;

            match result {
                Ok(Ok(Some(visible))) => {
                    debug!("Restored sidebar visibility: {}", visible);
                    let _ = event_tx.send(Event::SidebarVisibilityChanged { visible });
                }
                Ok(Ok(None)) => {}
                Ok(Err(e)) => {
                    warn!("Failed to restore layout: {:#}", e);
                }
                Err(e) => {
                    error!("Layout restore task panicked: {}", e);
                }
            }

            Ok(())
        });
    }

    /// Load one domain in the background
    fn fetch_domain(&mut self, domain: DataDomain) {
        let reference_port = self.reference_port.clone();
        let event_tx = self.event_tx.clone();

        self.tasks.spawn(async move {
            let result = tokio::task::spawn_blocking(move || reference_port.load(domain)).await;

            match result {
                Ok(Ok(payload)) => {
                    if let Some(settings) = payload.ui_settings {
                        let _ = event_tx.send(Event::UiSettingsLoaded { settings });
                    }
                    let _ = event_tx.send(Event::DomainPopulated {
                        domain,
                        item_count: payload.item_count,
                    });
                }
                Ok(Err(e)) => {
                    error!("Failed to load {}: {:#}", domain, e);
                    let _ = event_tx.send(Event::DomainFailed {
                        domain,
                        error: ErrorInfo::new(format!("{:#}", e)),
                    });
                }
                Err(e) => {
                    error!("Load task panicked for {}: {}", domain, e);
                    let _ = event_tx.send(Event::DomainFailed {
                        domain,
                        error: ErrorInfo::new(format!("Load task failed: {}", e)),
                    });
                }
            }

            Ok(())
        });
    }

    /// Load system status; failure marks the backend as disconnected
    fn fetch_system_status(&mut self) {
        let reference_port = self.reference_port.clone();
        let event_tx = self.event_tx.clone();

        self.tasks.spawn(async move {
            let result = tokio::task::spawn_blocking(move || reference_port.system_status()).await;

            match result {
                Ok(Ok(status)) => {
                    let _ = event_tx.send(Event::SystemStatusLoaded { status });
                    let _ = event_tx.send(Event::ConnectionChanged { is_disconnected: false });
                }
                Ok(Err(e)) => {
                    error!("Failed to load system status: {:#}", e);
                    let _ = event_tx.send(Event::ConnectionChanged { is_disconnected: true });
                    let _ = event_tx.send(Event::Error {
                        msg: format!("System status unavailable: {:#}", e),
                    });
                }
                Err(e) => {
                    error!("System status task panicked: {}", e);
                    let _ = event_tx.send(Event::Error {
                        msg: format!("System status task failed: {}", e),
                    });
                }
            }

            Ok(())
        });
    }

    /// Persist the sidebar flag, then publish it.
    ///
    /// The flag is published even when the write fails so every observer
    /// stays consistent for this session.
    fn persist_sidebar_visibility(&mut self, visible: bool) {
        let layout_store = self.layout_store.clone();
        let event_tx = self.event_tx.clone();

        self.tasks.spawn(async move {
            let result =
                tokio::task::spawn_blocking(move || layout_store.save_sidebar_visible(visible)).await;

            match result {
                Ok(Ok(())) => {
                    debug!("Sidebar visibility persisted");
                }
                Ok(Err(e)) => {
                    error!("Failed to persist sidebar visibility: {:#}", e);
                    let _ = event_tx.send(Event::Error {
                        msg: format!("Layout save failed: {:#}", e),
                    });
                }
                Err(e) => {
                    error!("Layout save task panicked: {}", e);
                }
            }

            let _ = event_tx.send(Event::SidebarVisibilityChanged { visible });
            Ok(())
        });
    }

    /// Main event processing loop
    async fn run_event_loop(&mut self) -> Result<()> {
        info!("Starting event loop");

        loop {
            tokio::select! {
                // Handle commands from the TUI
                command = self.command_rx.recv() => {
                    match command {
                        Some(cmd) => {
                            if let Err(e) = self.handle_command(cmd) {
                                error!("Error handling command: {}", e);
                            }
                        }
                        None => {
                            info!("Command channel closed, stopping event loop");
                            break;
                        }
                    }
                }

                // Forward events from the event bus
                event = self.event_rx.recv() => {
                    match event {
                        Some(event) => {
                            let quit = matches!(event, Event::QuitRequested);
                            self.forward_event(event);
                            if quit {
                                break;
                            }
                        }
                        None => {
                            info!("Event channel closed, stopping event loop");
                            break;
                        }
                    }
                }

                // Handle completed background tasks
                task_result = self.tasks.join_next(), if !self.tasks.is_empty() => {
                    if let Some(result) = task_result {
                        match result {
                            Ok(Ok(())) => {}
                            Ok(Err(e)) => {
                                error!("Background task failed: {}", e);
                            }
                            Err(e) => {
                                error!("Background task panicked: {}", e);
                            }
                        }
                    }
                }
            }
        }

        info!("Shutting down background tasks");
        self.tasks.abort_all();

        Ok(())
    }

    /// Forward a single event to external listeners (TUI)
    fn forward_event(&self, event: Event) {
        match &event {
            Event::DomainPopulated { domain, item_count } => {
                info!("{} populated with {} items", domain, item_count);
            }
            Event::DomainFailed { domain, error } => {
                error!("{} failed: {}", domain, error);
            }
            Event::Error { msg } => {
                error!("Application error: {}", msg);
            }
            other => {
                debug!("Forwarding event: {:?}", other);
            }
        }

        if self.event_tx_external.send(event).is_err() {
            debug!("Event receiver dropped");
        }
    }
}

impl Drop for AppService {
    fn drop(&mut self) {
        // Abort all background tasks when the service is dropped
        self.tasks.abort_all();
    }
}
