// Composition root: wires adapters, the application service and the MVU TUI

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event as TermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use showdeck_core::app::{Command, PageCoordinator, PageSelection, ViewState};
use showdeck_core::domain::{AppChrome, Event};
use showdeck_core::error::BootstrapError;
use showdeck_core::ports::{AppConfig, ConfigStore, LayoutStore, ReferenceDataPort};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::adapters::{
    persistence::{FileConfigStore, FileLayoutStore},
    reference::DirectoryReferenceSource,
    storage::FileStorage,
};
use crate::cli::CliArgs;
use crate::services::app_service::AppService;
use crate::tui::{CommandTrigger, TuiMessage, TuiModel, TuiUpdate, TuiView};

/// Everything the shell needs, before a terminal is attached
pub struct Wiring {
    pub service: AppService,
    pub model: TuiModel,
    pub event_rx: mpsc::UnboundedReceiver<Event>,
    pub command_tx: mpsc::UnboundedSender<Command>,
}

/// Build adapters, probe storage and create the model for `config`
pub fn wire(config: &AppConfig) -> Wiring {
    let storage = FileStorage::new(&config.state_dir);
    let coordinator = PageCoordinator::new(&storage);

    let reference_port: Arc<dyn ReferenceDataPort> =
        Arc::new(DirectoryReferenceSource::new(&config.library_dir));
    let layout_store: Arc<dyn LayoutStore> = Arc::new(FileLayoutStore::new(&config.state_dir));
    let (service, event_rx, command_tx) = AppService::new(reference_port, layout_store);

    let chrome = AppChrome {
        is_sidebar_visible: config.ui.sidebar_visible_default,
        ..AppChrome::default()
    };
    let model = TuiModel::new(coordinator, chrome, config.ui.small_screen_width);

    Wiring {
        service,
        model,
        event_rx,
        command_tx,
    }
}

/// Load the config file and apply CLI overrides
pub fn load_config(cli_args: &CliArgs) -> Result<AppConfig> {
    let config_store = match &cli_args.config {
        Some(path) => FileConfigStore::with_path(path),
        None => FileConfigStore::new()?,
    };

    let mut config = config_store.load()?;
    cli_args.apply_to(&mut config);

    info!("Loaded config with library_dir: {}", config.library_dir.display());
    Ok(config)
}

/// Outcome of a headless bootstrap
#[derive(Debug)]
pub struct CheckReport {
    pub state: ViewState,
    pub triggered: usize,
    pub failures: Vec<BootstrapError>,
}

/// Run the bootstrap without a terminal until it leaves Loading or `timeout` passes
pub async fn run_check(config: &AppConfig, timeout: Duration) -> Result<CheckReport> {
    let Wiring {
        mut service,
        mut model,
        mut event_rx,
        command_tx,
    } = wire(config);

    let service_handle = tokio::spawn(async move { service.start().await });

    let triggered = model.mount(&CommandTrigger::new(command_tx.clone()));
    let deadline = tokio::time::Instant::now() + timeout;

    while model.view_state() == ViewState::Loading {
        match tokio::time::timeout_at(deadline, event_rx.recv()).await {
            Ok(Some(event)) => model.apply_event(&event),
            Ok(None) => break,
            Err(_) => {
                warn!("Timed out waiting for reference data");
                break;
            }
        }
    }

    // Closing the command channel stops the service loop
    drop(command_tx);
    match service_handle.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => warn!("App service stopped with error: {:#}", e),
        Err(e) => error!("App service task failed: {:?}", e),
    }

    let failures = match model.page() {
        PageSelection::Error(page) => page.failures(),
        _ => Vec::new(),
    };

    Ok(CheckReport {
        state: model.view_state(),
        triggered,
        failures,
    })
}

/// The interactive application
pub struct ShowdeckApp {
    wiring: Wiring,
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl ShowdeckApp {
    pub fn new(config: &AppConfig) -> Result<Self> {
        info!("Initializing showdeck");
        let wiring = wire(config);

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self { wiring, terminal })
    }

    /// Run the application
    pub async fn run(self) -> Result<()> {
        let ShowdeckApp {
            wiring:
                Wiring {
                    mut service,
                    mut model,
                    event_rx,
                    command_tx,
                },
            mut terminal,
        } = self;

        let service_handle = tokio::spawn(async move { service.start().await });

        let issued = model.mount(&CommandTrigger::new(command_tx.clone()));
        info!("Mounted page, {} fetches issued", issued);

        let result = run_main_loop(&mut model, &mut terminal, event_rx, command_tx).await;

        shutdown(&mut terminal)?;

        if let Err(e) = service_handle.await {
            error!("App service task failed: {:?}", e);
        }

        result
    }
}

/// Main application loop - coordinates TUI and app service
async fn run_main_loop(
    model: &mut TuiModel,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut event_rx: mpsc::UnboundedReceiver<Event>,
    command_tx: mpsc::UnboundedSender<Command>,
) -> Result<()> {
    let mut needs_redraw = true;

    loop {
        // Handle events from the app service
        while let Ok(event) = event_rx.try_recv() {
            model.apply_event(&event);
            needs_redraw = true;
        }

        // Handle terminal resize
        let size = terminal.size()?;
        if let TuiMessage::Event(event) = TuiUpdate::handle_resize(model, size.width, size.height) {
            model.apply_event(&event);
            needs_redraw = true;
        }

        // Handle user input
        if event::poll(Duration::from_millis(10))? {
            if let TermEvent::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    let message = TuiUpdate::handle_key(model, key_event.code, key_event.modifiers)?;
                    dispatch(model, &command_tx, message);
                    needs_redraw = true;
                }
            }
        }

        if model.should_quit {
            info!("Quit requested, exiting main loop");
            break;
        }

        if needs_redraw {
            terminal.draw(|frame| TuiView::render(model, frame))?;
            needs_redraw = false;
        }

        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    Ok(())
}

fn dispatch(model: &mut TuiModel, command_tx: &mpsc::UnboundedSender<Command>, message: TuiMessage) {
    match message {
        TuiMessage::Command(Command::Quit) => {
            model.should_quit = true;
        }
        TuiMessage::Command(cmd) => {
            info!("Sending command to app service: {:?}", cmd);
            if let Err(e) = command_tx.send(cmd) {
                error!("Failed to send command: {}", e);
            }
        }
        TuiMessage::Event(event) => model.apply_event(&event),
        TuiMessage::None => {}
    }
}

/// Clean shutdown
fn shutdown(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    info!("Shutting down showdeck");

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Binary entry point
pub async fn main_entry() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli_args = CliArgs::parse();
    let config = load_config(&cli_args)?;

    if cli_args.check {
        let report = run_check(&config, Duration::from_secs(cli_args.timeout)).await?;
        println!("{:?} ({} fetches issued)", report.state, report.triggered);
        for failure in &report.failures {
            println!("  {}", failure);
        }
        if report.state != ViewState::Ready {
            std::process::exit(1);
        }
        return Ok(());
    }

    let app = ShowdeckApp::new(&config)?;

    if let Err(e) = app.run().await {
        error!("Application error: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    info!("showdeck shut down cleanly");
    Ok(())
}
