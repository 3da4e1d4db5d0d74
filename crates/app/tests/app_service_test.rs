//! Integration tests for the application service with in-memory ports

use anyhow::{bail, Result};
use showdeck::services::app_service::AppService;
use showdeck_core::app::Command;
use showdeck_core::domain::{DataDomain, DomainPayload, Event, SystemStatus, UiSettings};
use showdeck_core::ports::{FetchTarget, LayoutStore, ReferenceDataPort};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;

/// Reference port whose failing domains can be switched off between calls
#[derive(Default)]
struct FakeReference {
    failing: Mutex<HashSet<DataDomain>>,
    status_fails: bool,
}

impl FakeReference {
    fn failing(domains: &[DataDomain]) -> Self {
        Self {
            failing: Mutex::new(domains.iter().copied().collect()),
            status_fails: false,
        }
    }

    fn heal(&self, domain: DataDomain) {
        self.failing.lock().unwrap().remove(&domain);
    }
}

impl ReferenceDataPort for FakeReference {
    fn load(&self, domain: DataDomain) -> Result<DomainPayload> {
        if self.failing.lock().unwrap().contains(&domain) {
            bail!("HTTP 500 for {}", domain.key());
        }
        Ok(DomainPayload {
            domain,
            item_count: 3,
            ui_settings: (domain == DataDomain::UiSettings).then(|| UiSettings {
                enable_color_impaired_mode: true,
            }),
        })
    }

    fn system_status(&self) -> Result<SystemStatus> {
        if self.status_fails {
            bail!("connection refused");
        }
        Ok(SystemStatus {
            version: "3.0.10".to_string(),
            is_updated: false,
        })
    }
}

#[derive(Default)]
struct MemoryLayout {
    stored: Mutex<Option<bool>>,
    writes: Mutex<Vec<bool>>,
}

impl LayoutStore for MemoryLayout {
    fn load_sidebar_visible(&self) -> Result<Option<bool>> {
        Ok(*self.stored.lock().unwrap())
    }

    fn save_sidebar_visible(&self, visible: bool) -> Result<()> {
        *self.stored.lock().unwrap() = Some(visible);
        self.writes.lock().unwrap().push(visible);
        Ok(())
    }
}

struct Harness {
    events: mpsc::UnboundedReceiver<Event>,
    commands: mpsc::UnboundedSender<Command>,
    handle: tokio::task::JoinHandle<Result<()>>,
}

impl Harness {
    fn start(reference: Arc<FakeReference>, layout: Arc<MemoryLayout>) -> Self {
        let (mut service, events, commands) = AppService::new(reference, layout);
        let handle = tokio::spawn(async move { service.start().await });
        Self {
            events,
            commands,
            handle,
        }
    }

    fn send(&self, cmd: Command) {
        self.commands.send(cmd).expect("service running");
    }

    /// Receive events until `done` matches one, failing after a timeout
    async fn until(&mut self, done: impl Fn(&Event) -> bool) -> Vec<Event> {
        let mut seen = Vec::new();
        loop {
            let event = tokio::time::timeout(Duration::from_secs(5), self.events.recv())
                .await
                .expect("timed out waiting for event")
                .expect("event channel closed");
            let stop = done(&event);
            seen.push(event);
            if stop {
                return seen;
            }
        }
    }

    async fn stop(self) -> Result<()> {
        drop(self.commands);
        self.handle.await?
    }
}

#[tokio::test]
async fn test_fetch_domain_emits_populated() -> Result<()> {
    let mut harness = Harness::start(Arc::new(FakeReference::default()), Arc::default());

    harness.send(Command::Fetch { target: FetchTarget::Domain(DataDomain::Tags) });
    let events = harness.until(|e| matches!(e, Event::DomainPopulated { .. })).await;

    assert!(events.contains(&Event::DomainPopulated { domain: DataDomain::Tags, item_count: 3 }));
    harness.stop().await
}

#[tokio::test]
async fn test_ui_settings_payload_precedes_populated() -> Result<()> {
    let mut harness = Harness::start(Arc::new(FakeReference::default()), Arc::default());

    harness.send(Command::Fetch { target: FetchTarget::Domain(DataDomain::UiSettings) });
    let events = harness.until(|e| matches!(e, Event::DomainPopulated { .. })).await;

    let settings_at = events
        .iter()
        .position(|e| matches!(e, Event::UiSettingsLoaded { .. }))
        .expect("settings event");
    assert!(settings_at < events.len() - 1);
    harness.stop().await
}

#[tokio::test]
async fn test_fetch_failure_emits_domain_failed() -> Result<()> {
    let reference = Arc::new(FakeReference::failing(&[DataDomain::QualityProfiles]));
    let mut harness = Harness::start(reference, Arc::default());

    harness.send(Command::Fetch { target: FetchTarget::Domain(DataDomain::QualityProfiles) });
    let events = harness.until(|e| matches!(e, Event::DomainFailed { .. })).await;

    match events.last() {
        Some(Event::DomainFailed { domain, error }) => {
            assert_eq!(*domain, DataDomain::QualityProfiles);
            assert!(error.message.contains("HTTP 500"));
        }
        other => panic!("unexpected event: {:?}", other),
    }
    harness.stop().await
}

#[tokio::test]
async fn test_system_status_updates_connectivity() -> Result<()> {
    let mut harness = Harness::start(Arc::new(FakeReference::default()), Arc::default());
    harness.send(Command::Fetch { target: FetchTarget::SystemStatus });
    let events = harness.until(|e| matches!(e, Event::ConnectionChanged { .. })).await;
    assert!(events.contains(&Event::ConnectionChanged { is_disconnected: false }));
    harness.stop().await?;

    let offline = Arc::new(FakeReference { status_fails: true, ..FakeReference::default() });
    let mut harness = Harness::start(offline, Arc::default());
    harness.send(Command::Fetch { target: FetchTarget::SystemStatus });
    let events = harness.until(|e| matches!(e, Event::ConnectionChanged { .. })).await;
    assert!(events.contains(&Event::ConnectionChanged { is_disconnected: true }));
    harness.stop().await
}

#[tokio::test]
async fn test_sidebar_visibility_is_persisted_then_published() -> Result<()> {
    let layout = Arc::new(MemoryLayout::default());
    let mut harness = Harness::start(Arc::new(FakeReference::default()), layout.clone());

    harness.send(Command::SetSidebarVisible { visible: false });
    harness
        .until(|e| matches!(e, Event::SidebarVisibilityChanged { visible: false }))
        .await;

    assert_eq!(*layout.writes.lock().unwrap(), vec![false]);
    harness.stop().await
}

#[tokio::test]
async fn test_start_restores_persisted_sidebar_flag() -> Result<()> {
    let layout = Arc::new(MemoryLayout {
        stored: Mutex::new(Some(false)),
        ..MemoryLayout::default()
    });
    let mut harness = Harness::start(Arc::new(FakeReference::default()), layout);

    let events = harness
        .until(|e| matches!(e, Event::SidebarVisibilityChanged { .. }))
        .await;

    assert_eq!(events.last(), Some(&Event::SidebarVisibilityChanged { visible: false }));
    harness.stop().await
}

#[tokio::test]
async fn test_retry_clears_error_then_refetches() -> Result<()> {
    let reference = Arc::new(FakeReference::failing(&[DataDomain::Tags]));
    let mut harness = Harness::start(reference.clone(), Arc::default());

    harness.send(Command::Fetch { target: FetchTarget::Domain(DataDomain::Tags) });
    harness.until(|e| matches!(e, Event::DomainFailed { .. })).await;

    reference.heal(DataDomain::Tags);
    harness.send(Command::RetryFailed { domains: vec![DataDomain::Tags] });
    let events = harness.until(|e| matches!(e, Event::DomainPopulated { .. })).await;

    let cleared_at = events
        .iter()
        .position(|e| *e == Event::DomainErrorCleared { domain: DataDomain::Tags })
        .expect("cleared event");
    let populated_at = events.len() - 1;
    assert!(cleared_at < populated_at);
    harness.stop().await
}

#[tokio::test]
async fn test_quit_stops_service() -> Result<()> {
    let mut harness = Harness::start(Arc::new(FakeReference::default()), Arc::default());

    harness.send(Command::Quit);
    harness.until(|e| matches!(e, Event::QuitRequested)).await;

    tokio::time::timeout(Duration::from_secs(5), harness.handle).await???;
    Ok(())
}
