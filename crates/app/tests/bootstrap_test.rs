//! End-to-end bootstrap tests against a library directory on disk

use anyhow::Result;
use showdeck::adapters::persistence::FileLayoutStore;
use showdeck::adapters::reference::{DirectoryReferenceSource, SYSTEM_STATUS_FILE};
use showdeck::shell::{run_check, wire};
use showdeck::tui::{TuiMessage, TuiUpdate};
use showdeck_core::app::{Command, ViewState};
use showdeck_core::domain::{DataDomain, Event};
use showdeck_core::error::BootstrapError;
use showdeck_core::ports::{AppConfig, LayoutStore, UiConfig};
use crossterm::event::{KeyCode, KeyModifiers};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

fn write_library(dir: &Path, skip: &[DataDomain]) -> Result<()> {
    fs::create_dir_all(dir)?;
    let source = DirectoryReferenceSource::new(dir);
    for domain in DataDomain::ALL {
        if skip.contains(&domain) {
            continue;
        }
        let body = match domain {
            DataDomain::UiSettings => r#"{"enableColorImpairedMode": false}"#,
            DataDomain::Series => r#"[{"title": "A"}, {"title": "B"}]"#,
            _ => "[]",
        };
        fs::write(source.domain_path(domain), body)?;
    }
    fs::write(dir.join(SYSTEM_STATUS_FILE), r#"{"version": "3.0.10", "isUpdated": false}"#)?;
    Ok(())
}

fn config_in(temp_dir: &TempDir) -> AppConfig {
    AppConfig {
        version: 1,
        library_dir: temp_dir.path().join("library"),
        state_dir: temp_dir.path().join("state"),
        ui: UiConfig::default(),
    }
}

#[tokio::test]
async fn test_complete_library_is_ready() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = config_in(&temp_dir);
    write_library(&config.library_dir, &[])?;

    let report = run_check(&config, Duration::from_secs(5)).await?;

    assert_eq!(report.state, ViewState::Ready);
    assert_eq!(report.triggered, 7);
    assert!(report.failures.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_missing_domain_selects_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = config_in(&temp_dir);
    write_library(&config.library_dir, &[DataDomain::QualityProfiles])?;

    let report = run_check(&config, Duration::from_secs(5)).await?;

    assert_eq!(report.state, ViewState::Error);
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(
        &report.failures[0],
        BootstrapError::DomainFetch { domain: DataDomain::QualityProfiles, .. }
    ));
    Ok(())
}

#[tokio::test]
async fn test_unwritable_state_dir_selects_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = config_in(&temp_dir);
    write_library(&config.library_dir, &[])?;
    fs::write(&config.state_dir, "a file, not a directory")?;

    let report = run_check(&config, Duration::from_secs(5)).await?;

    assert_eq!(report.state, ViewState::Error);
    assert!(report.failures.contains(&BootstrapError::CapabilityUnavailable));
    Ok(())
}

#[test]
fn test_probe_leaves_no_residue() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = config_in(&temp_dir);

    let _wiring = wire(&config);

    let leftovers: Vec<_> = fs::read_dir(&config.state_dir)?.collect();
    assert!(leftovers.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_sidebar_toggle_round_trips_through_layout_store() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = config_in(&temp_dir);
    let mut wiring = wire(&config);

    for domain in DataDomain::ALL {
        wiring.model.apply_event(&Event::DomainPopulated { domain, item_count: 1 });
    }
    assert!(wiring.model.projection.chrome.is_sidebar_visible);

    let message = TuiUpdate::handle_key(&mut wiring.model, KeyCode::Char('b'), KeyModifiers::NONE)?;
    let command = match message {
        TuiMessage::Command(cmd) => cmd,
        other => panic!("expected command, got {:?}", other),
    };
    assert_eq!(command, Command::SetSidebarVisible { visible: false });

    let mut service = wiring.service;
    let handle = tokio::spawn(async move { service.start().await });
    wiring.command_tx.send(command)?;

    loop {
        let event = tokio::time::timeout(Duration::from_secs(5), wiring.event_rx.recv())
            .await?
            .expect("event channel closed");
        let done = matches!(event, Event::SidebarVisibilityChanged { visible: false });
        wiring.model.apply_event(&event);
        if done {
            break;
        }
    }

    assert!(!wiring.model.projection.chrome.is_sidebar_visible);
    assert_eq!(
        FileLayoutStore::new(&config.state_dir).load_sidebar_visible()?,
        Some(false)
    );

    drop(wiring.command_tx);
    handle.await??;
    Ok(())
}
