use anyhow::{Context, Result};
use serde_json::Value;
use showdeck_core::domain::{DataDomain, DomainPayload, SystemStatus, UiSettings};
use showdeck_core::ports::ReferenceDataPort;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the system status document inside the library directory
pub const SYSTEM_STATUS_FILE: &str = "system_status.json";

/// Reference data adapter that reads one JSON document per domain from a
/// library directory, e.g. `series.json` or `quality_profiles.json`
pub struct DirectoryReferenceSource {
    library_dir: PathBuf,
}

impl DirectoryReferenceSource {
    pub fn new<P: AsRef<Path>>(library_dir: P) -> Self {
        Self {
            library_dir: library_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the document backing `domain`
    pub fn domain_path(&self, domain: DataDomain) -> PathBuf {
        self.library_dir.join(format!("{}.json", domain.key()))
    }

    fn read_json(&self, path: &Path) -> Result<Value> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}

impl ReferenceDataPort for DirectoryReferenceSource {
    fn load(&self, domain: DataDomain) -> Result<DomainPayload> {
        let path = self.domain_path(domain);
        debug!("Loading {} from {}", domain, path.display());
        let document = self.read_json(&path)?;

        let item_count = match &document {
            Value::Array(items) => items.len(),
            Value::Null => 0,
            _ => 1,
        };

        let ui_settings = if domain == DataDomain::UiSettings {
            let settings: UiSettings = serde_json::from_value(document)
                .with_context(|| format!("Invalid UI settings in {}", path.display()))?;
            Some(settings)
        } else {
            None
        };

        Ok(DomainPayload {
            domain,
            item_count,
            ui_settings,
        })
    }

    fn system_status(&self) -> Result<SystemStatus> {
        let path = self.library_dir.join(SYSTEM_STATUS_FILE);
        let document = self.read_json(&path)?;
        serde_json::from_value(document)
            .with_context(|| format!("Invalid system status in {}", path.display()))
    }
}
