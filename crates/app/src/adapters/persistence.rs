use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use showdeck_core::ports::{AppConfig, ConfigStore, LayoutStore, UiConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "showdeck").context("Failed to determine project directories")
}

/// File-based configuration store that implements ConfigStore
pub struct FileConfigStore {
    config_path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Result<Self> {
        let config_path = Self::get_default_config_path()?;
        Ok(Self { config_path })
    }

    pub fn with_path<P: AsRef<Path>>(config_path: P) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
        }
    }

    fn get_default_config_path() -> Result<PathBuf> {
        Ok(project_dirs()?.config_dir().join("showdeck.toml"))
    }

    fn default_config() -> AppConfig {
        match project_dirs() {
            Ok(dirs) => AppConfig {
                version: 1,
                library_dir: dirs.data_dir().join("library"),
                state_dir: dirs.data_local_dir().join("state"),
                ui: UiConfig::default(),
            },
            Err(_) => AppConfig::default(),
        }
    }

    /// Create default config if it doesn't exist
    fn ensure_config_exists(&self) -> Result<()> {
        if !self.config_path.exists() {
            if let Some(parent) = self.config_path.parent() {
                fs::create_dir_all(parent).context("Failed to create config directory")?;
            }
            self.save(&Self::default_config())?;
        }
        Ok(())
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<AppConfig> {
        self.ensure_config_exists()?;

        let contents = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read config file: {}", self.config_path.display()))?;

        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", self.config_path.display()))?;

        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        let contents = toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        fs::write(&self.config_path, contents)
            .with_context(|| format!("Failed to write config file: {}", self.config_path.display()))?;

        Ok(())
    }
}

/// On-disk shape of the layout file
#[derive(Debug, Default, Serialize, Deserialize)]
struct LayoutState {
    sidebar_visible: Option<bool>,
}

/// Layout flags stored as TOML under the state directory
pub struct FileLayoutStore {
    path: PathBuf,
}

impl FileLayoutStore {
    pub fn new<P: AsRef<Path>>(state_dir: P) -> Self {
        Self {
            path: state_dir.as_ref().join("layout.toml"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LayoutStore for FileLayoutStore {
    fn load_sidebar_visible(&self) -> Result<Option<bool>> {
        if !self.path.exists() {
            debug!("No layout file at {}", self.path.display());
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read layout file: {}", self.path.display()))?;
        let state: LayoutState = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse layout file: {}", self.path.display()))?;

        Ok(state.sidebar_visible)
    }

    fn save_sidebar_visible(&self, visible: bool) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create state directory")?;
        }

        let state = LayoutState {
            sidebar_visible: Some(visible),
        };
        let contents = toml::to_string_pretty(&state).context("Failed to serialize layout to TOML")?;

        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write layout file: {}", self.path.display()))
    }
}
