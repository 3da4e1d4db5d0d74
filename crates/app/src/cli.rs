use clap::Parser;
use showdeck_core::ports::AppConfig;
use std::path::PathBuf;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "showdeck")]
#[command(about = "A terminal client for a TV-series library")]
pub struct CliArgs {
    /// Directory holding the library's reference data (overrides config)
    #[arg(long)]
    pub library_dir: Option<PathBuf>,

    /// Directory for local state such as the sidebar layout (overrides config)
    #[arg(long)]
    pub state_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Load everything without the TUI, print the outcome and exit
    #[arg(long)]
    pub check: bool,

    /// Seconds to wait for the reference data in --check mode
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,
}

impl CliArgs {
    /// CLI args override config file values
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(library_dir) = &self.library_dir {
            config.library_dir = library_dir.clone();
        }
        if let Some(state_dir) = &self.state_dir {
            config.state_dir = state_dir.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_library_dir_only() {
        let args = CliArgs::parse_from(["showdeck", "--library-dir", "/test/library"]);
        assert_eq!(args.library_dir, Some(PathBuf::from("/test/library")));
        assert_eq!(args.config, None);
        assert!(!args.check);
        assert_eq!(args.timeout, 10);
    }

    #[test]
    fn test_cli_parse_check_mode() {
        let args = CliArgs::parse_from(["showdeck", "--check", "--timeout", "3", "--config", "/custom/showdeck.toml"]);
        assert!(args.check);
        assert_eq!(args.timeout, 3);
        assert_eq!(args.config, Some(PathBuf::from("/custom/showdeck.toml")));
    }

    #[test]
    fn test_cli_override() {
        let args = CliArgs::parse_from(["showdeck", "--state-dir", "/override/state"]);
        let mut config = AppConfig {
            library_dir: PathBuf::from("/original/library"),
            state_dir: PathBuf::from("/original/state"),
            ..AppConfig::default()
        };

        args.apply_to(&mut config);

        assert_eq!(config.library_dir, PathBuf::from("/original/library"));
        assert_eq!(config.state_dir, PathBuf::from("/override/state"));
    }
}
