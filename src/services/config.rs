//! Persisted interface configuration.

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::env::current_exe;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Returns the path to the configuration file.
fn config_file_path() -> io::Result<PathBuf> {
    let current = current_exe()?;
    let here = current.parent().unwrap_or_else(|| Path::new("."));
    Ok(here.join(CONFIG_FILE_NAME))
}

/// The interface configuration with all fields optional, as stored on
/// disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
struct UiConfigOpt {
    /// The library folder.
    library_folder: Option<PathBuf>,
    /// Whether the sidebar is expanded.
    sidebar_open: Option<bool>,
}

/// The interface configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UiConfig {
    /// The library folder.
    pub library_folder: Option<PathBuf>,
    /// Whether the sidebar is expanded.
    pub sidebar_open: bool,
}

impl From<UiConfigOpt> for UiConfig {
    fn from(value: UiConfigOpt) -> Self {
        Self {
            library_folder: value.library_folder,
            sidebar_open: value.sidebar_open.unwrap_or(true),
        }
    }
}

impl From<UiConfig> for UiConfigOpt {
    fn from(value: UiConfig) -> Self {
        Self {
            library_folder: value.library_folder,
            sidebar_open: Some(value.sidebar_open),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::from(UiConfigOpt::default())
    }
}

impl UiConfig {
    /// Loads the configuration state from the file.
    pub async fn load() -> io::Result<Self> {
        let config_path = config_file_path()?;

        if config_path.exists() {
            let config_bytes = fs::read(config_path).await?;
            let config_opt = serde_json::from_slice::<UiConfigOpt>(&config_bytes)?;
            Ok(Self::from(config_opt))
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration state to the file.
    pub async fn save(&self) -> io::Result<()> {
        let config_path = config_file_path()?;
        let config_opt = UiConfigOpt::from(self.clone());
        let config_bytes = serde_json::to_vec(&config_opt)?;
        fs::write(config_path, config_bytes).await?;
        Ok(())
    }
}

/// Configuration tests.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UiConfig::default();
        assert_eq!(config.library_folder, None);
        assert!(config.sidebar_open);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config_opt = serde_json::from_str::<UiConfigOpt>("{}").unwrap();
        let config = UiConfig::from(config_opt);
        assert_eq!(config, UiConfig::default());

        let config_opt =
            serde_json::from_str::<UiConfigOpt>(r#"{"library_folder":"/videos"}"#).unwrap();
        let config = UiConfig::from(config_opt);
        assert_eq!(config.library_folder, Some(PathBuf::from("/videos")));
        assert!(config.sidebar_open);
    }

    #[test]
    fn test_round_trip() {
        let config = UiConfig {
            library_folder: Some(PathBuf::from("/videos")),
            sidebar_open: false,
        };

        let round_tripped = UiConfig::from(UiConfigOpt::from(config.clone()));
        assert_eq!(round_tripped, config);
    }
}
