use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "emoji-scan";
const CONFIG_FILE: &str = "config.json";

/// Overrides the application data directory
pub const HOME_ENV: &str = "EMOJI_SCAN_HOME";

/// Overrides the configured dictionary path
pub const DICTIONARY_ENV: &str = "EMOJI_SCAN_DICTIONARY";

/// Application configuration stored in the app data directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// External dictionary file. The embedded dataset is used when unset.
    #[serde(default)]
    pub dictionary_path: Option<PathBuf>,

    /// Use the embedded dataset if the external dictionary cannot be loaded
    #[serde(default = "default_fallback_to_embedded")]
    pub fallback_to_embedded: bool,
}

fn default_fallback_to_embedded() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dictionary_path: None,
            fallback_to_embedded: default_fallback_to_embedded(),
        }
    }
}

impl AppConfig {
    /// Load config from the app data directory, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
            let config: AppConfig = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file {}", config_path.display()))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the app data directory
    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(config_path, content)
            .context("Failed to write config file")?;
        Ok(())
    }

    /// The dictionary to load: `cli` first, then the environment, then config
    pub fn resolve_dictionary_path(&self, cli: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = cli {
            return Some(path.to_path_buf());
        }
        std::env::var_os(DICTIONARY_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| self.dictionary_path.clone())
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let app_dir = get_app_data_dir()?;
    Ok(app_dir.join(CONFIG_FILE))
}

/// Get the application data directory.
///
/// Nothing is created here; [`AppConfig::save`] creates it on first write.
pub fn get_app_data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }

    let base = if cfg!(target_os = "macos") {
        dirs::home_dir()
            .map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: use XDG_DATA_HOME or ~/.local/share
        dirs::data_dir()
    };

    let base = base.context("Could not determine app data directory")?;
    Ok(base.join(APP_NAME))
}
