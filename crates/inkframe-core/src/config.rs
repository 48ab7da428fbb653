//! Configuration
//!
//! Loaded from `<config dir>/inkframe/config.toml` when present, then
//! overridden by environment variables:
//! - `INKFRAME_STORE_PATH`: preference file location
//! - `INKFRAME_PREFERENCE_KEY`: key the theme choice is stored under
//!
//! ```toml
//! preference_key = "theme"
//! store_path = "/home/me/.config/inkframe/preferences.json"
//! palette_path = "/home/me/.config/inkframe/palettes.toml"
//!
//! [logging]
//! level = "info"
//! format = "compact"
//! ```

use crate::error::{InkError, InkResult};
use crate::theme::ThemeSet;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_PREFERENCE_KEY: &str = "theme";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const STORE_FILE_NAME: &str = "preferences.json";

pub const STORE_PATH_ENV: &str = "INKFRAME_STORE_PATH";
pub const PREFERENCE_KEY_ENV: &str = "INKFRAME_PREFERENCE_KEY";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingConfig {
    /// Filter directive for the subscriber. `verbose` forces debug output.
    pub fn directive(&self, verbose: bool) -> String {
        if verbose {
            "debug".to_string()
        } else if self.level.trim().is_empty() {
            Self::default().level
        } else {
            self.level.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InkframeConfig {
    /// Key the theme choice is stored under
    pub preference_key: String,
    /// Preference file location
    pub store_path: PathBuf,
    /// Optional palette file replacing the built-in palettes
    pub palette_path: Option<PathBuf>,
    pub logging: LoggingConfig,
}

impl Default for InkframeConfig {
    fn default() -> Self {
        Self {
            preference_key: DEFAULT_PREFERENCE_KEY.to_string(),
            store_path: Self::default_store_path(),
            palette_path: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl InkframeConfig {
    /// `<config dir>/inkframe`, falling back to `~/.config/inkframe`
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".config")
            })
            .join("inkframe")
    }

    pub fn default_config_path() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE_NAME)
    }

    pub fn default_store_path() -> PathBuf {
        Self::config_dir().join(STORE_FILE_NAME)
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used if present and built-in defaults otherwise. Environment overrides
    /// are applied last.
    pub fn load(path: Option<&Path>) -> InkResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::default_config_path();
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    debug!("No config file at {}, using defaults", default_path.display());
                    Self::default()
                }
            }
        };

        config.apply_overrides(
            std::env::var(STORE_PATH_ENV).ok(),
            std::env::var(PREFERENCE_KEY_ENV).ok(),
        );
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> InkResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| InkError::io(path, e))?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| InkError::config(format!("{}: {e}", path.display())))?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> InkResult<Self> {
        toml::from_str(content).map_err(|e| InkError::config(e.to_string()))
    }

    /// Apply override values; empty strings are ignored
    pub fn apply_overrides(&mut self, store_path: Option<String>, preference_key: Option<String>) {
        if let Some(path) = store_path.filter(|p| !p.trim().is_empty()) {
            self.store_path = PathBuf::from(path);
        }
        if let Some(key) = preference_key.filter(|k| !k.trim().is_empty()) {
            self.preference_key = key;
        }
    }

    pub fn validate(&self) -> InkResult<()> {
        if self.preference_key.trim().is_empty() {
            return Err(InkError::config("preference_key must not be empty"));
        }
        if self.store_path.as_os_str().is_empty() {
            return Err(InkError::config("store_path must not be empty"));
        }
        Ok(())
    }

    /// The configured palettes, or the built-in ones
    pub fn load_themes(&self) -> InkResult<ThemeSet> {
        match &self.palette_path {
            Some(path) => ThemeSet::load(path),
            None => Ok(ThemeSet::builtin()),
        }
    }
}
