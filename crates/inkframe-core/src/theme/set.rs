//! The registered light and dark themes
//!
//! Palette files are TOML with one table per mode:
//!
//! ```toml
//! [light]
//! primary = "#1a1a1a"
//! background = "#f8fafc"
//! # ...every role
//!
//! [dark]
//! primary = "#00ff88"
//! # ...
//! ```

use super::mode::Mode;
use super::palette::Palette;
use super::Theme;
use crate::error::{InkError, InkResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PaletteFile {
    light: BTreeMap<String, String>,
    dark: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct ThemeSet {
    light: Arc<Theme>,
    dark: Arc<Theme>,
}

impl ThemeSet {
    /// The palettes the app ships with
    pub fn builtin() -> Self {
        Self::from_palettes(Palette::light(), Palette::dark())
    }

    pub fn from_palettes(light: Palette, dark: Palette) -> Self {
        Self {
            light: Arc::new(Theme::new(Mode::Light, light)),
            dark: Arc::new(Theme::new(Mode::Dark, dark)),
        }
    }

    /// Parse a palette file's contents
    pub fn from_toml_str(content: &str) -> InkResult<Self> {
        let file: PaletteFile = toml::from_str(content)
            .map_err(|e| InkError::config(format!("Invalid palette file: {e}")))?;

        let light = Palette::from_hex_table("light", &file.light)?;
        let dark = Palette::from_hex_table("dark", &file.dark)?;
        Ok(Self::from_palettes(light, dark))
    }

    /// Load a palette file from disk
    pub fn load(path: impl AsRef<Path>) -> InkResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| InkError::io(path, e))?;
        let set = Self::from_toml_str(&content)?;
        debug!("Loaded palettes from {}", path.display());
        Ok(set)
    }

    /// Shared handle to the theme for `mode`
    pub fn get(&self, mode: Mode) -> Arc<Theme> {
        match mode {
            Mode::Light => Arc::clone(&self.light),
            Mode::Dark => Arc::clone(&self.dark),
        }
    }

    pub fn light(&self) -> &Arc<Theme> {
        &self.light
    }

    pub fn dark(&self) -> &Arc<Theme> {
        &self.dark
    }
}

impl Default for ThemeSet {
    fn default() -> Self {
        Self::builtin()
    }
}
