//! Theme resolution
//!
//! Decides which registered theme is active and keeps that decision in line
//! with the user's last explicit choice across launches. Precedence:
//!
//! 1. an explicit override passed by the caller
//! 2. the persisted preference (read once at startup)
//! 3. the ambient appearance signal (dark only when it says exactly "dark")
//!
//! Storage failures never reach the caller. Reads fall back to the ambient
//! theme and writes are best effort: the returned theme is authoritative for
//! the session even if it could not be saved.

use crate::appearance::{AppearanceSource, ColorScheme};
use crate::config::{DEFAULT_PREFERENCE_KEY, InkframeConfig};
use crate::error::InkResult;
use crate::storage::{FileStore, PreferenceStore};
use crate::theme::{Mode, Theme, ThemeSet};
use std::sync::Arc;
use tracing::{debug, error, warn};

pub struct ThemeResolver {
    themes: ThemeSet,
    store: Arc<dyn PreferenceStore>,
    appearance: Arc<dyn AppearanceSource>,
    key: String,
}

impl ThemeResolver {
    /// Resolver over the built-in palettes using the default preference key
    pub fn new(store: Arc<dyn PreferenceStore>, appearance: Arc<dyn AppearanceSource>) -> Self {
        Self {
            themes: ThemeSet::builtin(),
            store,
            appearance,
            key: DEFAULT_PREFERENCE_KEY.to_string(),
        }
    }

    /// Resolver backed by the file store and palettes named in `config`
    pub fn from_config(
        config: &InkframeConfig,
        appearance: Arc<dyn AppearanceSource>,
    ) -> InkResult<Self> {
        let store = Arc::new(FileStore::new(&config.store_path));
        Ok(Self::new(store, appearance)
            .with_themes(config.load_themes()?)
            .with_key(&config.preference_key))
    }

    pub fn with_themes(mut self, themes: ThemeSet) -> Self {
        self.themes = themes;
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn themes(&self) -> &ThemeSet {
        &self.themes
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &Arc<dyn PreferenceStore> {
        &self.store
    }

    /// Resolve without touching storage.
    ///
    /// `Some(true)` is dark and `Some(false)` light. `None` polls the ambient
    /// signal; only an exact dark signal selects the dark theme.
    pub fn resolve(&self, explicit: Option<bool>) -> Arc<Theme> {
        let mode = match explicit {
            Some(dark) => Mode::from_dark(dark),
            None => self.ambient_mode(),
        };
        self.themes.get(mode)
    }

    fn ambient_mode(&self) -> Mode {
        let scheme = self.appearance.color_scheme();
        debug!("Ambient color scheme: {}", scheme);
        Mode::from_dark(scheme == ColorScheme::Dark)
    }

    /// Startup resolution: the persisted preference if one is readable and
    /// recognized, the ambient theme otherwise.
    pub async fn load_persisted_or_ambient(&self) -> Arc<Theme> {
        match self.store.get(&self.key).await {
            Ok(Some(value)) => match Mode::from_sentinel(&value) {
                Some(mode) => {
                    debug!("Using persisted theme preference: {}", mode);
                    self.themes.get(mode)
                }
                None => {
                    warn!(
                        "Ignoring unrecognized theme preference '{}' under key '{}'",
                        value, self.key
                    );
                    self.resolve(None)
                }
            },
            Ok(None) => {
                debug!("No persisted theme preference, using ambient signal");
                self.resolve(None)
            }
            Err(e) => {
                error!("Error loading theme preference: {}", e);
                self.resolve(None)
            }
        }
    }

    /// Switch to the opposite of `current` and persist the new mode
    pub async fn toggle(&self, current: &Theme) -> Arc<Theme> {
        self.set_mode(current.mode().opposite()).await
    }

    /// Select `mode` explicitly and persist it
    pub async fn set_mode(&self, mode: Mode) -> Arc<Theme> {
        let theme = self.themes.get(mode);
        self.persist_mode(mode).await;
        theme
    }

    /// Forget the persisted choice and fall back to the ambient theme
    pub async fn clear_preference(&self) -> Arc<Theme> {
        self.forget_preference().await;
        self.resolve(None)
    }

    /// Best-effort write of `mode` under the preference key
    pub async fn persist_mode(&self, mode: Mode) {
        match self.store.set(&self.key, mode.as_str()).await {
            Ok(()) => debug!("Persisted theme preference: {}", mode),
            Err(e) => error!("Error saving theme preference: {}", e),
        }
    }

    /// Best-effort removal of the preference key
    pub async fn forget_preference(&self) {
        match self.store.remove(&self.key).await {
            Ok(()) => debug!("Cleared theme preference"),
            Err(e) => error!("Error clearing theme preference: {}", e),
        }
    }
}
