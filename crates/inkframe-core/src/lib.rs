//! Inkframe Core Library
//!
//! Theme resolution for the inkframe tattoo visualizer: the light and dark
//! palettes, the style sheet screens derive from them, the ambient appearance
//! signal, and the preference store that remembers the user's choice across
//! launches.
//!
//! # Example
//! ```ignore
//! let config = InkframeConfig::load(None)?;
//! let resolver = ThemeResolver::from_config(&config, Arc::new(EnvAppearance::new()))?;
//! let controller = ThemeController::new(Arc::new(resolver));
//!
//! // Renders immediately with the ambient theme, then picks up the saved one
//! controller.restore().await;
//! let ctx = controller.current();
//! ```

pub mod appearance;
pub mod config;
pub mod error;
pub mod resolver;
pub mod state;
pub mod storage;
pub mod theme;

// Re-export commonly used types
pub use appearance::{AppearanceSource, ColorScheme, EnvAppearance, FixedAppearance};
pub use config::{InkframeConfig, LogFormat, LoggingConfig};
pub use error::{InkError, InkResult};
pub use resolver::ThemeResolver;
pub use state::{ThemeContext, ThemeController, ThemeState};
pub use storage::{BackendType, FileStore, MemoryStore, PreferenceStore, StorageError};
pub use theme::{Color, ColorRole, Mode, Palette, StyleKey, StyleSheet, Theme, ThemeSet};
