//! Theme System - Palettes, Modes, and Styles
//!
//! A [`Theme`] pairs a [`Mode`] with a complete [`Palette`]. Themes are
//! registered once in a [`ThemeSet`] and handed out as shared `Arc<Theme>`
//! handles, so switching modes replaces the handle instead of editing colors.

pub mod color;
pub mod mode;
pub mod palette;
pub mod role;
pub mod set;
pub mod styles;

pub use color::Color;
pub use mode::Mode;
pub use palette::Palette;
pub use role::ColorRole;
pub use set::ThemeSet;
pub use styles::{Metrics, Shadow, Style, StyleKey, StyleSheet};

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// An immutable palette bound to a light or dark mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    mode: Mode,
    colors: Palette,
}

impl Theme {
    pub fn new(mode: Mode, colors: Palette) -> Self {
        Self { mode, colors }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    pub fn colors(&self) -> &Palette {
        &self.colors
    }

    /// Color for a semantic role
    pub fn color(&self, role: ColorRole) -> Color {
        self.colors.get(role)
    }
}

impl Serialize for Theme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Theme", 2)?;
        state.serialize_field("dark", &self.is_dark())?;
        state.serialize_field("colors", &self.colors)?;
        state.end()
    }
}
