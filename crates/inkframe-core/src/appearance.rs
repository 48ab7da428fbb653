//! Ambient appearance signal
//!
//! The host's system-wide light/dark preference. Sources are polled once per
//! resolution; there is no change notification.

use crate::error::InkError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variable that pins the ambient scheme
pub const COLOR_SCHEME_ENV: &str = "INKFRAME_COLOR_SCHEME";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
    #[default]
    Unspecified,
}

impl ColorScheme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = InkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "unspecified" | "" => Ok(Self::Unspecified),
            _ => Err(InkError::InvalidMode(s.to_string())),
        }
    }
}

/// Read-only view of the host appearance
pub trait AppearanceSource: Send + Sync {
    fn color_scheme(&self) -> ColorScheme;
}

/// A source that always reports the same scheme
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedAppearance(pub ColorScheme);

impl AppearanceSource for FixedAppearance {
    fn color_scheme(&self) -> ColorScheme {
        self.0
    }
}

/// Reads the scheme from the process environment.
///
/// `INKFRAME_COLOR_SCHEME` wins when it holds `dark` or `light`. Otherwise the
/// terminal `COLORFGBG` convention is consulted (`fg;bg`, where background
/// indices 0-6 and 8 are dark). Anything else is `Unspecified`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvAppearance;

impl EnvAppearance {
    pub fn new() -> Self {
        Self
    }

    /// Decide from raw variable values
    pub fn from_values(scheme: Option<&str>, colorfgbg: Option<&str>) -> ColorScheme {
        if let Some(parsed) = scheme.and_then(|v| v.parse::<ColorScheme>().ok()) {
            if parsed != ColorScheme::Unspecified {
                return parsed;
            }
        }

        let background = colorfgbg
            .and_then(|v| v.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok());

        match background {
            Some(0..=6 | 8) => ColorScheme::Dark,
            Some(7 | 9..=15) => ColorScheme::Light,
            _ => ColorScheme::Unspecified,
        }
    }
}

impl AppearanceSource for EnvAppearance {
    fn color_scheme(&self) -> ColorScheme {
        let scheme = std::env::var(COLOR_SCHEME_ENV).ok();
        let colorfgbg = std::env::var("COLORFGBG").ok();
        Self::from_values(scheme.as_deref(), colorfgbg.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_appearance() {
        assert_eq!(FixedAppearance(ColorScheme::Dark).color_scheme(), ColorScheme::Dark);
        assert_eq!(FixedAppearance::default().color_scheme(), ColorScheme::Unspecified);
    }

    #[test]
    fn test_explicit_variable_wins() {
        assert_eq!(EnvAppearance::from_values(Some("dark"), Some("0;15")), ColorScheme::Dark);
        assert_eq!(EnvAppearance::from_values(Some("LIGHT"), Some("15;0")), ColorScheme::Light);
    }

    #[test]
    fn test_colorfgbg_fallback() {
        assert_eq!(EnvAppearance::from_values(None, Some("15;0")), ColorScheme::Dark);
        assert_eq!(EnvAppearance::from_values(None, Some("0;15")), ColorScheme::Light);
        assert_eq!(EnvAppearance::from_values(None, Some("0;default;8")), ColorScheme::Dark);
        assert_eq!(
            EnvAppearance::from_values(Some("sepia"), Some("0;7")),
            ColorScheme::Light
        );
    }

    #[test]
    fn test_unspecified_when_nothing_usable() {
        assert_eq!(EnvAppearance::from_values(None, None), ColorScheme::Unspecified);
        assert_eq!(
            EnvAppearance::from_values(Some("unspecified"), Some("default")),
            ColorScheme::Unspecified
        );
        assert_eq!(EnvAppearance::from_values(None, Some("0;99")), ColorScheme::Unspecified);
    }
}
