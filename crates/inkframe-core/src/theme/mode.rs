//! Light / dark mode and its persisted sentinel

use crate::error::InkError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub const fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub const fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value written to the preference store
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Recognize a stored sentinel. Only the exact strings written by
    /// [`Mode::as_str`] match.
    pub fn from_sentinel(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lenient parsing for user input (CLI flags, config files)
impl FromStr for Mode {
    type Err = InkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_sentinel(&s.trim().to_ascii_lowercase())
            .ok_or_else(|| InkError::InvalidMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dark() {
        assert_eq!(Mode::from_dark(true), Mode::Dark);
        assert_eq!(Mode::from_dark(false), Mode::Light);
    }

    #[test]
    fn test_opposite_is_involution() {
        for mode in [Mode::Light, Mode::Dark] {
            assert_ne!(mode.opposite(), mode);
            assert_eq!(mode.opposite().opposite(), mode);
        }
    }

    #[test]
    fn test_sentinel_is_exact() {
        assert_eq!(Mode::from_sentinel("dark"), Some(Mode::Dark));
        assert_eq!(Mode::from_sentinel("light"), Some(Mode::Light));
        assert_eq!(Mode::from_sentinel("Dark"), None);
        assert_eq!(Mode::from_sentinel(" dark"), None);
        assert_eq!(Mode::from_sentinel("true"), None);
        assert_eq!(Mode::from_sentinel(""), None);
    }

    #[test]
    fn test_from_str_is_lenient() {
        assert_eq!(" DARK ".parse::<Mode>().unwrap(), Mode::Dark);
        assert!(matches!("dim".parse::<Mode>(), Err(InkError::InvalidMode(_))));
    }
}
