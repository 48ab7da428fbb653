//! Semantic color roles screens index palettes by

use crate::error::InkError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorRole {
    Primary,
    Secondary,
    Background,
    Surface,
    Text,
    TextSecondary,
    Border,
    Success,
    Warning,
    Error,
}

impl ColorRole {
    pub const COUNT: usize = 10;

    /// Every role, in palette order
    pub const ALL: [ColorRole; Self::COUNT] = [
        Self::Primary,
        Self::Secondary,
        Self::Background,
        Self::Surface,
        Self::Text,
        Self::TextSecondary,
        Self::Border,
        Self::Success,
        Self::Warning,
        Self::Error,
    ];

    /// Position of this role in [`ColorRole::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Key used in palette files and serialized output
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Background => "background",
            Self::Surface => "surface",
            Self::Text => "text",
            Self::TextSecondary => "textSecondary",
            Self::Border => "border",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorRole {
    type Err = InkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| InkError::UnknownRole(s.to_string()))
    }
}
