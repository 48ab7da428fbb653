//! CLI commands

pub mod styles;
pub mod theme;
