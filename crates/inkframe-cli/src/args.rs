//! CLI argument definitions using clap
//!
//! - inkframe show               # Theme a fresh launch would use
//! - inkframe toggle             # Flip and remember
//! - inkframe set dark           # Remember an explicit choice
//! - inkframe reset              # Forget the choice, follow the system
//! - inkframe styles             # Derived style sheet as JSON

use clap::{Parser, Subcommand, ValueEnum};
use inkframe_core::{ColorScheme, InkframeConfig, Mode};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "inkframe")]
#[command(about = "Inspect and change the inkframe theme preference")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, env = "INKFRAME_CONFIG")]
    pub config: Option<PathBuf>,

    /// Preference file to read and write (overrides the config file)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Palette file replacing the built-in palettes
    #[arg(long, global = true)]
    pub palettes: Option<PathBuf>,

    /// Ambient appearance to assume instead of reading the environment
    #[arg(long, global = true, value_enum)]
    pub appearance: Option<AppearanceArg>,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Flags take precedence over the config file and environment
    pub fn apply_to(&self, config: &mut InkframeConfig) {
        if let Some(store) = &self.store {
            config.store_path = store.clone();
        }
        if let Some(palettes) = &self.palettes {
            config.palette_path = Some(palettes.clone());
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the theme a fresh launch would use
    Show {
        /// Print the theme as JSON
        #[arg(long)]
        json: bool,
    },

    /// Switch to the opposite theme and remember it
    Toggle,

    /// Remember an explicit theme
    Set {
        #[arg(value_enum)]
        mode: ModeArg,
    },

    /// Forget the remembered theme and follow the system appearance
    Reset,

    /// Print the derived style sheet as JSON
    Styles {
        /// Style sheet for this mode instead of the active one
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    Light,
    Dark,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Light => Mode::Light,
            ModeArg::Dark => Mode::Dark,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppearanceArg {
    Light,
    Dark,
    Unspecified,
}

impl From<AppearanceArg> for ColorScheme {
    fn from(arg: AppearanceArg) -> Self {
        match arg {
            AppearanceArg::Light => ColorScheme::Light,
            AppearanceArg::Dark => ColorScheme::Dark,
            AppearanceArg::Unspecified => ColorScheme::Unspecified,
        }
    }
}
