//! CLI console utilities

use colored::*;
use inkframe_core::Palette;

/// CLI console for formatted output
pub struct CliConsole {
    verbose: bool,
}

impl CliConsole {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message (verbose only)
    pub fn info(&self, message: &str) {
        if self.verbose {
            println!("{} {}", "ℹ".blue().bold(), message);
        }
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    pub fn print_header(&self, title: &str) {
        println!();
        println!("{}", title.bold().underline());
        println!("{}", "=".repeat(title.len()).dimmed());
    }

    /// One line per role with a truecolor swatch
    pub fn print_palette(&self, palette: &Palette) {
        for (role, color) in palette.iter() {
            let (r, g, b) = color.tuple();
            println!(
                "  {}  {:<14} {}",
                "    ".on_truecolor(r, g, b),
                role.as_str(),
                color.to_hex().dimmed()
            );
        }
    }
}
