//! Style sheet output

use inkframe_core::{Mode, ThemeContext, ThemeController};

/// Print the style sheet for `mode`, or for the theme a fresh launch would use
pub async fn print(controller: &ThemeController, mode: Option<Mode>) -> anyhow::Result<()> {
    let ctx = match mode {
        Some(mode) => ThemeContext::new(controller.resolver().resolve(Some(mode.is_dark()))),
        None => controller.restore().await,
    };

    println!("{}", serde_json::to_string_pretty(ctx.styles())?);
    Ok(())
}
