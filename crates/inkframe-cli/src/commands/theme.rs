//! Theme preference commands

use crate::console::CliConsole;
use inkframe_core::{Mode, ThemeContext, ThemeController};

/// Show the theme a fresh launch would use
pub async fn show(
    controller: &ThemeController,
    console: &CliConsole,
    json: bool,
) -> anyhow::Result<()> {
    let ctx = controller.restore().await;

    if json {
        println!("{}", serde_json::to_string_pretty(ctx.theme().as_ref())?);
        return Ok(());
    }

    print_theme(console, "Active theme", &ctx);
    Ok(())
}

pub async fn toggle(controller: &ThemeController, console: &CliConsole) -> anyhow::Result<()> {
    let before = controller.restore().await;
    let after = controller.toggle().await;
    controller.flush().await;

    console.info(&format!("Previous theme: {}", before.mode()));
    console.success(&format!("Switched to {} theme", after.mode()));
    Ok(())
}

pub async fn set(
    controller: &ThemeController,
    console: &CliConsole,
    mode: Mode,
) -> anyhow::Result<()> {
    let ctx = controller.set_mode(mode).await;
    controller.flush().await;
    console.success(&format!("Theme set to {}", ctx.mode()));
    Ok(())
}

/// Forget the saved choice and report what the system appearance resolves to
pub async fn reset(controller: &ThemeController, console: &CliConsole) -> anyhow::Result<()> {
    let ctx = controller.clear_preference().await;
    controller.flush().await;
    console.success(&format!(
        "Theme preference cleared, following system appearance ({})",
        ctx.mode()
    ));
    Ok(())
}

fn print_theme(console: &CliConsole, title: &str, ctx: &ThemeContext) {
    console.print_header(title);
    println!("Mode: {}", ctx.mode());
    println!();
    console.print_palette(ctx.theme().colors());
}
