//! Command routing logic for CLI

use crate::args::{Cli, Commands};
use crate::commands;
use crate::console::CliConsole;
use anyhow::Context;
use inkframe_core::{
    AppearanceSource, EnvAppearance, FixedAppearance, InkframeConfig, ThemeController,
    ThemeResolver,
};
use std::sync::Arc;

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli, config: InkframeConfig) -> anyhow::Result<()> {
    let appearance: Arc<dyn AppearanceSource> = match cli.appearance {
        Some(scheme) => Arc::new(FixedAppearance(scheme.into())),
        None => Arc::new(EnvAppearance::new()),
    };

    let resolver = ThemeResolver::from_config(&config, appearance)
        .context("Failed to set up theme resolver")?;
    tracing::debug!(
        "Preference store: {} (key '{}')",
        config.store_path.display(),
        resolver.key()
    );

    let controller = ThemeController::new(Arc::new(resolver));
    let console = CliConsole::new(cli.verbose);

    match cli.command {
        Commands::Show { json } => commands::theme::show(&controller, &console, json).await,
        Commands::Toggle => commands::theme::toggle(&controller, &console).await,
        Commands::Set { mode } => commands::theme::set(&controller, &console, mode.into()).await,
        Commands::Reset => commands::theme::reset(&controller, &console).await,
        Commands::Styles { mode } => {
            commands::styles::print(&controller, mode.map(Into::into)).await
        }
    }
}
