//! Command routing logic for CLI

use crate::args::{Cli, Commands, ConfigAction};
use crate::commands;

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli) -> anyhow::Result<()> {
    let config_file = cli.config_file.as_deref();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => commands::serve::run(config_file).await,
        Commands::Call { tool, args, json } => {
            commands::call::run(config_file, &tool, args, json.as_deref()).await
        }
        Commands::Tools => commands::tools::show_tools(),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(config_file),
        },
    }
}
