//! Cogito CLI application
//!
//! Runs the MCP server on stdio and offers a few utility commands.
//!
//! - `cogito` / `cogito serve`: serve MCP on stdin/stdout until EOF or Ctrl-C
//! - `cogito call <tool> --arg key=value`: invoke one tool and print the text
//! - `cogito tools`: list the tool catalogue
//! - `cogito config show`: print the effective configuration, keys masked
//!
//! Logs always go to stderr; stdout carries protocol messages.

mod args;
mod commands;
mod console;
mod logging;
mod router;

use clap::Parser;

use args::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref(), cli.log_format)?;
    router::route(cli).await
}
