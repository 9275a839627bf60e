//! Tools command implementation

use crate::console::CliConsole;
use cogito_core::tools::default_tools;

/// Show available tools and their descriptions
pub fn show_tools() -> anyhow::Result<()> {
    let console = CliConsole;
    console.print_header("Available Tools");

    let tools = default_tools();
    let width = tools.iter().map(|t| t.name().len()).max().unwrap_or(0);
    for tool in &tools {
        console.print_row(tool.name(), tool.description(), width);
    }

    println!();
    console.info(&format!("Total tools available: {}", tools.len()));
    Ok(())
}
