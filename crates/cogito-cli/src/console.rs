//! Console output for the utility commands

use colored::*;

/// Formatted output on stdout, errors on stderr
pub struct CliConsole;

impl CliConsole {
    pub fn info(&self, message: &str) {
        println!("{} {}", "ℹ".blue().bold(), message);
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    pub fn warn(&self, message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    pub fn print_header(&self, title: &str) {
        println!();
        println!("{}", title.bold().underline());
        println!("{}", "=".repeat(title.len()).dimmed());
    }

    /// Two-column row with a padded first column
    pub fn print_row(&self, key: &str, value: &str, width: usize) {
        println!("  {:<width$}  {}", key.cyan(), value, width = width);
    }
}
