//! CLI argument definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cogito")]
#[command(about = "MCP server exposing reasoning and text tools backed by a remote LLM")]
#[command(version)]
pub struct Cli {
    /// JSON or TOML configuration file; environment variables override it
    #[arg(long, global = true, env = "COGITO_CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `cogito_core=trace` (overrides RUST_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log output format (logs are always written to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Serve MCP over stdin/stdout (default)
    Serve,

    /// Invoke a single tool and print its output
    Call {
        /// Tool name, e.g. `summarize_text`
        tool: String,

        /// Tool argument as key=value; repeatable. Integer values are sent as numbers.
        #[arg(long = "arg", short = 'a', value_name = "KEY=VALUE", value_parser = parse_key_value)]
        args: Vec<(String, String)>,

        /// Tool arguments as a JSON object; merged under --arg values
        #[arg(long, value_name = "JSON")]
        json: Option<String>,
    },

    /// List available tools and their descriptions
    Tools,

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Display the effective configuration with API keys masked
    Show,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::try_parse_from(["cogito"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_format, LogFormat::Text);
    }

    #[test]
    fn test_call_arguments() {
        let cli = Cli::try_parse_from([
            "cogito",
            "call",
            "translate_text",
            "--arg",
            "text=a=b",
            "-a",
            "target_language=French",
            "--log-format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Call { tool, args, json }) => {
                assert_eq!(tool, "translate_text");
                assert_eq!(args[0], ("text".to_string(), "a=b".to_string()));
                assert_eq!(args[1].1, "French");
                assert!(json.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn test_malformed_arg_rejected() {
        assert!(Cli::try_parse_from(["cogito", "call", "x", "--arg", "novalue"]).is_err());
    }
}
