//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for voyagr using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive card browser over matching destinations (default)
//! - **search**: One-shot search printing all matches
//! - **config**: Manage application settings (endpoint, quiet)
//!
//! # Design Features
//!
//! - Global `--quiet` flag for scripting-friendly output
//! - Global `--url` flag overriding the configured endpoint
//! - Command aliases (`b` for `browse`, `s` for `search`)

use clap::{Parser, Subcommand};

/// Search and browse travel recommendations from the terminal
#[derive(Parser, Debug)]
#[command(name = "voyagr", version, about)]
pub struct Cli {
    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the dataset endpoint URL
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse matching destinations one card at a time
    #[command(alias = "b")]
    Browse {
        /// Initial search query; when omitted the browser starts empty
        /// and `/` prompts for one
        query: Option<String>,
    },

    /// Print all matching destinations in one shot
    #[command(alias = "s")]
    Search {
        /// Search query; the empty string matches everything
        query: String,
    },

    /// Manage application settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Set a configuration value (key=value)
    Set {
        /// Setting in key=value form; keys: endpoint, quiet
        setting: String,
    },
    /// Get a configuration value
    Get {
        /// Key to read; keys: endpoint, quiet
        key: String,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The command to run; defaults to browse with no initial query
    #[must_use]
    pub fn get_command(self) -> Commands {
        self.command.unwrap_or(Commands::Browse { query: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_browse() {
        let cli = Cli::try_parse_from(["voyagr"]).unwrap();
        assert!(matches!(
            cli.get_command(),
            Commands::Browse { query: None }
        ));
    }

    #[test]
    fn test_browse_with_query_and_alias() {
        let cli = Cli::try_parse_from(["voyagr", "b", "beach"]).unwrap();
        match cli.get_command() {
            Commands::Browse { query } => assert_eq!(query.as_deref(), Some("beach")),
            other => panic!("Expected Browse, got {other:?}"),
        }
    }

    #[test]
    fn test_search_requires_query() {
        assert!(Cli::try_parse_from(["voyagr", "search"]).is_err());

        let cli = Cli::try_parse_from(["voyagr", "s", "temple"]).unwrap();
        match cli.get_command() {
            Commands::Search { query } => assert_eq!(query, "temple"),
            other => panic!("Expected Search, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli =
            Cli::try_parse_from(["voyagr", "search", "beach", "-q", "--url", "http://x/y.json"])
                .unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.url.as_deref(), Some("http://x/y.json"));
    }

    #[test]
    fn test_config_set_and_get() {
        let cli = Cli::try_parse_from(["voyagr", "config", "set", "quiet=true"]).unwrap();
        match cli.get_command() {
            Commands::Config {
                command: ConfigCommands::Set { setting },
            } => assert_eq!(setting, "quiet=true"),
            other => panic!("Expected Config Set, got {other:?}"),
        }

        let cli = Cli::try_parse_from(["voyagr", "config", "get", "endpoint"]).unwrap();
        assert!(matches!(
            cli.get_command(),
            Commands::Config {
                command: ConfigCommands::Get { .. }
            }
        ));
    }
}
