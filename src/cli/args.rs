//! CLI argument definitions using clap
//!
//! Commands:
//! - versionstore latest [--set <id>]
//! - versionstore development [--set <id>]
//! - versionstore production list|add <id>|remove <id>
//! - versionstore register --config-file <path> [--id <id>]
//! - versionstore show <id>
//! - versionstore list

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// versionstore - latest, development and production version pointers
#[derive(Parser, Debug)]
#[command(name = "versionstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, default_value = "./versionstore.json")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show or set the latest version
    Latest {
        /// Version id to record as latest
        #[arg(long)]
        set: Option<String>,
    },

    /// Show or set the development version (setting also moves latest)
    Development {
        /// Version id to record as development
        #[arg(long)]
        set: Option<String>,
    },

    /// Manage production versions
    Production {
        #[command(subcommand)]
        action: ProductionAction,
    },

    /// Register a new version from a JSON configuration file
    Register {
        /// JSON file holding the configuration snapshot
        #[arg(long)]
        config_file: PathBuf,

        /// Version id (random UUID when omitted)
        #[arg(long)]
        id: Option<String>,
    },

    /// Print one version record
    Show {
        /// Version id
        id: String,
    },

    /// Print all version records
    List,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ProductionAction {
    /// List production versions in promotion order
    List,

    /// Promote a version to production
    Add {
        /// Version id
        id: String,
    },

    /// Remove a version from production
    Remove {
        /// Version id
        id: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_production_add() {
        let cli = Cli::try_parse_from(["versionstore", "production", "add", "v2"]).unwrap();

        assert_eq!(cli.config, PathBuf::from("./versionstore.json"));
        match cli.command {
            Command::Production {
                action: ProductionAction::Add { id },
            } => assert_eq!(id, "v2"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli =
            Cli::try_parse_from(["versionstore", "latest", "--config", "/etc/vs.json"]).unwrap();

        assert_eq!(cli.config, PathBuf::from("/etc/vs.json"));
        assert!(matches!(cli.command, Command::Latest { set: None }));
    }
}
