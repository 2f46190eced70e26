pub mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;
use std::process::exit;

use crate::application::services::provider_resolver::RepositoryProviderResolver;
use crate::domain::entities::resolver_config::ResolverConfig;
use crate::infrastructure::filesystem::config_store::ConfigStore;

use commands::{DetectCommand, ParseCommand, ProvidersCommand, ScanCommand};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_DATE"),
    ")"
);

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    Text,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

impl OutputFormat {
    /// Print `value` as JSON or YAML. Returns `false` for `Text`, which callers render themselves.
    pub fn print_structured<T: Serialize>(&self, value: &T) -> Result<bool> {
        match self {
            OutputFormat::Text => Ok(false),
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(value)?);
                Ok(true)
            }
            OutputFormat::Yaml => {
                print!("{}", serde_yaml::to_string(value)?);
                Ok(true)
            }
        }
    }
}

/// gitprovider - detect the git hosting provider of working copies
#[derive(Parser, Debug)]
#[command(name = "gitprovider")]
#[command(about = "Detect the git hosting provider of working copies and parse their remote URLs")]
#[command(version, long_version = LONG_VERSION)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Resolver configuration file (YAML)
    #[arg(short, long, global = true, env = "GITPROVIDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Remote to inspect (defaults to origin)
    #[arg(short, long, global = true)]
    pub remote: Option<String>,

    /// Also look for a repository in parent directories
    #[arg(long, global = true)]
    pub search_parents: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect the hosting provider of one or more paths
    Detect {
        /// Paths to inspect (defaults to the current directory)
        paths: Vec<PathBuf>,

        /// Output format (text, json, yaml)
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Parse the remote URL of a working copy
    Parse {
        /// Path to inspect (defaults to the current directory)
        path: Option<PathBuf>,

        /// Output format (text, json, yaml)
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Find working copies below a directory and report their providers
    Scan {
        /// Directory to scan (defaults to the current directory)
        root: Option<PathBuf>,

        /// Maximum directory depth to descend
        #[arg(long)]
        max_depth: Option<usize>,

        /// Output format (text, json, yaml)
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the effective provider table
    Providers {
        /// Output format (text, json, yaml)
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub fn from_cli(cli: Cli) -> Self {
        Self { cli }
    }

    pub fn verbose(&self) -> bool {
        self.cli.verbose
    }

    pub fn run(self) -> Result<()> {
        if self.cli.no_color {
            colored::control::set_override(false);
        }

        match self.handle_command() {
            Ok(_) => Ok(()),
            Err(e) => {
                eprintln!("{} {:#}", "Error:".red().bold(), e);
                exit(1);
            }
        }
    }

    fn handle_command(&self) -> Result<()> {
        let config = self.load_config()?;
        let resolver = RepositoryProviderResolver::from_config(&config)?;

        match &self.cli.command {
            Commands::Detect { paths, output } => {
                DetectCommand::new(paths.clone(), *output).execute(&resolver)
            }
            Commands::Parse { path, output } => {
                ParseCommand::new(path.clone(), *output).execute(&resolver)
            }
            Commands::Scan { root, output, .. } => {
                ScanCommand::new(root.clone(), *output).execute(&resolver)
            }
            Commands::Providers { output } => ProvidersCommand::new(*output).execute(&resolver),
        }
    }

    /// Load the configuration file and apply command-line overrides
    fn load_config(&self) -> Result<ResolverConfig> {
        let store = ConfigStore::new();
        let mut config = store.load_or_default(self.cli.config.as_deref())?;

        if let Some(remote) = &self.cli.remote {
            config.remote_name = remote.clone();
        }
        if self.cli.search_parents {
            config.search_parents = true;
        }
        if let Commands::Scan {
            max_depth: Some(depth),
            ..
        } = &self.cli.command
        {
            config.scan_max_depth = *depth;
        }

        store.validate_config(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_detect_with_paths() {
        let cli = Cli::try_parse_from(["gitprovider", "detect", "a", "b", "--output", "json"])
            .unwrap();
        match cli.command {
            Commands::Detect { paths, output } => {
                assert_eq!(paths, vec![PathBuf::from("a"), PathBuf::from("b")]);
                assert_eq!(output, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "gitprovider",
            "parse",
            "repo",
            "--remote",
            "upstream",
            "--search-parents",
        ])
        .unwrap();
        assert_eq!(cli.remote.as_deref(), Some("upstream"));
        assert!(cli.search_parents);
    }

    #[test]
    fn test_overrides_are_applied() {
        let cli = Cli::try_parse_from([
            "gitprovider",
            "scan",
            "--max-depth",
            "7",
            "--remote",
            "upstream",
        ])
        .unwrap();
        let config = CliApp::from_cli(cli).load_config().unwrap();
        assert_eq!(config.remote_name, "upstream");
        assert_eq!(config.scan_max_depth, 7);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let cli = Cli::try_parse_from(["gitprovider", "scan", "--max-depth", "0"]).unwrap();
        assert!(CliApp::from_cli(cli).load_config().is_err());
    }
}
