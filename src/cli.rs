//! CLI argument definitions using clap with subcommand architecture

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Linter aggregator that normalizes external linter output
#[derive(Parser, Debug)]
#[command(name = "lintmux")]
#[command(about = "Run configured linters and merge their findings into one report")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (applies to all commands)
    #[arg(short, long, default_value = "text", value_enum, global = true)]
    pub format: OutputFormat,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands for lintmux
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the configured linters and report findings
    #[command(visible_alias = "c")]
    Check(CheckArgs),

    /// List registered linters and whether they are installed
    #[command(visible_alias = "l")]
    Linters(LintersArgs),
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Repository root to lint (defaults to the current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Run only this linter
    #[arg(long, value_name = "NAME")]
    pub linter: Option<String>,

    /// Config file to use instead of <PATH>/lintmux.toml
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the linters command
#[derive(Args, Debug)]
pub struct LintersArgs {}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Machine-readable JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_accepts_path_and_linter() {
        let cli = Cli::try_parse_from(["lintmux", "check", "repo", "--linter", "yamllint"])
            .unwrap();
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.path, Some(PathBuf::from("repo")));
                assert_eq!(args.linter.as_deref(), Some("yamllint"));
            }
            _ => panic!("expected check subcommand"),
        }
    }

    #[test]
    fn test_global_format_flag() {
        let cli = Cli::try_parse_from(["lintmux", "linters", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
