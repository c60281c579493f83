//! CLI argument parsing using clap derive macros

use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{
    depot::DepotCommand, node::NodeCommand, npm::NpmCommand, show::ShowCommand,
    start::StartCommand, use_profile::UseCommand,
};

/// wrench - one entry point for Chromium-style build and dependency tools
///
/// Resolves the active build profile and dispatches to the right underlying
/// executable, forwarding unknown flags verbatim.
#[derive(Parser, Debug)]
#[command(name = "wrench")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the built application
    #[command(alias = "run")]
    Start(StartCommand),

    /// Run the built application as a plain Node runtime
    Node(NodeCommand),

    /// Pass through to npm with the build output wired in
    Npm(NpmCommand),

    /// Pass through to depot_tools
    #[command(name = "depot-tools", alias = "d")]
    DepotTools(DepotCommand),

    /// Select the active build profile
    Use(UseCommand),

    /// Show the active profile and derived paths
    Show(ShowCommand),
}

impl Cli {
    /// Execute the CLI command; returns the process exit code.
    pub fn execute(self, home: &Path) -> Result<i32> {
        // Set up terminal colors
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        match self.command {
            Commands::Start(cmd) => cmd.execute(home, self.verbose),
            Commands::Node(cmd) => cmd.execute(home, self.verbose),
            Commands::Npm(cmd) => cmd.execute(home, self.verbose),
            Commands::DepotTools(cmd) => cmd.execute(home, self.verbose),
            Commands::Use(cmd) => cmd.execute(home, self.verbose),
            Commands::Show(cmd) => cmd.execute(home, self.verbose),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_flags_are_not_parsed_by_wrench() {
        let cli = Cli::parse_from(["wrench", "npm", "install", "--save-dev", "-D"]);
        match cli.command {
            Commands::Npm(cmd) => assert_eq!(cmd.args, vec!["install", "--save-dev", "-D"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_run_is_an_alias_for_start() {
        let cli = Cli::parse_from(["wrench", "run", "--ozone-platform=wayland"]);
        assert!(matches!(cli.command, Commands::Start(_)));
    }

    #[test]
    fn test_d_is_an_alias_for_depot_tools() {
        let cli = Cli::parse_from(["wrench", "d", "gclient", "sync"]);
        match cli.command {
            Commands::DepotTools(cmd) => assert_eq!(cmd.args, vec!["gclient", "sync"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
