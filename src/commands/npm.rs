//! Npm command - pass through to npm with the build output wired in

use std::path::Path;

use anyhow::Result;
use clap::Args;

use super::router::{build_request, Verb};
use crate::config::Settings;

/// Run npm with the active profile's output directory as the node dir
#[derive(Args, Debug)]
pub struct NpmCommand {
    /// npm subcommand and arguments, forwarded verbatim
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl NpmCommand {
    pub fn execute(self, home: &Path, verbose: bool) -> Result<i32> {
        let config = super::require_active_config(home)?;
        let settings = Settings::load(home)?;
        let request = build_request(Verb::Npm, &self.args, &config, &settings.depot_dir(home))?;
        super::dispatch_and_relay(&request, verbose)
    }
}
