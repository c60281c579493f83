//! Node command - run the built application as a plain Node host

use std::path::Path;

use anyhow::Result;
use clap::Args;

use super::router::{build_request, Verb};
use crate::config::Settings;

/// Run a script under the built binary acting as a Node runtime
#[derive(Args, Debug)]
pub struct NodeCommand {
    /// Script and arguments, forwarded verbatim
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl NodeCommand {
    pub fn execute(self, home: &Path, verbose: bool) -> Result<i32> {
        let config = super::require_active_config(home)?;
        let settings = Settings::load(home)?;
        let request = build_request(Verb::Node, &self.args, &config, &settings.depot_dir(home))?;
        super::dispatch_and_relay(&request, verbose)
    }
}
