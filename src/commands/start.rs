//! Start command - launch the built application

use std::path::Path;

use anyhow::Result;
use clap::Args;

use super::router::{build_request, Verb};
use crate::config::Settings;

/// Launch the active profile's built executable
#[derive(Args, Debug)]
pub struct StartCommand {
    /// Arguments forwarded verbatim to the application
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl StartCommand {
    pub fn execute(self, home: &Path, verbose: bool) -> Result<i32> {
        let config = super::require_active_config(home)?;
        let settings = Settings::load(home)?;
        let request = build_request(Verb::Start, &self.args, &config, &settings.depot_dir(home))?;
        super::dispatch_and_relay(&request, verbose)
    }
}
