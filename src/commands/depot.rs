//! Depot-tools command - pass through to the managed depot_tools checkout

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::Args;
use which::which;

use super::router::{build_request, Verb};
use crate::config::Settings;
use crate::error::hints;
use crate::exec::{dispatch, DispatchRequest};
use crate::utils::terminal;

const DEPOT_TOOLS_URL: &str = "https://chromium.googlesource.com/chromium/tools/depot_tools.git";

/// Run a depot_tools command against the active profile
#[derive(Args, Debug)]
pub struct DepotCommand {
    /// depot_tools command and arguments, forwarded verbatim
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl DepotCommand {
    pub fn execute(self, home: &Path, verbose: bool) -> Result<i32> {
        let config = super::require_active_config(home)?;
        let settings = Settings::load(home)?;
        let depot_dir = settings.depot_dir(home);

        // Route first: usage and config errors must surface before the
        // preparatory clone gets a chance to spawn anything.
        let request = build_request(Verb::Depot, &self.args, &config, &depot_dir)?;

        ensure_depot_tools(&depot_dir, verbose)?;
        super::dispatch_and_relay(&request, verbose)
    }
}

/// Make sure the depot_tools checkout exists, cloning it on first use.
///
/// This is the preparatory step that has to finish before the target tool
/// path is even known. Clone output streams to the terminal; a checkout
/// can take a while.
fn ensure_depot_tools(depot_dir: &Path, verbose: bool) -> Result<()> {
    if depot_dir.join(".git").exists() {
        return Ok(());
    }

    if which("git").is_err() {
        bail!("git is required to fetch depot_tools.\n{}", hints::git());
    }

    terminal::print_info(&format!(
        "fetching depot_tools into {}",
        depot_dir.display()
    ));

    let request = DispatchRequest::new(
        PathBuf::from("git"),
        vec![
            "clone".to_string(),
            DEPOT_TOOLS_URL.to_string(),
            depot_dir.display().to_string(),
        ],
    );

    if verbose {
        terminal::print_info(&format!("running: git clone {}", DEPOT_TOOLS_URL));
    }

    let result = dispatch(&request);
    if let Some(err) = result.spawn_error {
        bail!("Failed to run git: {}", err);
    }
    if result.exit_code != 0 {
        bail!(
            "git clone of depot_tools failed with code {}",
            result.exit_code
        );
    }
    Ok(())
}
