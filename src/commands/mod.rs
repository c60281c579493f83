//! Command implementations
//!
//! Each command module provides a clap-derived struct and execute method.
//! Dispatching commands return the child's exit code so `main` can relay it
//! verbatim.

pub mod depot;
pub mod node;
pub mod npm;
pub mod router;
pub mod show;
pub mod start;
pub mod use_profile;

use std::path::Path;

use anyhow::Result;

use crate::config;
use crate::error::WrenchError;
use crate::exec::{self, DispatchRequest};
use crate::utils::terminal;

/// Run a routed request and relay its outcome.
///
/// Spawn failures become a [`WrenchError::Spawn`] so every verb reports
/// them with the same diagnostic; a child that ran is never re-interpreted,
/// its exit code is simply returned.
pub(crate) fn dispatch_and_relay(request: &DispatchRequest, verbose: bool) -> Result<i32> {
    if verbose {
        terminal::print_info(&format!(
            "dispatching: {} {}",
            request.program.display(),
            request.args.join(" ")
        ));
    }

    let result = exec::dispatch(request);
    if let Some(err) = result.spawn_error {
        return Err(WrenchError::spawn_error(request.program.display().to_string(), err).into());
    }
    Ok(result.exit_code)
}

/// Resolve the active profile or fail before anything is spawned.
pub(crate) fn require_active_config(home: &Path) -> Result<config::ActiveConfig> {
    config::active_profile(home)
}
