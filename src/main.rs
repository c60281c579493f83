//! wrench CLI - one entry point for Chromium-style build tooling
//!
//! Control flow per invocation:
//!
//! ```text
//! entry → update gate → (self-relaunch, exits with child's status)
//!       → command router → subprocess dispatch → child's exit code
//! ```
//!
//! The update gate runs before argument parsing so that a relaunch replays
//! the original command line untouched, `--help` and all.

mod cli;
mod commands;
mod config;
mod error;
mod exec;
mod update;
mod utils;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use error::WrenchError;
use update::relaunch::{self, InvocationContext};

fn main() {
    std::process::exit(match run() {
        Ok(code) => code,
        Err(err) => report(err),
    });
}

fn run() -> Result<i32> {
    let ctx = InvocationContext::capture()?;
    let home = utils::paths::tool_home()?;

    let verbose = ctx.args.iter().any(|a| a == "-v" || a == "--verbose");
    if let Some(code) = relaunch::maybe_self_update(&ctx, &home, verbose)? {
        // An update cycle ran; the re-invoked child's status is ours.
        return Ok(code);
    }

    let cli = Cli::parse();
    cli.execute(&home)
}

/// Render an error and pick the exit code for it.
fn report(err: anyhow::Error) -> i32 {
    match err.downcast_ref::<WrenchError>() {
        Some(wrench) => {
            wrench.display_with_hints();
            wrench.exit_code()
        }
        None => {
            utils::terminal::print_error(&format!("{:#}", err));
            error::EXIT_FAILURE
        }
    }
}
