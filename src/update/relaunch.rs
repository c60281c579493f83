//! Self-relaunch protocol
//!
//! When the update gate fires, wrench runs its updater and then re-executes
//! the original command line under the (possibly) updated binary, so the
//! caller observes one logical invocation. The protocol is two-phase:
//!
//! 1. updater child (stdout rerouted to our stderr), then the state write;
//! 2. re-invocation child with fully inherited stdio, whose exit code
//!    becomes this process's exit code.
//!
//! The state write always lands between the two children. The timestamp
//! advances even when the updater fails — a broken updater throttles like a
//! working one instead of retrying on every invocation (`retry_on_failure`
//! in settings opts into the retry behavior).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::Settings;
use crate::error::{hints, WrenchError};
use crate::exec::{dispatch, DispatchRequest, StdioMode};
use crate::utils::terminal;

/// Env var marking a child we re-invoked ourselves. Guards against a
/// relaunch loop when the state write fails.
pub const RELAUNCHED_ENV: &str = "WRENCH_RELAUNCHED";

/// Env var overriding the updater command line (whitespace-split).
pub const UPDATER_ENV: &str = "WRENCH_UPDATER";

/// The original invocation, captured once at process start.
#[derive(Debug, Clone)]
pub struct InvocationContext {
    pub exe: PathBuf,
    /// argv minus argv[0]
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl InvocationContext {
    pub fn capture() -> Result<Self> {
        Ok(Self {
            exe: std::env::current_exe().context("Failed to resolve own executable path")?,
            args: std::env::args().skip(1).collect(),
            cwd: std::env::current_dir().context("Failed to get current directory")?,
        })
    }
}

/// Resolve the updater argv: env override, then settings, then a
/// `git pull` of the checkout wrench was installed from.
fn updater_command(settings: &Settings, exe: &Path) -> Result<Vec<String>> {
    if let Ok(raw) = std::env::var(UPDATER_ENV) {
        let argv: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
        if !argv.is_empty() {
            return Ok(argv);
        }
    }

    if let Some(argv) = &settings.update.command {
        if !argv.is_empty() {
            return Ok(argv.clone());
        }
    }

    let checkout = match &settings.update.checkout {
        Some(dir) => dir.clone(),
        None => find_enclosing_checkout(exe).ok_or_else(|| {
            WrenchError::update_error("cannot determine the wrench checkout", hints::updater())
        })?,
    };

    Ok(vec![
        "git".to_string(),
        "-C".to_string(),
        checkout.display().to_string(),
        "pull".to_string(),
        "--ff-only".to_string(),
    ])
}

/// Walk up from the executable looking for a `.git` directory.
fn find_enclosing_checkout(exe: &Path) -> Option<PathBuf> {
    let mut dir = exe.parent()?;
    loop {
        if dir.join(".git").exists() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}

/// Run one full update cycle and re-invoke the original command line.
///
/// Returns the exit code of the re-invoked child; the caller terminates the
/// process with it. Only the updater's *spawn* failing is fatal — silently
/// skipping it would leave the state file behind and re-attempt the same
/// broken update on every invocation.
pub fn run_update_cycle(
    ctx: &InvocationContext,
    home: &Path,
    settings: &Settings,
    now_ms: i64,
    verbose: bool,
) -> Result<i32> {
    let updater = updater_command(settings, &ctx.exe)?;
    if verbose {
        terminal::print_info(&format!("running updater: {}", updater.join(" ")));
    }

    let request = DispatchRequest::new(&updater[0], updater[1..].to_vec())
        .stdio(StdioMode::StdoutToStderr);
    let result = dispatch(&request);

    if let Some(err) = result.spawn_error {
        return Err(WrenchError::update_error(
            format!("could not start updater '{}': {}", updater[0], err),
            hints::updater(),
        )
        .into());
    }

    let updater_failed = result.exit_code != 0;
    if updater_failed {
        terminal::print_warning(&format!(
            "updater exited with code {}; continuing without update",
            result.exit_code
        ));
    }

    // The throttle advances on failure too, unless configured to retry.
    // `now_ms` was captured before the updater ran; the persisted value is
    // the cycle's start time, not some later sample.
    if !(updater_failed && settings.update.retry_on_failure) {
        super::UpdateState::store(home, now_ms)?;
    }

    let relaunch = DispatchRequest::new(&ctx.exe, ctx.args.clone())
        .cwd(&ctx.cwd)
        .env(RELAUNCHED_ENV, "1");
    let result = dispatch(&relaunch);

    if let Some(err) = result.spawn_error {
        return Err(WrenchError::spawn_error(ctx.exe.display().to_string(), err).into());
    }
    Ok(result.exit_code)
}

/// Gate-keeping entry called from `main` before command parsing.
///
/// Returns `Some(exit_code)` when an update cycle ran and the process must
/// terminate with the re-invoked child's status; `None` when the current
/// invocation should proceed normally.
pub fn maybe_self_update(ctx: &InvocationContext, home: &Path, verbose: bool) -> Result<Option<i32>> {
    if std::env::var_os(RELAUNCHED_ENV).is_some() {
        return Ok(None);
    }
    if super::updates_disabled(home) {
        return Ok(None);
    }

    let settings = Settings::load(home)?;
    let state = super::UpdateState::load(home);
    let now_ms = super::now_epoch_ms();

    if !super::should_check(
        now_ms,
        state.last_check_epoch_ms,
        settings.update_interval_hours(),
        false,
    ) {
        return Ok(None);
    }

    run_update_cycle(ctx, home, &settings, now_ms, verbose).map(Some)
}
