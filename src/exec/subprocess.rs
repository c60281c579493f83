//! Synchronous subprocess execution
//!
//! The adapter spawns one child at a time and blocks until it finishes.
//! Build tools are interactive and terminal-attached, so streaming output
//! matters more than parallelism; inherited stdio also keeps normal
//! process-group signal delivery intact for Ctrl-C.
//!
//! Spawn failures are returned inside [`DispatchResult`] rather than
//! propagated, so the caller can print one uniform diagnostic and pick the
//! final exit code. A child's own exit code is never re-interpreted here.

use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

/// How the child's standard streams are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdioMode {
    /// All three streams connect to the parent's terminal/pipes.
    Inherit,

    /// The child's stdout is copied onto the parent's stderr; stdin and
    /// stderr are inherited. Used for the updater sub-invocation so its log
    /// lines never contaminate a caller capturing wrench's stdout as data.
    StdoutToStderr,
}

/// One child-process invocation, composed by the command router.
#[derive(Debug, Clone)]
pub struct DispatchRequest {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    /// Merged over the inherited environment; overrides win on collision.
    /// The parent's own environment is never mutated.
    pub env: Vec<(String, String)>,
    pub stdio: StdioMode,
}

impl DispatchRequest {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            cwd: None,
            env: Vec::new(),
            stdio: StdioMode::Inherit,
        }
    }

    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn stdio(mut self, mode: StdioMode) -> Self {
        self.stdio = mode;
        self
    }
}

/// Outcome of a dispatch.
#[derive(Debug)]
pub struct DispatchResult {
    /// Child exit code; signal termination maps to 1.
    pub exit_code: i32,

    /// Present when the child could not be spawned at all.
    pub spawn_error: Option<io::Error>,
}

impl DispatchResult {
    fn from_status(status: ExitStatus) -> Self {
        Self {
            exit_code: exit_code_of(status),
            spawn_error: None,
        }
    }

    fn from_spawn_error(error: io::Error) -> Self {
        Self {
            exit_code: crate::error::EXIT_FAILURE,
            spawn_error: Some(error),
        }
    }
}

/// Map an exit status to the code this process should relay.
///
/// A child killed by a signal has no code; relay a plain failure instead of
/// crashing or inventing one.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    status.code().unwrap_or(crate::error::EXIT_FAILURE)
}

/// Run the request synchronously and report its outcome.
pub fn dispatch(request: &DispatchRequest) -> DispatchResult {
    let mut cmd = Command::new(&request.program);
    cmd.args(&request.args);

    if let Some(dir) = &request.cwd {
        cmd.current_dir(dir);
    }

    for (key, value) in &request.env {
        cmd.env(key, value);
    }

    match request.stdio {
        StdioMode::Inherit => {
            cmd.stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());

            match cmd.status() {
                Ok(status) => DispatchResult::from_status(status),
                Err(e) => DispatchResult::from_spawn_error(e),
            }
        }
        StdioMode::StdoutToStderr => {
            cmd.stdin(Stdio::inherit())
                .stdout(Stdio::piped())
                .stderr(Stdio::inherit());

            let mut child = match cmd.spawn() {
                Ok(child) => child,
                Err(e) => return DispatchResult::from_spawn_error(e),
            };

            // Drain the pipe before waiting so a chatty child cannot block
            // on a full pipe buffer.
            if let Some(mut stdout) = child.stdout.take() {
                let _ = io::copy(&mut stdout, &mut io::stderr());
            }

            match child.wait() {
                Ok(status) => DispatchResult::from_status(status),
                Err(e) => DispatchResult::from_spawn_error(e),
            }
        }
    }
}
