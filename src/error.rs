//! Error types and helpers for user-friendly error messages
//!
//! Errors are split along the boundary that decides the process exit code:
//! anything raised before a child is spawned (config, usage) exits 2,
//! spawn failures exit 1, and a child's own non-zero exit code is
//! propagated verbatim and never re-interpreted here.

use thiserror::Error;

/// Exit code for usage and configuration errors raised before any spawn.
pub const EXIT_USAGE: i32 = 2;

/// Exit code for internal failures, including spawn errors.
pub const EXIT_FAILURE: i32 = 1;

/// Custom error types with helpful context and suggestions
#[derive(Error, Debug)]
pub enum WrenchError {
    /// No build profile is currently selected
    #[error("No active build profile")]
    NoActiveConfig { hint: String },

    /// A verb was invoked without the arguments it requires
    #[error("Usage error: {message}")]
    Usage { message: String },

    /// Profile or settings file errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
        hint: Option<String>,
    },

    /// Target executable could not be spawned
    #[error("Failed to run '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
        hint: Option<String>,
    },

    /// The self-updater could not be started at all
    #[error("Update failed: {message}")]
    Update { message: String, hint: String },
}

impl WrenchError {
    pub fn no_active_config() -> Self {
        Self::NoActiveConfig {
            hint: "Select a build profile first:\n\
                   • List profiles: ls in the profiles directory under your wrench home\n\
                   • Activate one: wrench use <name>"
                .to_string(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    pub fn config_error_with_hint(
        message: impl Into<String>,
        source: Option<anyhow::Error>,
        hint: impl Into<String>,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source,
            hint: Some(hint.into()),
        }
    }

    pub fn spawn_error(program: impl Into<String>, source: std::io::Error) -> Self {
        let program = program.into();
        let hint = if source.kind() == std::io::ErrorKind::NotFound {
            Some(format!(
                "'{}' was not found. Check that it is installed and on PATH,\n\
                 and that the active profile points at an existing build output.",
                program
            ))
        } else {
            None
        };
        Self::Spawn {
            program,
            source,
            hint,
        }
    }

    pub fn update_error(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::Update {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// The exit code this error maps to when it reaches `main`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoActiveConfig { .. } | Self::Usage { .. } | Self::Config { .. } => EXIT_USAGE,
            Self::Spawn { .. } | Self::Update { .. } => EXIT_FAILURE,
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("{} {}", style("ERROR:").red().bold(), self);

        let hint = match self {
            Self::NoActiveConfig { hint } => Some(hint.as_str()),
            Self::Usage { .. } => None,
            Self::Config { hint, .. } => hint.as_deref(),
            Self::Spawn { hint, .. } => hint.as_deref(),
            Self::Update { hint, .. } => Some(hint.as_str()),
        };

        if let Some(h) = hint {
            eprintln!("{} {}", style("HINT:").yellow().bold(), h);
        }
    }
}

/// Common error hints
pub mod hints {
    /// Hint for a missing profile file
    pub fn profile_not_found(name: &str) -> String {
        format!(
            "No profile named '{}' exists.\n\
             Create <wrench home>/profiles/{}.toml with:\n\n\
             root = \"/path/to/checkout\"\n\
             out = \"Testing\"\n\
             executable = \"electron\"",
            name, name
        )
    }

    /// Hint for a broken self-updater
    pub fn updater() -> &'static str {
        "wrench could not locate its own checkout to update from.\n\
         • Set [update] command or checkout in settings.toml, or\n\
         • Create the disable-auto-updates marker file in your wrench home\n\
           to turn the auto-update check off."
    }

    /// Hint for missing git
    pub fn git() -> &'static str {
        "Install Git from https://git-scm.com/ or use your package manager:\n\
         • macOS: brew install git\n\
         • Ubuntu: sudo apt install git\n\
         • Windows: winget install Git.Git"
    }
}
