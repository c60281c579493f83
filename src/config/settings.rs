//! Tool-level settings from `settings.toml`
//!
//! All fields are optional; an absent file yields defaults. Settings are
//! read once per invocation, never written by wrench itself.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::WrenchError;
use crate::utils::paths;

/// Auto-update configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSettings {
    /// Hours between update checks (default 4)
    pub interval_hours: Option<u64>,

    /// Explicit updater argv; overrides checkout detection
    pub command: Option<Vec<String>>,

    /// Path of the wrench git checkout the default updater pulls
    pub checkout: Option<PathBuf>,

    /// Retry the update on every invocation until the updater succeeds,
    /// instead of advancing the throttle on failure (default false)
    #[serde(default)]
    pub retry_on_failure: bool,
}

/// depot_tools configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DepotSettings {
    /// Location of the depot_tools checkout wrench manages
    pub dir: Option<PathBuf>,
}

/// Parsed `settings.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub update: UpdateSettings,

    #[serde(default)]
    pub depot: DepotSettings,
}

impl Settings {
    /// Load settings from the wrench home; absent file means defaults.
    pub fn load(home: &Path) -> Result<Self> {
        let path = home.join(paths::SETTINGS_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;
        let settings = toml::from_str(&content).map_err(|e| {
            WrenchError::config_error_with_hint(
                format!("Invalid settings file: {}", path.display()),
                Some(e.into()),
                format!(
                    "Fix the TOML syntax in {} or remove the file to use defaults",
                    path.display()
                ),
            )
        })?;
        Ok(settings)
    }

    /// Hours between update checks.
    pub fn update_interval_hours(&self) -> u64 {
        self.update.interval_hours.unwrap_or(4)
    }

    /// Resolved depot_tools directory.
    pub fn depot_dir(&self, home: &Path) -> PathBuf {
        self.depot
            .dir
            .clone()
            .unwrap_or_else(|| paths::default_depot_dir(home))
    }
}
