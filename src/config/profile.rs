//! Build profile parsing and active-profile resolution

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::{hints, WrenchError};
use crate::utils::paths;

/// On-disk shape of `profiles/<name>.toml`.
#[derive(Debug, Clone, Deserialize)]
struct ProfileFile {
    /// Checkout root (the directory containing `src/`)
    root: PathBuf,

    /// Output directory name under `<root>/src/out/`
    out: String,

    /// Binary name inside the output directory
    executable: String,
}

/// The resolved active build profile.
///
/// Never mutated by the dispatch layer; queried once per invocation.
#[derive(Debug, Clone)]
pub struct ActiveConfig {
    pub name: String,
    pub root: PathBuf,
    pub out: String,
    pub executable: String,
}

impl ActiveConfig {
    /// Build output directory for this profile.
    pub fn out_dir(&self) -> PathBuf {
        self.root.join("src").join("out").join(&self.out)
    }

    /// Full path of the built application binary.
    pub fn exec_path(&self) -> PathBuf {
        let mut name = self.executable.clone();
        name.push_str(std::env::consts::EXE_SUFFIX);
        self.out_dir().join(name)
    }

    /// Load a named profile from the wrench home.
    pub fn load(home: &Path, name: &str) -> Result<Self> {
        let path = paths::profile_path(home, name);
        if !path.exists() {
            return Err(WrenchError::config_error_with_hint(
                format!("Profile '{}' not found", name),
                None,
                hints::profile_not_found(name),
            )
            .into());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read profile: {}", path.display()))?;
        let file: ProfileFile = toml::from_str(&content).map_err(|e| {
            WrenchError::config_error_with_hint(
                format!("Profile '{}' is invalid", name),
                Some(e.into()),
                format!("Fix the TOML syntax in {}", path.display()),
            )
        })?;

        Ok(Self {
            name: name.to_string(),
            root: file.root,
            out: file.out,
            executable: file.executable,
        })
    }
}

/// Read the active profile name, if one is set.
pub fn read_active_name(home: &Path) -> Option<String> {
    let name = std::fs::read_to_string(home.join(paths::ACTIVE_FILE)).ok()?;
    let name = name.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Resolve the currently active profile.
///
/// Fails with `NoActiveConfig` when no profile has been selected; callers
/// surface this before any child process is spawned.
pub fn active_profile(home: &Path) -> Result<ActiveConfig> {
    let name = read_active_name(home).ok_or_else(WrenchError::no_active_config)?;
    ActiveConfig::load(home, &name)
}

/// Make `name` the active profile, validating that it loads first.
pub fn set_active(home: &Path, name: &str) -> Result<ActiveConfig> {
    let config = ActiveConfig::load(home, name)?;
    std::fs::write(home.join(paths::ACTIVE_FILE), format!("{}\n", name))
        .with_context(|| format!("Failed to record active profile in {}", home.display()))?;
    Ok(config)
}
