//! Path utilities for the wrench CLI
//!
//! Everything wrench persists lives under a single home directory:
//! profiles, the active-profile marker, update state, and the managed
//! depot_tools checkout. `WRENCH_HOME` overrides the platform default so
//! tests (and unusual setups) can relocate the whole tree.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

/// Name of the file recording the currently active profile.
pub const ACTIVE_FILE: &str = "active";

/// Name of the file holding the last update-check timestamp.
pub const UPDATE_STATE_FILE: &str = "last-update-check";

/// Marker file whose existence disables the auto-update check.
pub const DISABLE_UPDATES_FILE: &str = "disable-auto-updates";

/// Tool-level settings file.
pub const SETTINGS_FILE: &str = "settings.toml";

/// Resolve the wrench home directory, creating it if necessary.
pub fn tool_home() -> Result<PathBuf> {
    let home = match std::env::var_os("WRENCH_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("", "", "wrench")
            .context("Could not determine a home directory for wrench")?
            .config_dir()
            .to_path_buf(),
    };
    ensure_dir(&home)?;
    Ok(home)
}

/// Directory holding per-profile TOML files.
pub fn profiles_dir(home: &Path) -> PathBuf {
    home.join("profiles")
}

/// Path of a named profile file.
pub fn profile_path(home: &Path, name: &str) -> PathBuf {
    profiles_dir(home).join(format!("{}.toml", name))
}

/// Default location of the managed depot_tools checkout.
pub fn default_depot_dir(home: &Path) -> PathBuf {
    home.join("depot_tools")
}

/// Ensure a directory exists
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    }
    Ok(())
}
