//! Use command - select the active build profile

use std::path::Path;

use anyhow::Result;
use clap::Args;
use console::style;

use crate::config;

/// Make a named profile the active one
#[derive(Args, Debug)]
pub struct UseCommand {
    /// Profile name (file stem under the profiles directory)
    pub name: String,
}

impl UseCommand {
    pub fn execute(self, home: &Path, _verbose: bool) -> Result<i32> {
        let config = config::set_active(home, &self.name)?;
        eprintln!(
            "{} now using profile '{}' ({})",
            style("✓").green().bold(),
            config.name,
            config.out_dir().display()
        );
        Ok(0)
    }
}
