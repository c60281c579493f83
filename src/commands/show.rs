//! Show command - print the active profile and its derived paths

use std::path::Path;

use anyhow::Result;
use clap::Args;
use console::style;

use crate::config;

/// Show the active profile and what it resolves to
#[derive(Args, Debug)]
pub struct ShowCommand {}

impl ShowCommand {
    pub fn execute(self, home: &Path, _verbose: bool) -> Result<i32> {
        let config = config::active_profile(home)?;

        println!("{} {}", style("profile:").bold(), config.name);
        println!("{} {}", style("root:").bold(), config.root.display());
        println!("{} {}", style("out dir:").bold(), config.out_dir().display());
        println!(
            "{} {}",
            style("executable:").bold(),
            config.exec_path().display()
        );
        Ok(0)
    }
}
