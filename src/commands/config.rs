//! Config subcommands handler

use std::path::Path;

use anyhow::Result;

use studybuddy::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Print the path the configuration is read from.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}
