//! Config file commands.

use std::path::Path;

use crate::config::{self, Config};
use crate::error::{Error, Result};

use super::print_json;

/// Show the effective config, optionally writing defaults to disk first
pub fn cmd_config(config: &Config, explicit: Option<&Path>, init: bool, json: bool) -> Result<()> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => config::config_path(),
    };

    if init {
        let path = path.as_deref().ok_or(config::ConfigError::NoConfigDir)?;
        if path.exists() {
            return Err(Error::invalid_input(format!(
                "config file already exists at {}",
                path.display()
            )));
        }
        config::save_to(&Config::default(), path)?;
        println!("✓ Wrote default config to {}", path.display());
        return Ok(());
    }

    if json {
        return print_json(config);
    }

    match &path {
        Some(path) if path.exists() => println!("# {}", path.display()),
        Some(path) => println!("# {} (not found, using defaults)", path.display()),
        None => println!("# no config directory, using defaults"),
    }
    print!("{}", toml::to_string_pretty(config).map_err(config::ConfigError::Serialize)?);
    Ok(())
}
