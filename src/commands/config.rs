use anyhow::{anyhow, Error};

use crate::args::ConfigSubCommand;
use crate::repos::config::{get_config, get_config_path, save_config, McpDeployConfig};

fn apply_set(config: &mut McpDeployConfig, assignment: &str) -> Result<(), Error> {
    let (key, value) = assignment
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected key=value, got '{}'", assignment))?;
    config.set(key.trim(), value.trim())
}

pub fn run(config_cmd: &ConfigSubCommand) -> Result<(), Error> {
    let mut config = get_config().clone();

    if let Some(assignment) = &config_cmd.set {
        apply_set(&mut config, assignment)?;
        save_config(&config)?;
        println!("Saved {}", get_config_path().display());
    }

    if let Some(key) = &config_cmd.get {
        match config.get(key)? {
            Some(value) => println!("{}", value),
            None => println!("{} is not set", key),
        }
    }

    if config_cmd.set.is_none() && config_cmd.get.is_none() {
        println!("# {}", get_config_path().display());
        print!("{}", config.to_toml()?);
    }

    Ok(())
}
