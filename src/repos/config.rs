use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Error};
use dirs_next::config_dir;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

const MCP_DEPLOY_HOST: &str = "MCP_DEPLOY_HOST";
const MCP_DEPLOY_PORT: &str = "MCP_DEPLOY_PORT";
const MCP_DEPLOY_AWS_REGION: &str = "MCP_DEPLOY_AWS_REGION";
const MCP_DEPLOY_LOG_GATEWAY_TIMEOUT_SECS: &str = "MCP_DEPLOY_LOG_GATEWAY_TIMEOUT_SECS";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LOG_GATEWAY_TIMEOUT_SECS: u64 = 30;

pub const CONFIG_KEYS: [&str; 4] = ["host", "port", "aws_region", "log_gateway_timeout_secs"];

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct McpDeployConfig {
    #[serde(default = "default_host")]
    pub host: Option<String>,
    #[serde(default = "default_port")]
    pub port: Option<u16>,
    #[serde(default)]
    pub aws_region: Option<String>,
    #[serde(default = "default_log_gateway_timeout_secs")]
    pub log_gateway_timeout_secs: Option<u64>,
}

fn default_host() -> Option<String> {
    Some(DEFAULT_HOST.to_string())
}
fn default_port() -> Option<u16> {
    Some(DEFAULT_PORT)
}
fn default_log_gateway_timeout_secs() -> Option<u64> {
    Some(DEFAULT_LOG_GATEWAY_TIMEOUT_SECS)
}

impl Default for McpDeployConfig {
    fn default() -> Self {
        McpDeployConfig {
            host: default_host(),
            port: default_port(),
            aws_region: None,
            log_gateway_timeout_secs: default_log_gateway_timeout_secs(),
        }
    }
}

impl McpDeployConfig {
    pub fn from_toml(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, Error> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Current value of `key` as it is stored in the file.
    pub fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let value = match key {
            "host" => self.host.clone(),
            "port" => self.port.map(|p| p.to_string()),
            "aws_region" => self.aws_region.clone(),
            "log_gateway_timeout_secs" => self.log_gateway_timeout_secs.map(|t| t.to_string()),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        match key {
            "host" => self.host = Some(value.to_string()),
            "port" => self.port = Some(parse_value(key, value)?),
            "aws_region" => self.aws_region = Some(value.to_string()),
            "log_gateway_timeout_secs" => {
                self.log_gateway_timeout_secs = Some(parse_value(key, value)?)
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> Error {
    anyhow!(
        "Unknown configuration key '{}'. Known keys: {}",
        key,
        CONFIG_KEYS.join(", ")
    )
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, Error> {
    value
        .parse()
        .map_err(|_| anyhow!("Invalid value '{}' for '{}'", value, key))
}

static CONFIG: OnceCell<McpDeployConfig> = OnceCell::new();

pub fn get_config_path() -> PathBuf {
    let mut path = config_dir().unwrap_or_else(|| env::current_dir().unwrap_or_default());
    path.push("mcp-deploy");
    path.push("mcp-deploy.toml");
    path
}

/// Reads the config at `path`. A missing file means defaults; nothing is
/// written until `config --set` saves.
fn read_config_file(path: &Path) -> McpDeployConfig {
    if !path.exists() {
        info!("No config at {}, using defaults", path.display());
        return McpDeployConfig::default();
    }
    info!("Loading config from {}", path.display());
    let content = fs::read_to_string(path).unwrap_or_default();
    McpDeployConfig::from_toml(&content).unwrap_or_else(|e| {
        warn!("Ignoring unreadable config {}: {}", path.display(), e);
        McpDeployConfig::default()
    })
}

fn write_config_file(path: &Path, config: &McpDeployConfig) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, config.to_toml()?)?;
    Ok(())
}

pub fn save_config(config: &McpDeployConfig) -> Result<(), Error> {
    write_config_file(&get_config_path(), config)
}

pub fn get_config() -> &'static McpDeployConfig {
    CONFIG.get_or_init(|| read_config_file(&get_config_path()))
}

/// Environment beats the file, the file beats the built-in default.
/// Unparseable environment values are skipped.
fn env_or<T: FromStr>(key: &str, file_value: Option<T>, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .or(file_value)
        .unwrap_or(default)
}

pub fn get_host() -> String {
    env_or(MCP_DEPLOY_HOST, get_config().host.clone(), DEFAULT_HOST.to_string())
}

pub fn get_port() -> u16 {
    env_or(MCP_DEPLOY_PORT, get_config().port, DEFAULT_PORT)
}

pub fn get_aws_region() -> Option<String> {
    env::var(MCP_DEPLOY_AWS_REGION)
        .ok()
        .or_else(|| get_config().aws_region.clone())
}

pub fn get_log_gateway_timeout() -> Duration {
    Duration::from_secs(env_or(
        MCP_DEPLOY_LOG_GATEWAY_TIMEOUT_SECS,
        get_config().log_gateway_timeout_secs,
        DEFAULT_LOG_GATEWAY_TIMEOUT_SECS,
    ))
}
