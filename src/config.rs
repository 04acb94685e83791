use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;
use crate::manager_climate::DEFAULT_URL;

#[derive(Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct General {
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
    pub log_to_stderr: bool,
}

impl Default for General {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LevelFilter::Warn,
            log_to_stderr: true,
        }
    }
}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct Source {
    pub url: String,
    // No timeout unless configured
    pub timeout_secs: Option<u64>,
}

impl Default for Source {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub general: General,
    pub source: Source,
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, LoadConfigurationError> {
    let toml = fs::read_to_string(config_path)
        .map_err(|e| LoadConfigurationError::Read(format!("{}: {}", config_path, e)))?;
    let config: Config = toml::from_str(&toml)?;

    Ok(config)
}

/// Error depicting errors that occur while loading the configuration file
///
#[derive(Debug, Error)]
pub enum LoadConfigurationError {
    #[error("ReadError: {0}")]
    Read(String),
    #[error("DocumentError: {0}")]
    Document(#[from] toml::de::Error),
}
