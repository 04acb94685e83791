use std::env;
use log::info;
use thiserror::Error;
use crate::config::{load_config, Config, LoadConfigurationError};
use crate::logging::{setup_logger, LoggerError};
use crate::manager_climate::ClimateApi;
use crate::manager_climate::errors::ClimateError;

pub struct Mgr {
    pub climate: ClimateApi,
}

/// Initializes and returns configuration and a Mgr struct holding the climate api client
///
pub fn init() -> Result<(Config, Mgr), InitializationError> {
    let args: Vec<String> = env::args().collect();

    // Load configuration, defaults if none is given
    let config = match config_path(&args)? {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    // Setup logging
    let _ = setup_logger(&config.general.log_path, config.general.log_level, config.general.log_to_stderr)?;

    // Print version
    info!("starting climate series version: {}", env!("CARGO_PKG_VERSION"));

    let climate = ClimateApi::new(&config.source)?;

    Ok((config, Mgr { climate }))
}

/// Picks out the path from a `--config=<path>` argument if there is one
///
/// # Arguments
///
/// * 'args' - command line arguments
fn config_path(args: &[String]) -> Result<Option<&str>, InitializationError> {
    match args.iter().find(|p| *p == "--config" || p.starts_with("--config=")) {
        None => Ok(None),
        Some(arg) => match arg.split_once('=') {
            Some((_, path)) if !path.is_empty() => Ok(Some(path)),
            _ => Err(InitializationError::Argument(arg.to_string())),
        },
    }
}

/// Error depicting errors that occur while initializing
///
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("ArgumentError: expected --config=<path>, got '{0}'")]
    Argument(String),
    #[error("ConfigurationError: {0}")]
    ConfigurationError(#[from] LoadConfigurationError),
    #[error("SetupLoggerError: {0}")]
    SetupLoggerError(#[from] LoggerError),
    #[error("ClimateApiError: {0}")]
    ClimateApiError(#[from] ClimateError),
}
