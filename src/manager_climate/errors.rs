use thiserror::Error;

/// Error depicting transport level failures while talking to the climate data API
///
#[derive(Error, Debug)]
pub enum ClimateError {
    #[error("ClientError: {0}")]
    Client(String),
    #[error("NetworkError: {0}")]
    Network(#[from] reqwest::Error),
}
