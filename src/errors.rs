use thiserror::Error;

/// Error depicting a failed run of the tool as a whole
///
#[derive(Debug, Error)]
#[error("error while retrieving climate series: {0}")]
pub struct RunError(pub String);
