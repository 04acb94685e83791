use std::io;
use std::io::Write;
use log::info;
use thiserror::Error;
use crate::manager_climate::errors::ClimateError;
use crate::manager_climate::SeriesSource;
use crate::parsing::{parse_series, ParseError};
use crate::report::{report, report_failure};

/// How a run ended when it didn't fail
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// The series was parsed and reported, holds the total number of records
    Reported(usize),
    /// The API answered with something other than 200
    Failed(u16),
}

/// Fetches the series, parses it and writes the report.
/// A non-200 status is reported and ends the run without parsing. A parse failure
/// ends the run before anything is written.
///
/// # Arguments
///
/// * 'source' - where to fetch the series from
/// * 'out' - sink for the report
pub fn run<S: SeriesSource, W: Write>(source: &S, out: &mut W) -> Result<Outcome, WorkerError> {
    let response = source.fetch()?;

    if !response.is_ok() {
        report_failure(out, response.status)?;
        return Ok(Outcome::Failed(response.status));
    }

    let records = parse_series(&response.body)?;
    match records.span() {
        Some((first, last)) => info!("parsed {} records, years {} - {}", records.len(), first, last),
        None => info!("parsed 0 records"),
    }

    report(out, &records)?;

    Ok(Outcome::Reported(records.len()))
}

/// Error depicting errors that end a run
///
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("FetchError: {0}")]
    Fetch(#[from] ClimateError),
    #[error("ParseError: {0}")]
    Parse(#[from] ParseError),
    #[error("OutputError: {0}")]
    Output(#[from] io::Error),
}
