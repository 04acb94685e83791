use std::num::{ParseFloatError, ParseIntError};
use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;
use crate::models::{Record, ResultSet};

/// First field value that marks a header row
const HEADER_TOKEN: &str = "year";

/// Parses a CSV document into a result set
/// Any row whose first field is exactly `year` is treated as a header and skipped, regardless
/// of where in the document it appears. The first row that can't be converted aborts the parse,
/// and so does a blank line since it is a row without fields.
///
/// # Arguments
///
/// * 'body' - CSV text with year in the first column and value in the second
pub fn parse_series(body: &str) -> Result<ResultSet, ParseError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut result = ResultSet::new();
    let mut row = StringRecord::new();
    loop {
        // The reader drops blank lines on its own, so look for one before each read
        let pos = reader.position();
        if let Some(line) = blank_line_at(body.as_bytes(), pos.byte() as usize, pos.line()) {
            return Err(ParseError::MissingField { line });
        }

        if !reader.read_record(&mut row)? {
            break;
        }
        if row.get(0) == Some(HEADER_TOKEN) {
            continue;
        }
        result.push(parse_row(&row)?);
    }

    Ok(result)
}

/// Returns the line number if the input at `start` opens with an empty line
///
/// # Arguments
///
/// * 'body' - the whole document
/// * 'start' - byte offset where the next row begins
/// * 'line' - line number at 'start'
fn blank_line_at(body: &[u8], start: usize, line: u64) -> Option<u64> {
    let mut rest = &body[start.min(body.len())..];
    let mut line = line;

    // A CRLF terminator may leave its '\n' to be consumed with the next row
    if start > 0 && body.get(start - 1) == Some(&b'\r') && rest.first() == Some(&b'\n') {
        rest = &rest[1..];
        line += 1;
    }

    match rest.first() {
        Some(b'\n') | Some(b'\r') => Some(line),
        _ => None,
    }
}

/// Converts one data row into a record, extra fields are ignored
///
/// # Arguments
///
/// * 'row' - the CSV row to convert
fn parse_row(row: &StringRecord) -> Result<Record, ParseError> {
    let line = row.position().map(|p| p.line()).unwrap_or(0);

    let (year, value) = match (row.get(0), row.get(1)) {
        (Some(y), Some(v)) => (y, v),
        _ => return Err(ParseError::MissingField { line }),
    };

    let year = year.trim().parse::<i32>()
        .map_err(|e| ParseError::Year { line, field: year.to_string(), source: e })?;
    let value = value.trim().parse::<f64>()
        .map_err(|e| ParseError::Value { line, field: value.to_string(), source: e })?;

    Ok(Record::new(year, value))
}

/// Error depicting errors that occur while parsing a climate series document
///
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("CsvError: {0}")]
    Csv(#[from] csv::Error),
    #[error("MissingField: line {line} has fewer than two fields")]
    MissingField { line: u64 },
    #[error("YearError: line {line}, '{field}': {source}")]
    Year { line: u64, field: String, source: ParseIntError },
    #[error("ValueError: line {line}, '{field}': {source}")]
    Value { line: u64, field: String, source: ParseFloatError },
}
