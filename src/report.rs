use std::io;
use std::io::Write;
use crate::models::{format_records, ResultSet};

/// Number of records included in the report
pub const REPORT_COUNT: usize = 5;

/// Writes the report header followed by the first five records
///
/// # Arguments
///
/// * 'out' - sink to write the report to
/// * 'records' - the parsed result set
pub fn report<W: Write>(out: &mut W, records: &ResultSet) -> io::Result<()> {
    writeln!(out, "first five results")?;
    writeln!(out, "{}", format_records(records.first(REPORT_COUNT)))?;
    out.flush()
}

/// Writes the one line diagnostic for a failed request
///
/// # Arguments
///
/// * 'out' - sink to write the diagnostic to
/// * 'status' - the http status code received
pub fn report_failure<W: Write>(out: &mut W, status: u16) -> io::Result<()> {
    writeln!(out, "Failed to get data: {}", status)?;
    out.flush()
}
