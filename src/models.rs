use std::fmt;
use std::fmt::{Display, Formatter};

/// One observation from the climate series, mean annual temperature in degrees Celsius
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
    year: i32,
    value: f64,
}

impl Record {
    /// Returns a new record
    ///
    /// # Arguments
    ///
    /// * 'year' - calendar year of the observation
    /// * 'value' - observed value for the year
    pub fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.year, format_value(self.value))
    }
}

/// Formats a value in its shortest round-trip form, i.e. `-7.67`, `10.0`, `1e+16`, `1e-05` or `nan`
///
/// # Arguments
///
/// * 'value' - the value to format
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }

    // Debug switches to exponent form outside [1e-4, 1e16) and keeps the trailing '.0' otherwise
    let debug = format!("{:?}", value);
    match debug.split_once('e') {
        None => debug,
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
    }
}

/// Records in the order they appeared in the source document, duplicates included
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultSet {
    records: Vec<Record>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns at most the `n` first records, fewer if the set is shorter
    ///
    /// # Arguments
    ///
    /// * 'n' - maximum number of records to return
    pub fn first(&self, n: usize) -> &[Record] {
        &self.records[..n.min(self.records.len())]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Returns the first and last year in the set, in source order
    pub fn span(&self) -> Option<(i32, i32)> {
        match (self.records.first(), self.records.last()) {
            (Some(a), Some(b)) => Some((a.year, b.year)),
            _ => None,
        }
    }
}

impl From<Vec<Record>> for ResultSet {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

/// Formats a slice of records as a nested list, i.e. `[[1901, -7.67], [1902, -7.86]]`
///
/// # Arguments
///
/// * 'records' - the records to format
pub fn format_records(records: &[Record]) -> String {
    let inner = records
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<String>>()
        .join(", ");

    format!("[{}]", inner)
}
