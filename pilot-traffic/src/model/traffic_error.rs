use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrafficError {
    #[error("failure reading traffic dataset: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("failure reading or writing file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("row {row} has hour {hour}, must be in range [0, 23]")]
    InvalidHourError { row: usize, hour: i64 },
    #[error("unable to parse '{0}' as a date, expected YYYY-MM-DD")]
    InvalidDateError(String),
    #[error("traffic dataset '{0}' contains no rows")]
    EmptyDatasetError(String),
    #[error("failure geocoding cell '{cell}': {message}")]
    GeocodeError { cell: String, message: String },
    #[error("cell '{cell}' has no traffic on {date} at hour {hour}")]
    UnknownCellError {
        cell: String,
        date: NaiveDate,
        hour: u8,
    },
    #[error("failure reading dashboard configuration: {0}")]
    ConfigurationError(String),
    #[error("{0}")]
    OtherError(String),
}
