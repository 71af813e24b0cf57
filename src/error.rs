use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum Error {
    CLI(String),
    Conf(String),
    InvalidDateFormat(String),
    InvalidMonth(String),
    InvalidYearFormat(String),
    InvalidYear { year: i32, current_year: i32 },
    EmptyRange(String),
    NodeDirectoryUnavailable(String),
    NodeFetchFailed { node_id: i64, reason: String },
    MalformedReceipt(String),
    IO(std::io::Error),
    Reqwest(reqwest::Error),
    SerdeJson(serde_json::Error),
    Url(url::ParseError),
    Csv(csv::Error),
    Xlsx(rust_xlsxwriter::XlsxError),
    Generic(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::CLI(err) => write!(f, "{}", err),
            Error::Conf(err) => write!(f, "Invalid configuration: {}", err),
            Error::InvalidDateFormat(input) => write!(
                f,
                "Invalid date format: {input}. Please provide the date in month.year format."
            ),
            Error::InvalidMonth(input) => write!(
                f,
                "Invalid month: {input}. Please provide a month between 1 and 12."
            ),
            Error::InvalidYearFormat(input) => write!(
                f,
                "Invalid year format: {input}. Please provide the year in two or four digits."
            ),
            Error::InvalidYear { year, current_year } => write!(
                f,
                "Invalid year: {year}. Please provide a year between 2015 and {current_year}."
            ),
            Error::EmptyRange(input) => write!(f, "Date range {input} doesn't contain any months"),
            Error::NodeDirectoryUnavailable(err) => {
                write!(f, "Failed to fetch farm nodes: {}", err)
            }
            Error::NodeFetchFailed { node_id, reason } => {
                write!(f, "Failed to fetch receipts for node {node_id}: {reason}")
            }
            Error::MalformedReceipt(err) => write!(f, "Malformed receipt: {}", err),
            Error::IO(err) => err.fmt(f),
            Error::Reqwest(err) => err.fmt(f),
            Error::SerdeJson(err) => err.fmt(f),
            Error::Url(err) => err.fmt(f),
            Error::Csv(err) => err.fmt(f),
            Error::Xlsx(err) => err.fmt(f),
            Error::Generic(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<&str> for Error {
    fn from(str: &str) -> Self {
        Error::Generic(str.to_owned())
    }
}

impl From<String> for Error {
    fn from(str: String) -> Self {
        Error::Generic(str)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::IO(error)
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::Reqwest(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::SerdeJson(error)
    }
}

impl From<url::ParseError> for Error {
    fn from(error: url::ParseError) -> Self {
        Error::Url(error)
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Error::Csv(error)
    }
}

impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(error: rust_xlsxwriter::XlsxError) -> Self {
        Error::Xlsx(error)
    }
}
