use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid range `{0}` (expected n, >n, >=n, <n, <=n or min..max)")]
    InvalidRange(String),

    #[error("invalid date range `{0}` (dates must be formatted as yyyy-MM-dd)")]
    InvalidDateRange(String),

    #[error("unknown {kind} `{value}`")]
    UnknownValue { kind: &'static str, value: String },

    #[error("invalid url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid value `{value}` for {key}")]
    Config { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
