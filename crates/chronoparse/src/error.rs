//! Error types for chronoparse operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("No duration tokens found")]
    Empty,

    #[error("Unparsed trailing input: {0}")]
    TrailingInput(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Duration overflow: {0}")]
    Overflow(String),

    #[error("Datetime out of range: {0}")]
    OutOfRange(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ParseError>;
