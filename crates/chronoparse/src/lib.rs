//! # chronoparse
//!
//! Parse human-written relative durations such as `"3 weeks 2 hours 13 seconds"`
//! into a total number of seconds and a resolved start/end timestamp pair.
//!
//! Parsing is all-or-nothing: if any part of the input cannot be understood,
//! no result is produced.
//!
//! ## Modules
//!
//! - [`parser`] — [`parse`] / [`try_parse`], options and results
//! - [`units`] — The fixed unit table (second through decade)
//! - [`clock`] — Injectable wall-clock and UTC offset sources
//! - [`error`] — Error types

pub mod clock;
pub mod error;
pub mod parser;
pub mod units;

pub use clock::{format_timezone, Clock, FixedClock, SystemClock, ZonedClock};
pub use error::ParseError;
pub use parser::{
    parse, parse_with_clock, try_parse, try_parse_with_clock, ParseOptions, ParseResult,
    Token,
};
pub use units::Unit;
