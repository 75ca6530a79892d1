//! Relative duration parsing.
//!
//! Turns expressions like `"3 weeks 2 hours 13 seconds"` into a total number
//! of seconds plus a start/end timestamp pair. Parsing is all-or-nothing: an
//! unknown unit, a bad quantity, or any unconsumed trailing text fails the
//! whole call.
//!
//! # Grammar
//!
//! A token is one or more ASCII digits, an optional single space, then one or
//! more ASCII letters. Tokens are separated by the configured delimiter
//! (default `" "`); repeated delimiters and whitespace after a delimiter are
//! tolerated.
//!
//! Unit text is case-insensitive and may be the full name (`hour`), the plural
//! (`hours`), or a single first letter (`h`). See [`Unit::resolve`].

use std::sync::LazyLock;

use chrono::{DateTime, TimeDelta, Utc};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, trace};

use crate::clock::{format_timezone, Clock, SystemClock};
use crate::error::{ParseError, Result};
use crate::units::Unit;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+) ?([a-zA-Z]+)").expect("token pattern compiles"));

const DEFAULT_DELIMITER: &str = " ";

// ── Options ─────────────────────────────────────────────────────────────────

/// Options for [`parse`] and friends.
///
/// Deserializable so embedding code can keep it in a JSON config record;
/// missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Separator expected between tokens. Empty or `null` means the default single space.
    #[serde(deserialize_with = "delimiter_or_default")]
    pub delimiter: String,
    /// Maximum number of tokens to consume. `None` or `Some(0)` means unlimited.
    pub max: Option<usize>,
    /// Base instant for `end_date`. Defaults to the clock's current time.
    pub start_date: Option<DateTime<Utc>>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            max: None,
            start_date: None,
        }
    }
}

impl ParseOptions {
    /// Load options from a JSON object such as `{"delimiter": ",", "max": 2}`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidConfig`] on malformed JSON or mistyped keys
    /// (e.g., a negative `max`).
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ParseError::InvalidConfig(e.to_string()))
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    pub fn with_start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = Some(start_date);
        self
    }

    fn effective_delimiter(&self) -> &str {
        if self.delimiter.is_empty() {
            DEFAULT_DELIMITER
        } else {
            &self.delimiter
        }
    }

    fn limit(&self) -> Option<usize> {
        self.max.filter(|&max| max > 0)
    }
}

fn delimiter_or_default<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let delimiter = Option::<String>::deserialize(deserializer)?;
    Ok(delimiter.unwrap_or_else(|| DEFAULT_DELIMITER.to_string()))
}

// ── Result ──────────────────────────────────────────────────────────────────

/// One matched `<quantity><unit>` token with its unit resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The matched substring, e.g. `"3 weeks"`.
    pub text: String,
    pub quantity: u64,
    pub unit: Unit,
}

impl Token {
    /// Seconds contributed by this token.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Overflow`] if the product does not fit in a `u64`.
    pub fn seconds(&self) -> Result<u64> {
        self.quantity
            .checked_mul(self.unit.seconds())
            .ok_or_else(|| ParseError::Overflow(format!("'{}'", self.text)))
    }
}

/// A successfully parsed duration expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    /// Sum of quantity × unit seconds over every token.
    pub total_seconds: u64,
    /// The matched token substrings, in input order (e.g., `["3 weeks", "2 hours"]`).
    pub parts: Vec<String>,
    /// The resolved tokens, parallel to `parts`.
    pub tokens: Vec<Token>,
    /// The base instant.
    pub start_date: DateTime<Utc>,
    /// `start_date + total_seconds`.
    pub end_date: DateTime<Utc>,
    /// Local UTC offset at parse time, e.g. `"UTC-5"`.
    pub timezone: String,
}

impl ParseResult {
    /// The span between `start_date` and `end_date`.
    pub fn duration(&self) -> TimeDelta {
        self.end_date - self.start_date
    }
}

// ── Entry points ────────────────────────────────────────────────────────────

/// Parse a duration expression against the system clock.
///
/// Returns `None` on any failure; use [`try_parse`] to learn why.
///
/// # Examples
///
/// ```
/// use chronoparse::{parse, ParseOptions};
///
/// let result = parse("3 weeks 2 hours 13 seconds", &ParseOptions::default()).unwrap();
/// assert_eq!(result.total_seconds, 1_821_613);
///
/// assert!(parse("no days", &ParseOptions::default()).is_none());
/// ```
pub fn parse(text: &str, options: &ParseOptions) -> Option<ParseResult> {
    parse_with_clock(text, options, &SystemClock)
}

/// [`parse`] with an injected clock.
pub fn parse_with_clock<C: Clock>(
    text: &str,
    options: &ParseOptions,
    clock: &C,
) -> Option<ParseResult> {
    try_parse_with_clock(text, options, clock).ok()
}

/// Parse a duration expression against the system clock, reporting the failure reason.
///
/// # Errors
///
/// See [`try_parse_with_clock`].
pub fn try_parse(text: &str, options: &ParseOptions) -> Result<ParseResult> {
    try_parse_with_clock(text, options, &SystemClock)
}

/// Parse a duration expression, reading "now" and the local offset from `clock`.
///
/// The clock is read once for the current instant and once for the offset at
/// that instant, even when `options.start_date` is set.
///
/// # Errors
///
/// - [`ParseError::Empty`] if no token matched at the start of `text`
/// - [`ParseError::TrailingInput`] if text remains that is not a token
/// - [`ParseError::InvalidQuantity`] if a quantity does not fit in a `u64`
/// - [`ParseError::UnknownUnit`] if a unit name is not recognized
/// - [`ParseError::Overflow`] if the total does not fit in a `u64`
/// - [`ParseError::OutOfRange`] if `end_date` is not representable
pub fn try_parse_with_clock<C: Clock>(
    text: &str,
    options: &ParseOptions,
    clock: &C,
) -> Result<ParseResult> {
    let outcome = evaluate(text, options, clock);
    match &outcome {
        Ok(result) => debug!(
            input = text,
            total_seconds = result.total_seconds,
            tokens = result.parts.len(),
            "parsed duration"
        ),
        Err(e) => debug!(input = text, error = %e, "duration parse failed"),
    }
    outcome
}

// ── Internals ───────────────────────────────────────────────────────────────

/// One token as captured, before unit resolution.
struct RawToken<'a> {
    text: &'a str,
    quantity: &'a str,
    unit: &'a str,
}

fn evaluate<C: Clock>(text: &str, options: &ParseOptions, clock: &C) -> Result<ParseResult> {
    let tokens = scan(text, options)?
        .iter()
        .map(resolve_token)
        .collect::<Result<Vec<_>>>()?;

    let mut total_seconds: u64 = 0;
    for token in &tokens {
        total_seconds = total_seconds.checked_add(token.seconds()?).ok_or_else(|| {
            ParseError::Overflow(format!("total exceeds u64 at '{}'", token.text))
        })?;
    }
    let parts = tokens.iter().map(|t| t.text.clone()).collect();

    let now = clock.now();
    let start_date = options.start_date.unwrap_or(now);
    let end_date = i64::try_from(total_seconds)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .and_then(|delta| start_date.checked_add_signed(delta))
        .ok_or_else(|| ParseError::OutOfRange(format!("{start_date} + {total_seconds}s")))?;
    let timezone = format_timezone(clock.utc_offset(now));

    Ok(ParseResult {
        total_seconds,
        parts,
        tokens,
        start_date,
        end_date,
        timezone,
    })
}

/// Tokenize `text` up to the configured limit, requiring it to be fully consumed.
fn scan<'a>(text: &'a str, options: &ParseOptions) -> Result<Vec<RawToken<'a>>> {
    let delimiter = options.effective_delimiter();
    let limit = options.limit();

    let mut rest = text;
    let mut tokens = Vec::new();

    while limit.is_none_or(|max| tokens.len() < max) {
        let Some(caps) = TOKEN_RE.captures(rest) else {
            break;
        };
        let (whole, [quantity, unit]) = caps.extract();
        trace!(token = whole, "matched token");
        tokens.push(RawToken {
            text: whole,
            quantity,
            unit,
        });
        rest = strip_delimiters(&rest[whole.len()..], delimiter);
    }

    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let limit_reached = limit.is_some_and(|max| tokens.len() >= max);
    if !limit_reached && !rest.is_empty() {
        return Err(ParseError::TrailingInput(format!("'{rest}'")));
    }

    Ok(tokens)
}

/// Drop every leading `delimiter`, trimming whitespace after each one.
fn strip_delimiters<'a>(mut s: &'a str, delimiter: &str) -> &'a str {
    while let Some(stripped) = s.strip_prefix(delimiter) {
        s = stripped.trim_start();
    }
    s
}

fn resolve_token(raw: &RawToken<'_>) -> Result<Token> {
    let quantity: u64 = raw
        .quantity
        .parse()
        .map_err(|_| ParseError::InvalidQuantity(format!("'{}'", raw.quantity)))?;
    let unit = Unit::resolve(raw.unit)
        .ok_or_else(|| ParseError::UnknownUnit(format!("'{}'", raw.unit)))?;
    Ok(Token {
        text: raw.text.to_string(),
        quantity,
        unit,
    })
}

// ── Tests ───────────────────────────────────────────────────────────────────
