//! Internal scanning and grammar for the `mime-accept` crate.

use std::error::Error;
use std::fmt;

pub mod scan;
mod rfc7231;

pub use self::rfc7231::{params, parse, parse_parameter, parse_type, parse_weight, Mime, Params};

/// The grammar rule a header value broke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseError {
    ExpectedToken,
    MissingSlash,
    MissingEqual,
    MissingQuote,
    InvalidQuotedPair,
    InvalidRange,
    InvalidWeight,
}

impl ParseError {
    fn as_str(&self) -> &'static str {
        match self {
            ParseError::ExpectedToken => "a token was expected",
            ParseError::MissingSlash => "a slash (/) was missing between the type and subtype",
            ParseError::MissingEqual => "an equals sign (=) was missing between a parameter and its value",
            ParseError::MissingQuote => "a quote (\") was missing from a parameter value",
            ParseError::InvalidQuotedPair => "a backslash was not followed by an escapable character",
            ParseError::InvalidRange => "a wildcard type must have a wildcard subtype",
            ParseError::InvalidWeight => "a quality value must be between 0 and 1 with at most three decimals",
        }
    }
}

impl Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
