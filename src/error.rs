//! Error types

use std::fmt;

/// Error returned from the fallible shaping entry points
///
/// The shaping core itself never fails. Errors only arise when converting caller input into
/// characters and script tags.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ShapingError {
    /// A surrogate or a value above U+10FFFF.
    InvalidCodepoint(u32),
    Parse(ParseError),
}

impl From<ParseError> for ShapingError {
    fn from(error: ParseError) -> Self {
        ShapingError::Parse(error)
    }
}

impl fmt::Display for ShapingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapingError::InvalidCodepoint(cp) => write!(f, "invalid code point 0x{:X}", cp),
            ShapingError::Parse(err) => write!(f, "shaping parse: {}", err),
        }
    }
}

impl std::error::Error for ShapingError {}

/// Errors that originate when parsing tags
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ParseError {
    BadValue,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BadValue => write!(f, "invalid value"),
        }
    }
}

impl std::error::Error for ParseError {}
