use std::fmt;
use std::str::FromStr;

use crate::{Error, ErrorKind};

/// A quality value (`q`), in thousandths.
///
/// Ranges from `0` ("not acceptable") to `1000` (`q=1`, the default).
///
/// # Example
///
/// ```
/// use mime_accept::Quality;
///
/// let q = Quality::parse("0.5").unwrap();
/// assert_eq!(q.as_u16(), 500);
/// assert_eq!(q.to_string(), "0.5");
/// assert!(q < Quality::MAX);
///
/// assert!(Quality::parse("1.001").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quality(u16);

impl Quality {
    /// `q=1`.
    pub const MAX: Quality = Quality(1000);

    /// `q=0`, not acceptable.
    pub const ZERO: Quality = Quality(0);

    /// Parses a `qvalue`: `0` to `1` with at most three decimals.
    pub fn parse(s: &str) -> Result<Quality, Error> {
        mime_accept_parse::parse_weight(s)
            .map(Quality)
            .map_err(|e| Error::parse(ErrorKind::InvalidWeight, e))
    }

    /// Creates a quality from thousandths, if it is at most `1000`.
    pub fn from_u16(thousandths: u16) -> Option<Quality> {
        if thousandths <= 1000 {
            Some(Quality(thousandths))
        } else {
            None
        }
    }

    /// The value in thousandths.
    pub fn as_u16(self) -> u16 {
        self.0
    }

    /// Whether this is above zero.
    pub fn is_acceptable(self) -> bool {
        self.0 > 0
    }
}

impl Default for Quality {
    fn default() -> Quality {
        Quality::MAX
    }
}

impl FromStr for Quality {
    type Err = Error;

    fn from_str(s: &str) -> Result<Quality, Error> {
        Quality::parse(s)
    }
}

/// Writes the shortest form: `1`, `0`, `0.5`, `0.125`.
impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            1000 => f.write_str("1"),
            0 => f.write_str("0"),
            n => {
                let digits = format!("{:03}", n);
                write!(f, "0.{}", digits.trim_end_matches('0'))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Quality::parse("1").unwrap(), Quality::MAX);
        assert_eq!(Quality::parse("1.0").unwrap(), Quality::MAX);
        assert_eq!(Quality::parse("1.000").unwrap(), Quality::MAX);
        assert_eq!(Quality::parse("0").unwrap(), Quality::ZERO);
        assert_eq!(Quality::parse("0.5").unwrap().as_u16(), 500);
    }

    #[test]
    fn test_parse_errors() {
        for s in &["1.001", "abc", "0.12345", "", "-0", "0.5 "] {
            let err = Quality::parse(s).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidWeight, "{:?}", s);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Quality::MAX.to_string(), "1");
        assert_eq!(Quality::ZERO.to_string(), "0");
        assert_eq!(Quality(500).to_string(), "0.5");
        assert_eq!(Quality(50).to_string(), "0.05");
        assert_eq!(Quality(125).to_string(), "0.125");
        assert_eq!(Quality(1).to_string(), "0.001");
    }

    #[test]
    fn test_from_u16() {
        assert_eq!(Quality::from_u16(1000), Some(Quality::MAX));
        assert_eq!(Quality::from_u16(1001), None);
        assert!(!Quality::ZERO.is_acceptable());
        assert!(Quality::from_u16(1).unwrap().is_acceptable());
    }
}
