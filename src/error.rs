use std::error::Error as StdError;
use std::fmt;

use mime_accept_parse::ParseError;

/// The kinds of failure when parsing or negotiating media types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The `type/subtype` part is malformed, or a `Content-Type` value has
    /// text left over after its parameters.
    InvalidMediaType,
    /// An `Accept` header has text left over after its last media range.
    InvalidMediaRange,
    /// A media type parameter is not a valid `name=value` pair.
    InvalidParameter,
    /// An `Accept` extension parameter (after `q`) is not a valid
    /// `name=value` pair.
    InvalidExtensionParameter,
    /// A `q` parameter is not a valid quality value.
    InvalidWeight,
    /// No available media type is acceptable to the client.
    NoAcceptableTypeFound,
    /// The list of available media types was empty.
    NoAvailableTypeGiven,
}

impl ErrorKind {
    fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidMediaType => "invalid media type",
            ErrorKind::InvalidMediaRange => "invalid media range",
            ErrorKind::InvalidParameter => "invalid parameter",
            ErrorKind::InvalidExtensionParameter => "invalid extension parameter",
            ErrorKind::InvalidWeight => "invalid weight",
            ErrorKind::NoAcceptableTypeFound => "no acceptable type found",
            ErrorKind::NoAvailableTypeGiven => "no available type given",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error parsing a media type or negotiating an `Accept` header.
///
/// # Example
///
/// ```
/// use mime_accept::{ErrorKind, MediaType};
///
/// let err = MediaType::parse("text").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidMediaType);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    inner: Option<ParseError>,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Error {
        Error {
            kind,
            inner: None,
        }
    }

    pub(crate) fn parse(kind: ErrorKind, inner: ParseError) -> Error {
        Error {
            kind,
            inner: Some(inner),
        }
    }

    /// What went wrong.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error::new(kind)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.as_ref().map(|e| e as &(dyn StdError + 'static))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.inner {
            Some(ref inner) => write!(f, "{}: {}", self.kind, inner),
            None => fmt::Display::fmt(&self.kind, f),
        }
    }
}
