use std::fmt;
use std::str::FromStr;

use mime_accept_parse::scan::skip_whitespace;

use crate::accept::AcceptRanges;
use crate::{Error, ErrorKind, MediaType, Parameters, Quality};

/// A parsed media range, one element of an `Accept` header.
///
/// Parameters before `q` constrain which media types match; parameters
/// after it are extension parameters and never take part in matching.
///
/// # Example
///
/// ```
/// use mime_accept::MediaRange;
///
/// // Suppose this was parsed from an `Accept` header
/// let range = MediaRange::parse("text/*;q=0.8").unwrap();
///
/// // The formats of the resource that we have:
/// let formats = vec![
///     mime_accept::APPLICATION_JSON,
///     mime_accept::TEXT_PLAIN_UTF_8,
///     mime_accept::TEXT_HTML,
/// ];
///
/// let matching = formats.iter().filter(|f| range.matches(f)).count();
/// assert_eq!(matching, 2);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct MediaRange {
    media_type: MediaType,
    quality: Quality,
    extensions: Parameters,
}

impl MediaRange {
    /// Parse a single media range.
    ///
    /// # Example
    ///
    /// ```
    /// let range = mime_accept::MediaRange::parse("text/html; level=1; q=0.5; ext=x").unwrap();
    /// assert_eq!(range.param("level"), Some("1"));
    /// assert_eq!(range.quality().as_u16(), 500);
    /// assert_eq!(range.extensions().get("ext"), Some("x"));
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with the same kinds as an `Accept` header, including
    /// [`ErrorKind::InvalidMediaRange`] when anything follows the range.
    pub fn parse(source: &str) -> Result<MediaRange, Error> {
        let (range, rest) = parse_range(source)?;
        if rest.is_empty() {
            Ok(range)
        } else {
            Err(Error::new(ErrorKind::InvalidMediaRange))
        }
    }

    /// Iterates the media ranges of an `Accept` header value.
    ///
    /// The iterator stops after yielding the first error.
    ///
    /// # Example
    ///
    /// ```
    /// let header = "text/html, application/json;q=0.9, */*;q=0.1";
    /// let ranges = mime_accept::MediaRange::parse_all(header)
    ///     .collect::<Result<Vec<_>, _>>()
    ///     .unwrap();
    ///
    /// assert_eq!(ranges.len(), 3);
    /// assert_eq!(ranges[1].subtype(), "json");
    /// assert_eq!(ranges[2].quality().to_string(), "0.1");
    /// ```
    pub fn parse_all(header: &str) -> AcceptRanges<'_> {
        AcceptRanges::new(header)
    }

    /// Get the top level media type, or `*`.
    #[inline]
    pub fn type_(&self) -> &str {
        self.media_type.type_()
    }

    /// Get the subtype, or `*`.
    ///
    /// # Example
    ///
    /// ```
    /// let range = mime_accept::MediaRange::parse("text/*").unwrap();
    ///
    /// assert_eq!(range.subtype(), "*");
    /// assert_eq!(range.subtype(), mime_accept::STAR);
    /// ```
    #[inline]
    pub fn subtype(&self) -> &str {
        self.media_type.subtype()
    }

    /// Look up a media type parameter by name.
    ///
    /// # Example
    ///
    /// ```
    /// let range = mime_accept::MediaRange::parse("text/plain; charset=utf-8").unwrap();
    ///
    /// assert_eq!(range.param(mime_accept::CHARSET), Some(mime_accept::UTF_8));
    /// assert_eq!(range.param("boundary"), None);
    /// ```
    pub fn param(&self, name: &str) -> Option<&str> {
        self.media_type.param(name)
    }

    /// The media type parameters, those that came before `q`.
    #[inline]
    pub fn params(&self) -> &Parameters {
        self.media_type.params()
    }

    /// The quality, `1` when no `q` was given.
    #[inline]
    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// The extension parameters, those that came after `q`.
    #[inline]
    pub fn extensions(&self) -> &Parameters {
        &self.extensions
    }

    /// The range as a media type, wildcards and parameters included.
    #[inline]
    pub fn media_type(&self) -> &MediaType {
        &self.media_type
    }

    /// Checks if this `MediaRange` matches a specific `MediaType`.
    ///
    /// Wildcards match any type or subtype, and every parameter of the
    /// range must be present in the media type with the same value.
    ///
    /// # Example
    ///
    /// ```
    /// let images = mime_accept::MediaRange::from(mime_accept::IMAGE_STAR);
    ///
    /// assert!(images.matches(&mime_accept::IMAGE_JPEG));
    /// assert!(images.matches(&mime_accept::IMAGE_PNG));
    ///
    /// assert!(!images.matches(&mime_accept::TEXT_PLAIN));
    /// ```
    pub fn matches(&self, mt: &MediaType) -> bool {
        let type_ = self.type_();

        if type_ == crate::STAR {
            // sanity check there's no `*/plain` or whatever
            debug_assert_eq!(self.subtype(), crate::STAR);

            return self.matches_params(mt);
        }

        if type_ != mt.type_() {
            return false;
        }

        let subtype = self.subtype();
        if subtype != crate::STAR && subtype != mt.subtype() {
            return false;
        }

        self.matches_params(mt)
    }

    fn matches_params(&self, mt: &MediaType) -> bool {
        self.params().is_subset_of(mt.params())
    }

    /// Whether this range should replace `other` as the range that scored
    /// a media type.
    ///
    /// A concrete type beats a wildcard type, a concrete subtype beats a
    /// wildcard subtype, and otherwise more media type parameters win.
    /// Ranges that are equally specific do not replace each other.
    pub(crate) fn is_more_specific_than(&self, other: &MediaRange) -> bool {
        if other.type_() == crate::STAR && self.type_() != crate::STAR {
            return true;
        }
        if other.subtype() == crate::STAR && self.subtype() != crate::STAR {
            return true;
        }
        other.params().len() < self.params().len()
    }
}

/// Parses one media range and returns it with the unconsumed input, past
/// any trailing whitespace.
pub(crate) fn parse_range(s: &str) -> Result<(MediaRange, &str), Error> {
    let (type_, subtype, rest) = mime_accept_parse::parse_type(s)
        .map_err(|e| Error::parse(ErrorKind::InvalidMediaType, e))?;

    let mut iter = mime_accept_parse::params(rest);
    let mut params = Parameters::new();
    let mut quality = Quality::MAX;
    for param in &mut iter {
        let (name, value) = param.map_err(|e| Error::parse(ErrorKind::InvalidParameter, e))?;
        if name == "q" {
            quality = Quality::parse(&value)?;
            break;
        }
        params.insert_parsed(name, value);
    }

    let mut extensions = Parameters::new();
    for param in &mut iter {
        let (name, value) =
            param.map_err(|e| Error::parse(ErrorKind::InvalidExtensionParameter, e))?;
        extensions.insert_parsed(name, value);
    }

    let media_type = MediaType::from_parts(type_, subtype, params);
    let range = MediaRange {
        media_type,
        quality,
        extensions,
    };
    Ok((range, skip_whitespace(iter.remaining())))
}

/// Any `MediaType` can freely be a `MediaRange`, with quality `1`.
///
/// # Example
///
/// ```
/// // If we only supported `text/plain`:
/// let range = mime_accept::MediaRange::from(mime_accept::TEXT_PLAIN);
/// assert_eq!(range.quality(), mime_accept::Quality::MAX);
/// ```
impl From<MediaType> for MediaRange {
    fn from(media_type: MediaType) -> MediaRange {
        MediaRange {
            media_type,
            quality: Quality::MAX,
            extensions: Parameters::new(),
        }
    }
}

impl FromStr for MediaRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<MediaRange, Self::Err> {
        MediaRange::parse(s)
    }
}

impl fmt::Debug for MediaRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.to_string(), f)
    }
}

/// Renders the media type, then `;q=` unless the quality is `1`, then the
/// extension parameters.
impl fmt::Display for MediaRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.media_type, f)?;
        if self.quality != Quality::MAX || !self.extensions.is_empty() {
            write!(f, ";q={}", self.quality)?;
        }
        fmt::Display::fmt(&self.extensions, f)
    }
}
