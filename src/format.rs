use std::borrow::Cow;
use std::fmt;
use std::iter::FromIterator;
use std::ops::Deref;
use std::slice;

use crate::{Error, MediaType, Negotiated};

/// Extensions that take precedence over the MIME database.
static EXTENSIONS: &[(&str, &str, &str)] = &[
    ("text", "plain", ".txt"),
    ("text", "markdown", ".md"),
    ("text", "html", ".html"),
    ("application", "json", ".json"),
    ("text", "csv", ".csv"),
    ("text", "xml", ".xml"),
    ("application", "gzip", ".gz"),
];

/// The file name extension for `type_/subtype`, including the `.`.
///
/// Falls back to the first extension `mime_guess` knows for the type.
pub(crate) fn extension(type_: &str, subtype: &str) -> Option<Cow<'static, str>> {
    if type_ == crate::STAR || subtype == crate::STAR {
        return None;
    }

    if let Some(&(_, _, ext)) = EXTENSIONS
        .iter()
        .find(|&&(t, s, _)| t == type_ && s == subtype)
    {
        return Some(Cow::Borrowed(ext));
    }

    let essence = format!("{}/{}", type_, subtype);
    mime_guess::get_mime_extensions_str(&essence)
        .and_then(|exts| exts.first())
        .map(|ext| Cow::Owned(format!(".{}", ext)))
}

/// An ordered list of media types a resource is available in.
///
/// The first entry is the default, chosen when a request has no `Accept`
/// header.
///
/// # Example
///
/// ```
/// use mime_accept::{Formats, APPLICATION_JSON, TEXT_HTML, TEXT_PLAIN};
///
/// let formats = Formats::from(vec![TEXT_HTML, APPLICATION_JSON]);
///
/// assert!(formats.contains(&APPLICATION_JSON));
/// assert!(!formats.contains(&TEXT_PLAIN));
/// assert_eq!(formats.to_string(), "text/html, application/json");
///
/// let chosen = formats.negotiate(Some("application/*")).unwrap();
/// assert_eq!(chosen.media_type(), &APPLICATION_JSON);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formats(Vec<MediaType>);

impl Formats {
    /// An empty list.
    pub fn new() -> Formats {
        Formats(Vec::new())
    }

    /// `text/plain` and `text/markdown`, for content that reads fine
    /// either way.
    pub fn markdown_compatible() -> Formats {
        Formats(vec![crate::TEXT_PLAIN, crate::TEXT_MARKDOWN])
    }

    /// Appends a media type.
    pub fn push(&mut self, mt: MediaType) {
        self.0.push(mt);
    }

    /// Whether `mt` is in the list, parameters included.
    pub fn contains(&self, mt: &MediaType) -> bool {
        self.0.iter().any(|f| f == mt)
    }

    /// The first media type, or `default` when the list is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use mime_accept::{Formats, TEXT_PLAIN};
    ///
    /// assert_eq!(Formats::new().first_or(&TEXT_PLAIN), &TEXT_PLAIN);
    /// assert_eq!(Formats::markdown_compatible().first_or(&mime_accept::STAR_STAR), &TEXT_PLAIN);
    /// ```
    pub fn first_or<'a>(&'a self, default: &'a MediaType) -> &'a MediaType {
        self.0.first().unwrap_or(default)
    }

    /// Chooses one of these formats for an `Accept` header.
    ///
    /// See [`negotiate`](crate::negotiate).
    pub fn negotiate(&self, accept: Option<&str>) -> Result<Negotiated<'_>, Error> {
        crate::negotiate(accept, &self.0)
    }
}

impl Deref for Formats {
    type Target = [MediaType];

    fn deref(&self) -> &[MediaType] {
        &self.0
    }
}

impl From<Vec<MediaType>> for Formats {
    fn from(formats: Vec<MediaType>) -> Formats {
        Formats(formats)
    }
}

impl FromIterator<MediaType> for Formats {
    fn from_iter<I: IntoIterator<Item = MediaType>>(iter: I) -> Formats {
        Formats(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Formats {
    type Item = &'a MediaType;
    type IntoIter = slice::Iter<'a, MediaType>;

    fn into_iter(self) -> slice::Iter<'a, MediaType> {
        self.0.iter()
    }
}

/// Joins the media types with `", "`, ready for an `Accept` header.
impl fmt::Display for Formats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, mt) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(mt, f)?;
        }
        Ok(())
    }
}
