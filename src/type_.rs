use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::{Error, ErrorKind, Parameters};

/// A parsed media type (or "MIME").
///
/// Type, subtype and parameters are lowercased when parsed. Either part
/// may be the `*` wildcard, as long as a wildcard type comes with a
/// wildcard subtype; media types are used both for what a server can
/// produce and for the ranges a client accepts.
#[derive(Clone)]
pub struct MediaType {
    type_: Cow<'static, str>,
    subtype: Cow<'static, str>,
    params: Parameters,
}

impl MediaType {
    /// Parse a string as a `MediaType`.
    ///
    /// # Example
    ///
    /// ```
    /// let mt = mime_accept::MediaType::parse("text/plain").unwrap();
    /// assert_eq!(mt, mime_accept::TEXT_PLAIN);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidMediaType`] when the `type/subtype` part
    /// is malformed or text is left after the parameters, and
    /// [`ErrorKind::InvalidParameter`] for a malformed parameter.
    pub fn parse(source: &str) -> Result<MediaType, Error> {
        let (type_, subtype, rest) = mime_accept_parse::parse_type(source)
            .map_err(|e| Error::parse(ErrorKind::InvalidMediaType, e))?;

        let mut iter = mime_accept_parse::params(rest);
        let mut params = Parameters::new();
        for param in &mut iter {
            let (name, value) = param.map_err(|e| Error::parse(ErrorKind::InvalidParameter, e))?;
            params.insert_parsed(name, value);
        }

        if !iter.remaining().is_empty() {
            return Err(Error::new(ErrorKind::InvalidMediaType));
        }

        Ok(MediaType::from_parts(type_, subtype, params))
    }

    pub(crate) fn from_parts(type_: Cow<'_, str>, subtype: Cow<'_, str>, params: Parameters) -> MediaType {
        MediaType {
            type_: Cow::Owned(type_.into_owned()),
            subtype: Cow::Owned(subtype.into_owned()),
            params,
        }
    }

    pub(crate) const fn from_static(
        type_: &'static str,
        subtype: &'static str,
        params: &'static [(&'static str, &'static str)],
    ) -> MediaType {
        MediaType {
            type_: Cow::Borrowed(type_),
            subtype: Cow::Borrowed(subtype),
            params: Parameters::from_static(params),
        }
    }

    /// Get the top level media type.
    ///
    /// # Example
    ///
    /// ```
    /// let mt = mime_accept::TEXT_PLAIN;
    /// assert_eq!(mt.type_(), "text");
    /// assert_eq!(mt.type_(), mime_accept::TEXT);
    /// ```
    #[inline]
    pub fn type_(&self) -> &str {
        &self.type_
    }

    /// Get the subtype, including any `+suffix`.
    ///
    /// # Example
    ///
    /// ```
    /// let svg = mime_accept::IMAGE_SVG;
    /// assert_eq!(svg.subtype(), "svg+xml");
    /// ```
    #[inline]
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Get an optional +suffix.
    ///
    /// # Example
    ///
    /// ```
    /// let svg = mime_accept::IMAGE_SVG;
    /// assert_eq!(svg.suffix(), Some(mime_accept::XML));
    ///
    /// assert!(mime_accept::TEXT_PLAIN.suffix().is_none());
    /// ```
    pub fn suffix(&self) -> Option<&str> {
        self.subtype.rfind('+').map(|idx| &self.subtype[idx + 1..])
    }

    /// Look up a parameter by name.
    ///
    /// # Example
    ///
    /// ```
    /// let mt = mime_accept::TEXT_PLAIN_UTF_8;
    /// assert_eq!(mt.param(mime_accept::CHARSET), Some(mime_accept::UTF_8));
    /// assert!(mt.param("boundary").is_none());
    /// ```
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// The parameters.
    #[inline]
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Returns true if the media type has at least one parameter.
    #[inline]
    pub fn has_params(&self) -> bool {
        !self.params.is_empty()
    }

    /// Returns true if the type or subtype is `*`.
    ///
    /// # Example
    ///
    /// ```
    /// assert!(mime_accept::STAR_STAR.is_wildcard());
    /// assert!(mime_accept::TEXT_STAR.is_wildcard());
    /// assert!(!mime_accept::TEXT_PLAIN.is_wildcard());
    /// ```
    pub fn is_wildcard(&self) -> bool {
        self.type_ == crate::STAR || self.subtype == crate::STAR
    }

    /// The `type/subtype` part, without parameters.
    ///
    /// # Example
    ///
    /// ```
    /// let mt = mime_accept::MediaType::parse("text/plain; charset=utf-8").unwrap();
    /// assert_eq!(mt.essence(), "text/plain");
    /// ```
    pub fn essence(&self) -> String {
        format!("{}/{}", self.type_, self.subtype)
    }

    /// Compares type and subtype only, ignoring parameters.
    ///
    /// # Example
    ///
    /// ```
    /// let utf8 = mime_accept::TEXT_PLAIN_UTF_8;
    /// assert!(utf8.essence_eq(&mime_accept::TEXT_PLAIN));
    /// assert_ne!(utf8, mime_accept::TEXT_PLAIN);
    /// ```
    pub fn essence_eq(&self, other: &MediaType) -> bool {
        self.type_ == other.type_ && self.subtype == other.subtype
    }

    /// A file name extension, including the `.`.
    ///
    /// Common text and data formats have fixed answers; anything else is
    /// looked up in the `mime_guess` database. Wildcards have none.
    ///
    /// # Example
    ///
    /// ```
    /// assert_eq!(mime_accept::TEXT_MARKDOWN.extension().as_deref(), Some(".md"));
    /// assert_eq!(mime_accept::TEXT_PLAIN_UTF_8.extension().as_deref(), Some(".txt"));
    /// assert_eq!(mime_accept::IMAGE_PNG.extension().as_deref(), Some(".png"));
    /// assert_eq!(mime_accept::STAR_STAR.extension(), None);
    /// ```
    pub fn extension(&self) -> Option<Cow<'static, str>> {
        crate::format::extension(self.type_(), self.subtype())
    }

    /// Renders the media type with its parameters sorted by name.
    ///
    /// Media types that compare equal render to the same string, whatever
    /// order their parameters were written in.
    ///
    /// # Example
    ///
    /// ```
    /// use mime_accept::MediaType;
    ///
    /// let a = MediaType::parse("text/plain; format=flowed; charset=utf-8").unwrap();
    /// let b = MediaType::parse("text/plain; charset=UTF-8; format=flowed").unwrap();
    ///
    /// assert_ne!(a.to_string(), b.to_string());
    /// assert_eq!(a.canonical(), "text/plain;charset=utf-8;format=flowed");
    /// assert_eq!(a.canonical(), b.canonical());
    /// ```
    pub fn canonical(&self) -> String {
        format!("{:#}", self)
    }
}

impl PartialEq for MediaType {
    fn eq(&self, other: &MediaType) -> bool {
        self.essence_eq(other) && self.params == other.params
    }
}

impl Eq for MediaType {}

impl PartialEq<str> for MediaType {
    fn eq(&self, s: &str) -> bool {
        MediaType::parse(s)
            .map(|other| *self == other)
            .unwrap_or(false)
    }
}

impl<'a> PartialEq<&'a str> for MediaType {
    #[inline]
    fn eq(&self, s: & &'a str) -> bool {
        self == *s
    }
}

impl<'a> PartialEq<MediaType> for &'a str {
    #[inline]
    fn eq(&self, mt: &MediaType) -> bool {
        mt == self
    }
}

impl PartialEq<MediaType> for str {
    #[inline]
    fn eq(&self, mt: &MediaType) -> bool {
        mt == self
    }
}

impl FromStr for MediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<MediaType, Self::Err> {
        MediaType::parse(s)
    }
}

impl fmt::Debug for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.to_string(), f)
    }
}

/// Renders `type/subtype` followed by `;name=value` for each parameter.
/// `type/subtype;name=value`, parameters in the order they were given.
///
/// `{:#}` sorts the parameters by name, see [`MediaType::canonical`].
impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.type_, self.subtype)?;
        fmt::Display::fmt(&self.params, f)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::*;

    #[test]
    fn test_media_type_from_str() {
        assert_eq!(MediaType::parse("text/plain").unwrap(), TEXT_PLAIN);
        assert_eq!(MediaType::parse("TEXT/PLAIN").unwrap(), TEXT_PLAIN);
        assert_eq!(MediaType::parse("text/plain; charset=utf-8").unwrap(), TEXT_PLAIN_UTF_8);
        assert_eq!(MediaType::parse("text/plain;charset=\"utf-8\"").unwrap(), TEXT_PLAIN_UTF_8);
        assert_eq!(MediaType::parse(" text/plain ").unwrap(), TEXT_PLAIN);

        // quotes + semi colon
        MediaType::parse("text/plain;charset=\"utf-8\"; foo=bar").unwrap();
        MediaType::parse("text/plain;charset=\"utf-8\" ; foo=bar").unwrap();

        let extended = MediaType::parse("TEXT/PLAIN; CHARSET=UTF-8; FOO=BAR").unwrap();
        assert_eq!(extended, "text/plain;charset=utf-8;foo=bar");
        assert_eq!(extended.param("charset").unwrap(), "utf-8");
        assert_eq!(extended.param("foo").unwrap(), "bar");

        MediaType::parse("multipart/form-data; boundary=--------foobar").unwrap();

        // stars
        assert_eq!("*/*".parse::<MediaType>().unwrap(), STAR_STAR);
        assert_eq!("image/*".parse::<MediaType>().unwrap(), "image/*");
    }

    #[test]
    fn test_media_type_parse_errors() {
        let invalid_type = [
            "",
            "text",
            "f o o / bar",
            "text\n/plain",
            "text\r/plain",
            "text/\r\nplain",
            "*/plain",
            "text/plain garbage",
            "text/plain, text/html",
        ];
        for s in &invalid_type {
            let err = MediaType::parse(s).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidMediaType, "{:?}", s);
        }

        let invalid_param = [
            "text/plain;",
            "text/plain;\r\ncharset=utf-8",
            "text/plain; charset",
            "text/plain; charset=",
            "text/plain; charset=\r\nutf-8",
            "text/plain; charset=\"\r\nutf-8\"",
            r#"application/x-custom;param="\""#,
        ];
        for s in &invalid_param {
            let err = MediaType::parse(s).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidParameter, "{:?}", s);
        }
    }

    #[test]
    fn test_case_folded_values() {
        let mt = MediaType::parse("multipart/form-data; boundary=AbCdEfG").unwrap();
        assert_eq!(mt.param("boundary").unwrap(), "abcdefg");

        let mt = MediaType::parse(r#"multipart/form-data; boundary="AbC dEf""#).unwrap();
        assert_eq!(mt.param("boundary").unwrap(), "abc def");
    }

    #[test]
    fn test_mime_with_dquote_quoted_pair() {
        let mt = MediaType::parse(r#"application/x-custom; title="the \" char""#).unwrap();
        assert_eq!(mt.param("title").unwrap(), "the \" char");
    }

    #[test]
    fn test_mime_with_utf8_values() {
        let mt = MediaType::parse(r#"application/x-custom; param="Straße""#).unwrap();
        assert_eq!(mt.param("param").unwrap(), "straße");
    }

    #[test]
    fn test_mime_param_with_empty_quoted_string() {
        let mt = MediaType::parse(r#"application/x-custom;param="""#).unwrap();
        assert_eq!(mt.param("param").unwrap(), "");
    }

    #[test]
    fn test_mime_param_with_quoted_tab() {
        let mt = MediaType::parse("application/x-custom;param=\"\\\t\"").unwrap();
        assert_eq!(mt.param("param").unwrap(), "\t");
    }

    #[test]
    fn test_suffix() {
        assert_eq!(TEXT_PLAIN.suffix(), None);
        let mt = MediaType::parse("application/x-custom+bad+suffix").unwrap();
        assert_eq!(mt.subtype(), "x-custom+bad+suffix");
        assert_eq!(mt.suffix().unwrap(), "suffix");
    }

    #[test]
    fn test_parameter_eq_is_order_independent() {
        let a = MediaType::parse("application/x-custom; param1=a; param2=b").unwrap();
        let b = MediaType::parse("application/x-custom; param2=b; param1=a").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, "application/x-custom; param2=b; param1=a");
    }

    #[test]
    fn test_repeated_parameter_replaces() {
        let mt = MediaType::parse("text/plain; a=1; a=2").unwrap();
        assert_eq!(mt.params().len(), 1);
        assert_eq!(mt.param("a"), Some("2"));
    }

    #[test]
    fn test_str_eq() {
        assert_eq!(TEXT_PLAIN, "text/plain");
        assert_eq!("TEXT/Plain", TEXT_PLAIN);
        assert_ne!(TEXT_PLAIN, "text/plain; charset=utf-8");
        assert_ne!(TEXT_PLAIN, "text/plainx");
        assert_eq!(TEXT_PLAIN_UTF_8, "text/plain; charset=UTF-8");
        assert_ne!(TEXT_PLAIN_UTF_8, "text/plain");
        assert_ne!(TEXT_PLAIN, "text/plain garbage");
        assert_ne!(TEXT_PLAIN, "");
    }

    #[test]
    fn test_str_eq_surrounding_whitespace() {
        // with or without parameters, both sides parse the same way
        assert_eq!(TEXT_PLAIN, " text/plain");
        assert_eq!(TEXT_PLAIN, "text/plain ");
        assert_eq!(TEXT_PLAIN_UTF_8, " text/plain;charset=utf-8");
        assert_eq!(TEXT_PLAIN_UTF_8, "text/plain;charset=utf-8 ");

        for s in &[" text/plain", "TEXT/PLAIN\t"] {
            let parsed = MediaType::parse(s).ok();
            assert_eq!(parsed.as_ref() == Some(&TEXT_PLAIN), TEXT_PLAIN == **s, "{:?}", s);
        }
    }

    #[test]
    fn test_canonical() {
        let a = MediaType::parse("text/plain; b=1; a=2").unwrap();
        let b = MediaType::parse("text/plain; a=2; b=1").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "text/plain;b=1;a=2");
        assert_eq!(a.canonical(), "text/plain;a=2;b=1");
        assert_eq!(a.canonical(), b.canonical());
        assert_eq!(format!("{:#}", a), a.canonical());

        let quoted = MediaType::parse("multipart/form-data; z=\"a b\"; boundary=xyz").unwrap();
        assert_eq!(quoted.canonical(), "multipart/form-data;boundary=xyz;z=\"a b\"");
        assert_eq!(MediaType::parse(&quoted.canonical()).unwrap(), quoted);

        assert_eq!(TEXT_PLAIN.canonical(), "text/plain");
        assert_eq!(STAR_STAR.canonical(), "*/*");
    }

    #[test]
    fn test_fmt() {
        assert_eq!(TEXT_PLAIN.to_string(), "text/plain");
        assert_eq!(TEXT_PLAIN_UTF_8.to_string(), "text/plain;charset=utf-8");

        let mt = MediaType::parse("Text/X-Custom; Title=\"Hello World\"; level=1").unwrap();
        assert_eq!(mt.to_string(), "text/x-custom;title=\"hello world\";level=1");
        assert_eq!(format!("{:?}", mt), "\"text/x-custom;title=\\\"hello world\\\";level=1\"");
    }

    #[test]
    fn test_essence() {
        let mt = MediaType::parse("text/plain+json; charset=utf8; alabama=state").unwrap();
        assert_eq!(mt.essence(), "text/plain+json");
        assert!(mt.essence_eq(&MediaType::parse("text/plain+json").unwrap()));
        assert!(!TEXT_MARKDOWN.essence_eq(&TEXT_PLAIN));
    }

    fn token() -> impl Strategy<Value = String> {
        "[a-z0-9!#$%&'+.^_`|~-]{1,16}"
    }

    proptest! {
        #[test]
        fn prop_essence_round_trip(type_ in token(), subtype in token()) {
            let source = format!("{}/{}", type_, subtype);
            let mt = MediaType::parse(&source).unwrap();
            prop_assert_eq!(mt.to_string(), source);
        }

        #[test]
        fn prop_params_round_trip(
            type_ in token(),
            subtype in token(),
            params in proptest::collection::btree_map(token(), "[ -~]{0,12}", 0..4),
        ) {
            let mut source = format!("{}/{}", type_, subtype);
            for (name, value) in &params {
                let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
                source.push_str(&format!("; {}=\"{}\"", name, escaped));
            }

            let mt = MediaType::parse(&source).unwrap();
            prop_assert_eq!(mt.params().len(), params.len());
            for (name, value) in &params {
                let lower = value.to_lowercase();
                prop_assert_eq!(mt.param(name), Some(lower.as_str()));
            }

            let reparsed = MediaType::parse(&mt.to_string()).unwrap();
            prop_assert_eq!(&reparsed, &mt);
            prop_assert_eq!(reparsed.canonical(), mt.canonical());
        }
    }
}
