//! Reading `Content-Type` and `Accept` from request headers.
//!
//! Anything that can look up a header value by name implements
//! [`HeaderSource`]. With the `http` feature that includes
//! `http::HeaderMap` and `http::Request`.

use std::borrow::Cow;
use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::{Error, MediaType, Negotiated};

/// `Content-Type`
pub const CONTENT_TYPE: &str = "content-type";

/// `Accept`
pub const ACCEPT: &str = "accept";

/// A collection of request headers.
pub trait HeaderSource {
    /// The first value of the header `name`, if present.
    ///
    /// Names are compared ignoring ASCII case.
    fn header(&self, name: &str) -> Option<Cow<'_, str>>;
}

/// An exact key wins. Otherwise, of the keys equal to `name` ignoring
/// case, the one that sorts first is used, so the answer does not depend
/// on hash order.
impl<S: BuildHasher> HeaderSource for HashMap<String, String, S> {
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name)
            .or_else(|| {
                self.iter()
                    .filter(|(key, _)| key.eq_ignore_ascii_case(name))
                    .min_by(|a, b| a.0.cmp(b.0))
                    .map(|(_, value)| value)
            })
            .map(|value| Cow::Borrowed(value.as_str()))
    }
}

impl<'h> HeaderSource for [(&'h str, &'h str)] {
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        self.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|&(_, value)| Cow::Borrowed(value))
    }
}

#[cfg(feature = "http")]
impl HeaderSource for http::HeaderMap {
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name)
            .map(|value| String::from_utf8_lossy(value.as_bytes()))
    }
}

#[cfg(feature = "http")]
impl<B> HeaderSource for http::Request<B> {
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        self.headers().header(name)
    }
}

/// Parses a `Content-Type` value.
///
/// An absent header is not an error, it yields `Ok(None)`.
///
/// # Example
///
/// ```
/// use mime_accept::{parse_content_type, TEXT_PLAIN_UTF_8};
///
/// assert_eq!(parse_content_type(Some("text/plain; charset=utf-8")).unwrap(), Some(TEXT_PLAIN_UTF_8));
/// assert_eq!(parse_content_type(None).unwrap(), None);
/// assert!(parse_content_type(Some("text/plain garbage")).is_err());
/// ```
pub fn parse_content_type(value: Option<&str>) -> Result<Option<MediaType>, Error> {
    value.map(MediaType::parse).transpose()
}

/// Parses the `Content-Type` header of `headers`.
///
/// # Example
///
/// ```
/// use mime_accept::header;
///
/// let headers = [("Content-Type", "application/json")];
/// let mt = header::content_type(&headers[..]).unwrap();
/// assert_eq!(mt, Some(mime_accept::APPLICATION_JSON));
/// ```
pub fn content_type<S>(headers: &S) -> Result<Option<MediaType>, Error>
where
    S: HeaderSource + ?Sized,
{
    parse_content_type(headers.header(CONTENT_TYPE).as_deref())
}

/// Negotiates against the `Accept` header of `headers`.
///
/// # Example
///
/// ```
/// use mime_accept::{header, APPLICATION_JSON, TEXT_HTML};
///
/// let available = [TEXT_HTML, APPLICATION_JSON];
/// let headers = [("Accept", "application/json")];
///
/// let chosen = header::negotiate(&headers[..], &available).unwrap();
/// assert_eq!(chosen.media_type(), &APPLICATION_JSON);
/// ```
pub fn negotiate<'a, S>(headers: &S, available: &'a [MediaType]) -> Result<Negotiated<'a>, Error>
where
    S: HeaderSource + ?Sized,
{
    crate::negotiate(headers.header(ACCEPT).as_deref(), available)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::*;

    #[test]
    fn test_parse_content_type() {
        assert_eq!(parse_content_type(None).unwrap(), None);
        assert_eq!(parse_content_type(Some(" text/html ")).unwrap(), Some(TEXT_HTML));

        let err = parse_content_type(Some("text/html;charset")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        let err = parse_content_type(Some("text/html;charset=utf-8 x")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMediaType);
        let err = parse_content_type(Some("")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMediaType);
    }

    #[test]
    fn test_hash_map_source() {
        let mut headers = HashMap::new();
        headers.insert("Accept".to_owned(), "text/*".to_owned());
        headers.insert("content-type".to_owned(), "text/plain; charset=UTF-8".to_owned());

        assert_eq!(headers.header("accept").as_deref(), Some("text/*"));
        assert_eq!(headers.header("ACCEPT").as_deref(), Some("text/*"));
        assert_eq!(headers.header("x-missing"), None);

        assert_eq!(content_type(&headers).unwrap(), Some(TEXT_PLAIN_UTF_8));

        let available = [APPLICATION_JSON, TEXT_MARKDOWN];
        let chosen = header::negotiate(&headers, &available).unwrap();
        assert_eq!(chosen.media_type(), &TEXT_MARKDOWN);
    }

    #[test]
    fn test_hash_map_source_case_collision() {
        for _ in 0..32 {
            let mut headers = HashMap::new();
            headers.insert("Accept".to_owned(), "text/html".to_owned());
            headers.insert("ACCEPT".to_owned(), "application/json".to_owned());
            headers.insert("aCCEPT".to_owned(), "text/csv".to_owned());

            // "ACCEPT" < "Accept" < "aCCEPT"
            assert_eq!(headers.header("accept").as_deref(), Some("application/json"));
            assert_eq!(headers.header("Accept").as_deref(), Some("text/html"));

            let available = [TEXT_HTML, APPLICATION_JSON, TEXT_CSV];
            let chosen = header::negotiate(&headers, &available).unwrap();
            assert_eq!(chosen.media_type(), &APPLICATION_JSON);
        }
    }

    #[test]
    fn test_slice_source_first_value_wins() {
        let headers = [("accept", "application/json"), ("Accept", "text/html")];
        let available = [TEXT_HTML, APPLICATION_JSON];
        let chosen = header::negotiate(&headers[..], &available).unwrap();
        assert_eq!(chosen.media_type(), &APPLICATION_JSON);
    }

    #[test]
    fn test_missing_headers() {
        let headers: [(&str, &str); 0] = [];
        assert_eq!(content_type(&headers[..]).unwrap(), None);

        let available = [TEXT_HTML, APPLICATION_JSON];
        let chosen = header::negotiate(&headers[..], &available).unwrap();
        assert_eq!(chosen.media_type(), &TEXT_HTML);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_request_source() {
        let request = http::Request::builder()
            .header(http::header::ACCEPT, "text/html;q=0.5, application/json")
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(())
            .unwrap();

        assert_eq!(content_type(&request).unwrap(), Some(APPLICATION_JSON));

        let available = [TEXT_HTML, APPLICATION_JSON];
        let chosen = header::negotiate(&request, &available).unwrap();
        assert_eq!(chosen.media_type(), &APPLICATION_JSON);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_non_utf8_header() {
        let mut headers = http::HeaderMap::new();
        let value = http::HeaderValue::from_bytes(b"text/plain; title=\"caf\xe9\"").unwrap();
        headers.insert(http::header::CONTENT_TYPE, value);

        let mt = content_type(&headers).unwrap().unwrap();
        assert_eq!(mt.param("title"), Some("caf\u{fffd}"));
    }
}
