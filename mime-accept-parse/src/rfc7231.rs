use std::borrow::Cow;

use crate::scan::{consume_quoted_string, consume_token, skip_whitespace};
use crate::ParseError;

// From [HTTP](https://tools.ietf.org/html/rfc7231#section-3.1.1.1):
//
// >     media-type = type "/" subtype *( OWS ";" OWS parameter )
// >     type       = token
// >     subtype    = token
// >     parameter  = token "=" ( token / quoted-string )
//
// and [Accept](https://tools.ietf.org/html/rfc7231#section-5.3.2):
//
// >     Accept = #( media-range [ accept-params ] )
// >
// >     media-range    = ( "*/*"
// >                      / ( type "/" "*" )
// >                      / ( type "/" subtype )
// >                      ) *( OWS ";" OWS parameter )
// >     accept-params  = weight *( accept-ext )
// >     accept-ext     = OWS ";" OWS token [ "=" ( token / quoted-string ) ]
//
// The "q" parameter is what separates media type parameters from
// extension parameters, so both are scanned with the same rule here and
// the caller decides which is which.

type Param<'a> = (Cow<'a, str>, Cow<'a, str>);

/// The lowercased parts of a media type, borrowed from the source where
/// possible.
#[derive(Clone, Debug, PartialEq)]
pub struct Mime<'a> {
    pub type_: Cow<'a, str>,
    pub subtype: Cow<'a, str>,
    pub params: Vec<Param<'a>>,
}

/// Parses `type "/" subtype`, with surrounding whitespace.
///
/// `*/*` and `type/*` are accepted, `*/subtype` is not.
pub fn parse_type(s: &str) -> Result<(Cow<'_, str>, Cow<'_, str>, &str), ParseError> {
    let s = skip_whitespace(s);
    let (type_, s) = consume_token(s).ok_or(ParseError::ExpectedToken)?;
    let s = s.strip_prefix('/').ok_or(ParseError::MissingSlash)?;
    let (subtype, s) = consume_token(s).ok_or(ParseError::ExpectedToken)?;

    if type_ == "*" && subtype != "*" {
        return Err(ParseError::InvalidRange);
    }

    Ok((type_, subtype, skip_whitespace(s)))
}

/// Parses a single `name=value` pair, without the leading `;`.
pub fn parse_parameter(s: &str) -> Result<(Cow<'_, str>, Cow<'_, str>, &str), ParseError> {
    let s = skip_whitespace(s);
    let (name, s) = consume_token(s).ok_or(ParseError::ExpectedToken)?;
    let s = s.strip_prefix('=').ok_or(ParseError::MissingEqual)?;

    let (value, s) = match s.strip_prefix('"') {
        Some(quoted) => {
            let (content, rest) = consume_quoted_string(quoted)?;
            let rest = rest.strip_prefix('"').ok_or(ParseError::MissingQuote)?;
            (Cow::Owned(content), rest)
        },
        None => consume_token(s).ok_or(ParseError::ExpectedToken)?,
    };

    Ok((name, value, skip_whitespace(s)))
}

/// Iterates the `;parameter` repetitions at the start of `s`.
pub fn params(s: &str) -> Params<'_> {
    Params {
        rest: s,
        failed: false,
    }
}

/// An iterator over `;name=value` pairs.
///
/// Iteration stops at the first character that is not a `;`, or after the
/// first error. [`Params::remaining`] is whatever was not consumed, so a
/// caller can stop part way and pick up the same input with another loop.
#[derive(Clone, Debug)]
pub struct Params<'a> {
    rest: &'a str,
    failed: bool,
}

impl<'a> Params<'a> {
    /// The input not consumed yet.
    pub fn remaining(&self) -> &'a str {
        self.rest
    }
}

impl<'a> Iterator for Params<'a> {
    type Item = Result<Param<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let s = self.rest.strip_prefix(';')?;
        match parse_parameter(s) {
            Ok((name, value, rest)) => {
                self.rest = rest;
                Some(Ok((name, value)))
            },
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            },
        }
    }
}

/// Parses a media type and all its parameters.
///
/// A repeated parameter name replaces the earlier value. Returns the parsed
/// parts and whatever input followed them.
pub fn parse(s: &str) -> Result<(Mime<'_>, &str), ParseError> {
    let (type_, subtype, rest) = parse_type(s)?;

    let mut iter = params(rest);
    let mut params = Vec::<Param>::new();
    for param in &mut iter {
        let (name, value) = param?;
        match params.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => params.push((name, value)),
        }
    }

    let mime = Mime {
        type_,
        subtype,
        params,
    };
    Ok((mime, iter.remaining()))
}

// From [RFC 7231](https://tools.ietf.org/html/rfc7231#section-5.3.1):
//
// >     weight = OWS ";" OWS "q=" qvalue
// >     qvalue = ( "0" [ "." 0*3DIGIT ] )
// >            / ( "1" [ "." 0*3("0") ] )

/// Parses a quality value into thousandths, `0` to `1000`.
pub fn parse_weight(s: &str) -> Result<u16, ParseError> {
    let bytes = s.as_bytes();
    if bytes.is_empty() || bytes.len() > 5 {
        return Err(ParseError::InvalidWeight);
    }

    let (mut weight, max) = match bytes[0] {
        b'0' => (0, false),
        b'1' => (1000, true),
        _ => return Err(ParseError::InvalidWeight),
    };

    if bytes.len() == 1 {
        return Ok(weight);
    }

    if bytes[1] != b'.' {
        return Err(ParseError::InvalidWeight);
    }

    let mut scale = 100;
    for &c in &bytes[2..] {
        if !c.is_ascii_digit() || (max && c != b'0') {
            return Err(ParseError::InvalidWeight);
        }
        weight += u16::from(c - b'0') * scale;
        scale /= 10;
    }

    Ok(weight)
}
