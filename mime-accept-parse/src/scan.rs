//! Character classes and scanners from RFC 7230 §3.2.
//!
//! Every scanner takes the remaining input and hands back what it matched
//! together with the unconsumed rest.

use std::borrow::Cow;

use crate::ParseError;

// From [RFC 7230](https://tools.ietf.org/html/rfc7230#section-3.2.6):
//
// >     token          = 1*tchar
// >     tchar          = "!" / "#" / "$" / "%" / "&" / "'" / "*"
// >                    / "+" / "-" / "." / "^" / "_" / "`" / "|" / "~"
// >                    / DIGIT / ALPHA
// >
// >     quoted-string  = DQUOTE *( qdtext / quoted-pair ) DQUOTE
// >     qdtext         = HTAB / SP /%x21 / %x23-5B / %x5D-7E / obs-text
// >     obs-text       = %x80-FF
// >     quoted-pair    = "\" ( HTAB / SP / VCHAR / obs-text )
//
// Any byte of a multi-byte UTF-8 sequence is >= 0x80, so non-ASCII text is
// always obs-text.

macro_rules! byte_map {
    ($($flag:expr,)*) => ([
        $($flag != 0,)*
    ])
}

static TOKEN_MAP: [bool; 256] = byte_map![
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 1, 1, 1, 1, 1, 0, 0, 1, 1, 0, 1, 1, 0,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// HTAB or SP.
#[inline]
pub fn is_whitespace(c: u8) -> bool {
    c == b'\t' || c == b' '
}

#[inline]
pub fn is_token(c: u8) -> bool {
    TOKEN_MAP[c as usize]
}

/// VCHAR, 0x21 to 0x7E.
#[inline]
pub fn is_visible(c: u8) -> bool {
    c >= 0x21 && c <= 0x7E
}

#[inline]
pub fn is_obs_text(c: u8) -> bool {
    c >= 0x80
}

#[inline]
pub fn is_qdtext(c: u8) -> bool {
    match c {
        b'\t' | b' ' | 0x21 | 0x23..=0x5B | 0x5D..=0x7E => true,
        c => is_obs_text(c),
    }
}

/// Whether `c` may follow a backslash inside a quoted string.
#[inline]
pub fn is_quoted_pair(c: u8) -> bool {
    is_whitespace(c) || is_visible(c) || is_obs_text(c)
}

fn char_class(c: char, class: fn(u8) -> bool) -> bool {
    if c.is_ascii() {
        class(c as u8)
    } else {
        true
    }
}

/// Skips optional whitespace. Never fails.
pub fn skip_whitespace(s: &str) -> &str {
    s.trim_start_matches(|c: char| c == ' ' || c == '\t')
}

/// Consumes the longest run of token characters, lowercased.
///
/// Returns `None` when `s` does not start with a token character, so callers
/// can tell a missing token apart from the end of input.
pub fn consume_token(s: &str) -> Option<(Cow<'_, str>, &str)> {
    let end = s.bytes().position(|c| !is_token(c)).unwrap_or_else(|| s.len());
    if end == 0 {
        return None;
    }

    let (token, rest) = s.split_at(end);
    let token = if token.bytes().any(|c| c.is_ascii_uppercase()) {
        Cow::Owned(token.to_ascii_lowercase())
    } else {
        Cow::Borrowed(token)
    };
    Some((token, rest))
}

/// Consumes the inside of a quoted string, unescaping quoted pairs.
///
/// The opening quote must already be stripped, and the closing quote is
/// left in the returned rest. The content is lowercased.
pub fn consume_quoted_string(s: &str) -> Result<(String, &str), ParseError> {
    let mut content = String::new();
    let mut chars = s.char_indices();
    let mut end = s.len();

    while let Some((i, c)) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some((_, escaped)) if char_class(escaped, is_quoted_pair) => content.push(escaped),
                _ => return Err(ParseError::InvalidQuotedPair),
            }
        } else if char_class(c, is_qdtext) {
            content.push(c);
        } else {
            end = i;
            break;
        }
    }

    Ok((content.to_lowercase(), &s[end..]))
}
