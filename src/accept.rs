//! `Accept` header negotiation, [RFC 7231 §5.3.2](https://tools.ietf.org/html/rfc7231#section-5.3.2).

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::range::parse_range;
use crate::{Error, ErrorKind, MediaRange, MediaType, Parameters, Quality};

/// An iterator over the media ranges of an `Accept` header.
///
/// Created by [`MediaRange::parse_all`]. Yields an error for the first
/// malformed range, or for text after the last one, and then stops.
#[derive(Clone, Debug)]
pub struct AcceptRanges<'a> {
    rest: &'a str,
    count: usize,
    done: bool,
}

impl<'a> AcceptRanges<'a> {
    pub(crate) fn new(header: &'a str) -> AcceptRanges<'a> {
        AcceptRanges {
            rest: header,
            count: 0,
            done: false,
        }
    }

    fn fail(&mut self, err: Error) -> Option<Result<MediaRange, Error>> {
        self.done = true;
        Some(Err(err))
    }
}

impl<'a> Iterator for AcceptRanges<'a> {
    type Item = Result<MediaRange, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.rest.is_empty() {
            self.done = true;
            return None;
        }

        let mut s = self.rest;
        if self.count > 0 {
            // every range after the first one must start with a comma
            match s.strip_prefix(',') {
                Some(after) => s = after,
                None => return self.fail(Error::new(ErrorKind::InvalidMediaRange)),
            }
        }

        match parse_range(s) {
            Ok((range, rest)) => {
                self.rest = rest;
                self.count += 1;
                Some(Ok(range))
            },
            Err(err) => self.fail(err),
        }
    }
}

impl<'a> FusedIterator for AcceptRanges<'a> {}

/// The outcome of a successful negotiation.
#[derive(Clone, Debug, PartialEq)]
pub struct Negotiated<'a> {
    media_type: &'a MediaType,
    extensions: Parameters,
    quality: Quality,
}

impl<'a> Negotiated<'a> {
    /// The chosen media type, borrowed from the available list.
    pub fn media_type(&self) -> &'a MediaType {
        self.media_type
    }

    /// The extension parameters of the media range that chose it.
    pub fn extensions(&self) -> &Parameters {
        &self.extensions
    }

    /// The quality the client gave it.
    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// Splits into the media type and the extension parameters.
    pub fn into_parts(self) -> (&'a MediaType, Parameters) {
        (self.media_type, self.extensions)
    }
}

#[derive(Clone)]
struct Candidate {
    range: MediaRange,
    order: usize,
}

/// Chooses the best of the `available` media types for an `Accept` header.
///
/// Without a header the first available type is chosen. Otherwise every
/// available type is scored by the most specific media range that matches
/// it, and the type with the highest quality wins. Ties go to the range
/// that came first in the header, then to the type that comes first in
/// `available`.
///
/// # Example
///
/// ```
/// use mime_accept::{negotiate, APPLICATION_JSON, TEXT_HTML};
///
/// let available = [TEXT_HTML, APPLICATION_JSON];
///
/// let chosen = negotiate(Some("application/json, text/*;q=0.5"), &available).unwrap();
/// assert_eq!(chosen.media_type(), &APPLICATION_JSON);
///
/// let chosen = negotiate(None, &available).unwrap();
/// assert_eq!(chosen.media_type(), &TEXT_HTML);
/// ```
///
/// # Errors
///
/// - [`ErrorKind::NoAvailableTypeGiven`] if `available` is empty.
/// - [`ErrorKind::NoAcceptableTypeFound`] if no available type matches a
///   range with a quality above zero.
/// - Any parse error of the header.
pub fn negotiate<'a>(accept: Option<&str>, available: &'a [MediaType]) -> Result<Negotiated<'a>, Error> {
    let first = available
        .first()
        .ok_or_else(|| Error::new(ErrorKind::NoAvailableTypeGiven))?;

    let accept = match accept {
        Some(accept) => accept,
        None => {
            debug!(media_type = %first, "no Accept header, choosing first available type");
            return Ok(Negotiated {
                media_type: first,
                extensions: Parameters::new(),
                quality: Quality::MAX,
            });
        },
    };

    let mut slots: Vec<Option<Candidate>> = vec![None; available.len()];

    for (order, range) in MediaRange::parse_all(accept).enumerate() {
        let range = range?;
        trace!(%range, order, "parsed media range");

        for (slot, mt) in slots.iter_mut().zip(available) {
            if !range.matches(mt) {
                continue;
            }

            let replace = match slot {
                Some(existing) => range.is_more_specific_than(&existing.range),
                None => true,
            };
            if replace {
                trace!(media_type = %mt, %range, "scored by range");
                *slot = Some(Candidate {
                    range: range.clone(),
                    order,
                });
            }
        }
    }

    let mut best: Option<(usize, &Candidate)> = None;
    for (i, candidate) in slots.iter().enumerate() {
        let candidate = match candidate {
            Some(candidate) if candidate.range.quality().is_acceptable() => candidate,
            _ => continue,
        };

        let better = match best {
            None => true,
            Some((_, current)) => {
                let (q, current_q) = (candidate.range.quality(), current.range.quality());
                q > current_q || (q == current_q && candidate.order < current.order)
            },
        };
        if better {
            best = Some((i, candidate));
        }
    }

    match best {
        Some((i, candidate)) => {
            debug!(
                media_type = %available[i],
                quality = %candidate.range.quality(),
                "negotiated media type"
            );
            Ok(Negotiated {
                media_type: &available[i],
                extensions: candidate.range.extensions().clone(),
                quality: candidate.range.quality(),
            })
        },
        None => {
            debug!(accept, "no acceptable media type");
            Err(Error::new(ErrorKind::NoAcceptableTypeFound))
        },
    }
}
