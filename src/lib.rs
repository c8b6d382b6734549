//! # mime-accept
//!
//! Media types, as found in `Content-Type`, and content negotiation with
//! the `Accept` header.
//!
//! ## What is a media type?
//!
//! Example media type string: `text/plain; charset=utf-8`
//!
//! ```
//! let plain_text: mime_accept::MediaType = "text/plain; charset=utf-8".parse().unwrap();
//! assert_eq!(plain_text, mime_accept::TEXT_PLAIN_UTF_8);
//! ```
//!
//! ## Inspecting media types
//!
//! ```
//! let mt = mime_accept::TEXT_PLAIN;
//! match (mt.type_(), mt.subtype()) {
//!     (mime_accept::TEXT, mime_accept::PLAIN) => println!("plain text!"),
//!     (mime_accept::TEXT, _) => println!("structured text"),
//!     _ => println!("not text"),
//! }
//! ```
//!
//! ## Negotiating
//!
//! A server lists the media types it can produce, and the client's
//! `Accept` header picks one of them.
//!
//! ```
//! use mime_accept::{negotiate, APPLICATION_JSON, TEXT_HTML};
//!
//! let available = [TEXT_HTML, APPLICATION_JSON];
//! let accept = "text/html;q=0.9, application/json;q=1;version=2";
//!
//! let chosen = negotiate(Some(accept), &available).unwrap();
//! assert_eq!(chosen.media_type(), &APPLICATION_JSON);
//! assert_eq!(chosen.extensions().get("version"), Some("2"));
//!
//! // parameters before `q` must match the media type
//! let err = negotiate(Some("application/json;version=2"), &available).unwrap_err();
//! assert_eq!(err.kind(), mime_accept::ErrorKind::NoAcceptableTypeFound);
//! ```

#![doc(html_root_url = "https://docs.rs/mime-accept/0.1.0")]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

#[cfg(feature = "macro")]
use proc_macro_hack::proc_macro_hack;

/// Media Type literals
///
/// ```
/// # use mime_accept::{media_type, MediaType};
/// let vnd_myapp: MediaType = media_type!("application/vnd.myapp+json");
/// assert_eq!(vnd_myapp.suffix(), Some("json"));
/// ```
#[cfg(feature = "macro")]
#[proc_macro_hack]
pub use mime_accept_macro::media_type;

pub use mime_accept_parse::ParseError;

pub use self::accept::{negotiate, AcceptRanges, Negotiated};
pub use self::constants::*;
pub use self::error::{Error, ErrorKind};
pub use self::format::Formats;
pub use self::header::{parse_content_type, HeaderSource};
pub use self::params::{Iter as ParamsIter, Parameters};
pub use self::quality::Quality;
pub use self::range::MediaRange;
pub use self::type_::MediaType;

mod accept;
mod constants;
mod error;
mod format;
pub mod header;
#[cfg(feature = "macro")]
mod macros;
mod params;
mod quality;
mod range;
#[cfg(feature = "serde1")]
mod serde;
mod type_;
