use std::borrow::Cow;
use std::fmt;
use std::iter::FromIterator;
use std::slice;

use mime_accept_parse::scan::is_token;

/// The parameters of a media type or media range.
///
/// Names are stored lowercase and are unique: inserting a name again
/// replaces its value in place. Iteration and rendering follow insertion
/// order, but equality does not depend on it.
///
/// # Example
///
/// ```
/// let mt: mime_accept::MediaType = "text/plain; charset=utf-8; format=flowed".parse().unwrap();
/// let params = mt.params();
///
/// assert_eq!(params.len(), 2);
/// assert_eq!(params.get("charset"), Some("utf-8"));
/// assert_eq!(params.get("Format"), Some("flowed"));
/// assert_eq!(params.get("boundary"), None);
/// ```
#[derive(Clone)]
pub struct Parameters {
    source: Source,
}

#[derive(Clone)]
enum Source {
    Static(&'static [(&'static str, &'static str)]),
    Owned(Vec<(String, String)>),
}

impl Parameters {
    /// An empty parameter list.
    pub const fn new() -> Parameters {
        Parameters {
            source: Source::Static(&[]),
        }
    }

    pub(crate) const fn from_static(params: &'static [(&'static str, &'static str)]) -> Parameters {
        Parameters {
            source: Source::Static(params),
        }
    }

    /// Looks up a parameter value by name, ignoring ASCII case of the name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|&(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    /// Returns `true` if a parameter with this name exists.
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Sets a parameter, returning the value it replaced.
    ///
    /// The name is lowercased; the value is stored as given.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let mut name = name.into();
        name.make_ascii_lowercase();
        self.insert_lowercase(name, value.into())
    }

    pub(crate) fn insert_parsed(&mut self, name: Cow<'_, str>, value: Cow<'_, str>) {
        self.insert_lowercase(name.into_owned(), value.into_owned());
    }

    fn insert_lowercase(&mut self, name: String, value: String) -> Option<String> {
        let params = self.to_mut();
        match params.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => Some(std::mem::replace(&mut existing.1, value)),
            None => {
                params.push((name, value));
                None
            },
        }
    }

    fn to_mut(&mut self) -> &mut Vec<(String, String)> {
        if let Source::Static(params) = self.source {
            self.source = Source::Owned(
                params
                    .iter()
                    .map(|&(n, v)| (n.to_owned(), v.to_owned()))
                    .collect(),
            );
        }

        match self.source {
            Source::Owned(ref mut params) => params,
            Source::Static(_) => unreachable!("static parameters were just copied"),
        }
    }

    /// The number of parameters.
    pub fn len(&self) -> usize {
        match self.source {
            Source::Static(params) => params.len(),
            Source::Owned(ref params) => params.len(),
        }
    }

    /// Returns `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        let inner = match self.source {
            Source::Static(params) => IterInner::Static(params.iter()),
            Source::Owned(ref params) => IterInner::Owned(params.iter()),
        };
        Iter(inner)
    }

    /// Whether every parameter here is also in `other` with the same value.
    pub(crate) fn is_subset_of(&self, other: &Parameters) -> bool {
        self.iter().all(|(name, value)| other.get(name) == Some(value))
    }
}

impl Default for Parameters {
    fn default() -> Parameters {
        Parameters::new()
    }
}

impl PartialEq for Parameters {
    fn eq(&self, other: &Parameters) -> bool {
        // Names are unique, so equal lengths plus one-way inclusion is
        // enough.
        self.len() == other.len() && self.is_subset_of(other)
    }
}

impl Eq for Parameters {}

impl<N, V> FromIterator<(N, V)> for Parameters
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Parameters {
        let mut params = Parameters::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl fmt::Debug for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Renders each parameter as `;name=value`, quoting values that are not
/// tokens.
///
/// The alternate flag (`{:#}`) writes the parameters sorted by name.
impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            let mut sorted = self.iter().collect::<Vec<_>>();
            sorted.sort_by(|a, b| a.0.cmp(b.0));
            return sorted.into_iter().try_for_each(|(name, value)| fmt_param(name, value, f));
        }

        self.iter().try_for_each(|(name, value)| fmt_param(name, value, f))
    }
}

fn fmt_param(name: &str, value: &str, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, ";{}=", name)?;
    fmt_value(value, f)
}

fn fmt_value(value: &str, f: &mut fmt::Formatter) -> fmt::Result {
    if !value.is_empty() && value.bytes().all(is_token) {
        return f.write_str(value);
    }

    f.write_str("\"")?;
    for c in value.chars() {
        if c == '"' || c == '\\' {
            f.write_str("\\")?;
        }
        write!(f, "{}", c)?;
    }
    f.write_str("\"")
}

/// An iterator over the `(name, value)` pairs of [`Parameters`].
#[derive(Debug)]
pub struct Iter<'a>(IterInner<'a>);

#[derive(Debug)]
enum IterInner<'a> {
    Static(slice::Iter<'static, (&'static str, &'static str)>),
    Owned(slice::Iter<'a, (String, String)>),
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self.0 {
            IterInner::Static(ref mut params) => params.next().map(|&(n, v)| (n, v)),
            IterInner::Owned(ref mut params) => {
                params.next().map(|(n, v)| (n.as_str(), v.as_str()))
            },
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.0 {
            IterInner::Static(ref params) => params.size_hint(),
            IterInner::Owned(ref params) => params.size_hint(),
        }
    }
}
