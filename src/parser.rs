//! Parser.
//!
//! The input is decomposed in a fixed order, and each stage only looks at the
//! rest left by the previous one:
//!
//! 1. scheme,
//! 2. authority and path,
//! 3. user info, host, and port (only if the authority is present),
//! 4. query and fragment.
//!
//! No characters are validated except the port digits.

pub(crate) mod authority;
pub(crate) mod path;
pub(crate) mod str;

use crate::error::Error;

use self::authority::{decompose_authority, AuthorityComponents};
use self::path::PathSegments;
use self::str::{find_split, find_split2, find_split_hole};

/// Components of a URI reference, borrowed from the source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Components<'a> {
    /// Scheme, without the trailing colon. Empty if absent.
    pub(crate) scheme: &'a str,
    /// Authority components, `None` if the `//` marker is absent.
    pub(crate) authority: Option<AuthorityComponents<'a>>,
    /// Whole path.
    pub(crate) path: &'a str,
    /// Query, without the leading `?`. Empty if absent.
    pub(crate) query: &'a str,
    /// Fragment, without the leading `#`. Empty if absent.
    pub(crate) fragment: &'a str,
}

impl<'a> Components<'a> {
    /// Returns an iterator over the path segments.
    #[inline]
    #[must_use]
    pub(crate) fn path_segments(&self) -> PathSegments<'a> {
        PathSegments::new(self.path)
    }
}

/// Eats a `scheme` and the following colon if available, and returns the rest and the scheme.
///
/// The scheme ends at the first colon anywhere in the string, even if a `/`,
/// `?`, or `#` comes before it.
#[must_use]
fn scheme_colon_opt(i: &str) -> (&str, &str) {
    match find_split_hole(i, b':') {
        Some((scheme, rest)) => (rest, scheme),
        None => (i, ""),
    }
}

/// Splits the string into the authority-and-path part and the query-and-fragment part.
///
/// The second part keeps its leading `?` or `#`.
#[must_use]
fn until_query(i: &str) -> (&str, &str) {
    find_split2(i, b'?', b'#').unwrap_or((i, ""))
}

/// Eats double slash and the following authority if available.
///
/// Returns `(path, authority)`. The path keeps its leading slash.
#[must_use]
fn slash_slash_authority_opt(i: &str) -> (&str, Option<&str>) {
    let s = match i.strip_prefix("//") {
        Some(rest) => rest,
        None => return (i, None),
    };
    match find_split(s, b'/') {
        Some((authority, path)) => (path, Some(authority)),
        None => ("", Some(s)),
    }
}

/// Decomposes query and fragment.
///
/// The string must start with `?` or `#`, or be empty.
/// The first character before the fragment is always dropped, so `?` alone
/// yields the same empty query as no `?` at all.
#[must_use]
fn decompose_query_and_fragment(i: &str) -> (&str, &str) {
    let (rest, fragment) = match find_split_hole(i, b'#') {
        Some((rest, fragment)) => (rest, fragment),
        None => (i, ""),
    };
    let query = match rest.as_bytes().first() {
        None => "",
        Some(&c) => {
            debug_assert_eq!(c, b'?');
            &rest[1..]
        }
    };
    (query, fragment)
}

/// Decomposes the given string as a URI reference.
///
/// Fails only if the authority has a malformed port.
pub(crate) fn decompose(i: &str) -> Result<Components<'_>, Error> {
    let (rest, scheme) = scheme_colon_opt(i);
    let (authority_and_path, query_and_fragment) = until_query(rest);
    let (path, authority) = slash_slash_authority_opt(authority_and_path);
    let authority = authority.map(decompose_authority).transpose()?;
    let (query, fragment) = decompose_query_and_fragment(query_and_fragment);

    Ok(Components {
        scheme,
        authority,
        path,
        query,
        fragment,
    })
}
