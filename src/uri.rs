//! URI value type.

use core::convert::TryFrom;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::Error;
use crate::log::{debug, trace};
use crate::parser::{self, Components};

/// Decomposed fields of a URI.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
struct Record {
    /// Scheme.
    scheme: String,
    /// User info.
    user_info: String,
    /// Host.
    host: String,
    /// Port, if present.
    port: Option<u16>,
    /// Path segments.
    path: Vec<String>,
    /// Query.
    query: String,
    /// Fragment.
    fragment: String,
}

impl From<Components<'_>> for Record {
    fn from(c: Components<'_>) -> Self {
        let (user_info, host, port) = match c.authority {
            Some(a) => (a.user_info, a.host, a.port),
            None => ("", "", None),
        };
        Self {
            scheme: c.scheme.to_owned(),
            user_info: user_info.to_owned(),
            host: host.to_owned(),
            port,
            path: c.path_segments().map(ToOwned::to_owned).collect(),
            query: c.query.to_owned(),
            fragment: c.fragment.to_owned(),
        }
    }
}

/// A URI decomposed into its components.
///
/// Components are split at their delimiters only. Nothing is percent-decoded,
/// normalized, or validated, except that a port must be a decimal number in
/// `0..=65535`.
///
/// An absent component and an empty one are not distinguished: `scheme()`,
/// `user_info()`, `host()`, `query()`, and `fragment()` return `""` in both
/// cases.
///
/// # Examples
///
/// ```
/// use uri_parts::Uri;
///
/// let uri = Uri::parse("http://joe@www.example.com:8080/foo/bar?q#f")?;
/// assert_eq!(uri.scheme(), "http");
/// assert_eq!(uri.user_info(), "joe");
/// assert_eq!(uri.host(), "www.example.com");
/// assert_eq!(uri.port_number(), Some(8080));
/// assert_eq!(uri.path(), ["", "foo", "bar"]);
/// assert_eq!(uri.query(), "q");
/// assert_eq!(uri.fragment(), "f");
/// # Ok::<_, uri_parts::Error>(())
/// ```
#[derive(Default, Clone)]
pub struct Uri {
    /// Source string of the last successful parse.
    source: String,
    /// Decomposed fields.
    record: Record,
}

impl Uri {
    /// Creates an empty URI.
    ///
    /// This is the same as the result of parsing an empty string.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the given string into a new `Uri`.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let mut uri = Self::new();
        uri.parse_from_string(s)?;
        Ok(uri)
    }

    /// Replaces the content with the components parsed from the given string.
    ///
    /// Nothing from the previous content survives a successful call.
    /// On failure, `self` is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::Uri;
    ///
    /// let mut uri = Uri::new();
    /// uri.parse_from_string("http://www.example.com:8080/")?;
    /// assert!(uri.has_port());
    ///
    /// uri.parse_from_string("http://www.example.com/")?;
    /// assert!(!uri.has_port());
    ///
    /// assert!(uri.parse_from_string("http://www.example.com:spam/").is_err());
    /// assert_eq!(uri.as_str(), "http://www.example.com/");
    /// # Ok::<_, uri_parts::Error>(())
    /// ```
    pub fn parse_from_string(&mut self, s: &str) -> Result<(), Error> {
        let components = match parser::decompose(s) {
            Ok(v) => v,
            Err(e) => {
                debug!("rejected URI {:?}: {}", s, e);
                return Err(e);
            }
        };
        trace!("decomposed URI {:?}: {:?}", s, components);
        self.record = Record::from(components);
        self.source.clear();
        self.source.push_str(s);
        Ok(())
    }

    /// Returns the source string of the last successful parse.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the scheme, or an empty string if there is none.
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.record.scheme
    }

    /// Returns the user info, or an empty string if there is none.
    #[inline]
    #[must_use]
    pub fn user_info(&self) -> &str {
        &self.record.user_info
    }

    /// Returns the host, or an empty string if there is no authority.
    #[inline]
    #[must_use]
    pub fn host(&self) -> &str {
        &self.record.host
    }

    /// Returns whether the authority has a port.
    #[inline]
    #[must_use]
    pub fn has_port(&self) -> bool {
        self.record.port.is_some()
    }

    /// Returns the port.
    ///
    /// The value is meaningful only if [`has_port`][`Self::has_port`] returns
    /// true. Otherwise `0` is returned.
    #[inline]
    #[must_use]
    pub fn port(&self) -> u16 {
        self.record.port.unwrap_or(0)
    }

    /// Returns the port if present.
    #[inline]
    #[must_use]
    pub fn port_number(&self) -> Option<u16> {
        self.record.port
    }

    /// Returns the path segments.
    ///
    /// A leading empty segment means the path is absolute, and a trailing empty
    /// segment means the path ends with a slash. The path `/` is a single
    /// empty segment, and an empty path has no segments.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &[String] {
        &self.record.path
    }

    /// Returns the query, or an empty string if there is none.
    ///
    /// Note that `http://example.com/?` has an empty query, the same as
    /// `http://example.com/`.
    #[inline]
    #[must_use]
    pub fn query(&self) -> &str {
        &self.record.query
    }

    /// Returns the fragment, or an empty string if there is none.
    #[inline]
    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.record.fragment
    }

    /// Returns whether the URI is a relative reference, i.e. has no scheme.
    #[inline]
    #[must_use]
    pub fn is_relative_reference(&self) -> bool {
        self.record.scheme.is_empty()
    }

    /// Returns whether the path is relative.
    ///
    /// An empty path is relative. Otherwise the path is relative unless its
    /// first segment is empty.
    ///
    /// ```
    /// use uri_parts::Uri;
    ///
    /// assert!(Uri::parse("")?.contains_relative_path());
    /// assert!(Uri::parse("foo")?.contains_relative_path());
    /// assert!(Uri::parse("http://www.example.com")?.contains_relative_path());
    /// assert!(!Uri::parse("/")?.contains_relative_path());
    /// assert!(!Uri::parse("http://www.example.com/")?.contains_relative_path());
    /// # Ok::<_, uri_parts::Error>(())
    /// ```
    #[must_use]
    pub fn contains_relative_path(&self) -> bool {
        self.record
            .path
            .first()
            .map_or(true, |first| !first.is_empty())
    }
}

impl PartialEq for Uri {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.record == other.record
    }
}

impl Eq for Uri {}

impl Hash for Uri {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.record.hash(state);
    }
}

impl fmt::Debug for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uri")
            .field("source", &self.source)
            .field("scheme", &self.record.scheme)
            .field("user_info", &self.record.user_info)
            .field("host", &self.record.host)
            .field("port", &self.record.port)
            .field("path", &self.record.path)
            .field("query", &self.record.query)
            .field("fragment", &self.record.fragment)
            .finish()
    }
}

impl fmt::Display for Uri {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl AsRef<str> for Uri {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.source
    }
}

impl FromStr for Uri {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Uri {
    type Error = Error;

    #[inline]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Uri {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        let components = match parser::decompose(&s) {
            Ok(v) => v,
            Err(e) => {
                debug!("rejected URI {:?}: {}", s, e);
                return Err(e);
            }
        };
        trace!("decomposed URI {:?}: {:?}", s, components);
        let record = Record::from(components);
        Ok(Self { source: s, record })
    }
}

#[cfg(feature = "serde")]
mod __serde {
    use super::Uri;

    use core::convert::TryFrom;
    use core::fmt;

    use alloc::string::String;

    use serde::{
        de::{self, Visitor},
        Deserialize, Deserializer, Serialize, Serializer,
    };

    impl Serialize for Uri {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    /// URI string visitor.
    #[derive(Debug, Clone, Copy)]
    struct UriVisitor;

    impl<'de> Visitor<'de> for UriVisitor {
        type Value = Uri;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an URI string")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Uri::parse(v).map_err(E::custom)
        }

        fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Uri::try_from(v).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Uri {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_string(UriVisitor)
        }
    }
}
