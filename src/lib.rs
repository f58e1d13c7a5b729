//! Decomposition of generic URI strings.
//!
//! [`Uri`] splits a string into scheme, user info, host, port, path segments,
//! query, and fragment. It does not percent-decode, normalize, resolve
//! references against a base, or check scheme-specific rules. The only input
//! rejected is a malformed port number.
//!
//! # Decomposition rules
//!
//! * The scheme ends at the first `:` anywhere in the string, even after a
//!   `/`, `?`, or `#`. `urn:book:fantasy:hobbit` has the scheme `urn` and the
//!   path `book:fantasy:hobbit`, and `//host:80/p` has the scheme `//host`
//!   and no authority.
//! * The authority is present only if the text after the scheme starts with
//!   `//`. It ends at the next `/`, `?`, or `#`.
//! * The user info ends at the first `@` of the authority, and the port
//!   starts after the first `:` that follows.
//! * A path starting with `/` has a leading empty segment, and `/` alone is
//!   a single empty segment.
//! * The query starts at the first `?` and the fragment at the first `#`.
//!   A lone `?` gives an empty query, indistinguishable from no query.
//!
//! ```
//! use uri_parts::Uri;
//!
//! let uri: Uri = "urn:book:fantasy:hobbit".parse()?;
//! assert_eq!(uri.scheme(), "urn");
//! assert_eq!(uri.host(), "");
//! assert_eq!(uri.path(), ["book:fantasy:hobbit"]);
//! assert!(!uri.is_relative_reference());
//! # Ok::<_, uri_parts::Error>(())
//! ```
//!
//! # Features
//!
//! * `std` (**enabled by default**): implements `std::error::Error` for
//!   [`Error`]. Without it the crate is `no_std` and requires `alloc`.
//! * `memchr`: uses the `memchr` crate to find delimiters.
//! * `serde`: implements `Serialize` and `Deserialize` for [`Uri`] as a
//!   string.
//! * `log`: logs decomposition results through the `log` crate.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

mod error;
mod log;
pub(crate) mod parser;
mod uri;

pub use self::error::{Error, ErrorKind};
pub use self::uri::Uri;
