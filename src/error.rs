//! URI decomposition error.

use core::fmt;

/// URI decomposition error.
///
/// The only input rejected by the parser is an authority whose port is not a
/// decimal number in `0..=65535`.
// Note that this type should implement `Copy` trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    /// Inner error representation.
    repr: ErrorRepr,
}

impl Error {
    /// Returns the error kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self.repr {
            ErrorRepr::EmptyPort | ErrorRepr::NonDigitInPort | ErrorRepr::PortOverflow => {
                ErrorKind::MalformedPort
            }
        }
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            ErrorRepr::EmptyPort => f.write_str("malformed port number: empty"),
            ErrorRepr::NonDigitInPort => {
                f.write_str("malformed port number: contains a non-digit character")
            }
            ErrorRepr::PortOverflow => f.write_str("malformed port number: exceeds 65535"),
        }
    }
}

impl From<ErrorRepr> for Error {
    #[inline]
    fn from(repr: ErrorRepr) -> Self {
        Self { repr }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for Error {}

/// Error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The port in the authority is empty, has a non-digit character, or is
    /// larger than 65535.
    MalformedPort,
}

/// Internal representation of `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorRepr {
    /// Nothing follows the port delimiter.
    EmptyPort,
    /// The port has a character other than an ASCII digit.
    NonDigitInPort,
    /// The port does not fit in 16 bits.
    PortOverflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_repr_is_malformed_port() {
        for repr in [
            ErrorRepr::EmptyPort,
            ErrorRepr::NonDigitInPort,
            ErrorRepr::PortOverflow,
        ] {
            assert_eq!(Error::from(repr).kind(), ErrorKind::MalformedPort);
        }
    }

    #[cfg(feature = "std")]
    #[test]
    fn display_mentions_port() {
        let e = Error::from(ErrorRepr::PortOverflow);
        assert_eq!(e.to_string(), "malformed port number: exceeds 65535");
    }
}
