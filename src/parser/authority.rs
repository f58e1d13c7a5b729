//! Parsers for the `authority` part.

use crate::error::{Error, ErrorRepr};
use crate::parser::str::find_split_hole;

/// Components of an authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AuthorityComponents<'a> {
    /// User info, without the trailing `@`.
    ///
    /// Empty if the authority has no `@`.
    pub(crate) user_info: &'a str,
    /// Host.
    pub(crate) host: &'a str,
    /// Port.
    pub(crate) port: Option<u16>,
}

/// Decomposes the authority into user info, host, and port.
///
/// The first `@` ends the user info, and the first `:` after it starts the port.
pub(crate) fn decompose_authority(authority: &str) -> Result<AuthorityComponents<'_>, Error> {
    let (user_info, host_port) = match find_split_hole(authority, b'@') {
        Some((user_info, rest)) => (user_info, rest),
        None => ("", authority),
    };
    let (host, port) = match find_split_hole(host_port, b':') {
        Some((host, port)) => (host, Some(parse_port(port)?)),
        None => (host_port, None),
    };

    Ok(AuthorityComponents {
        user_info,
        host,
        port,
    })
}

/// Parses a port number.
///
/// Only ASCII digits are accepted, so signs and whitespace are rejected.
/// The value is accumulated in 32 bits and checked against `u16::MAX` after
/// every digit.
pub(crate) fn parse_port(s: &str) -> Result<u16, Error> {
    if s.is_empty() {
        return Err(ErrorRepr::EmptyPort.into());
    }
    let mut acc: u32 = 0;
    for b in s.bytes() {
        if !b.is_ascii_digit() {
            return Err(ErrorRepr::NonDigitInPort.into());
        }
        acc = acc * 10 + u32::from(b - b'0');
        if acc > u32::from(u16::MAX) {
            return Err(ErrorRepr::PortOverflow.into());
        }
    }

    u16::try_from(acc).map_err(|_| Error::from(ErrorRepr::PortOverflow))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_accepts_decimal_digits() {
        assert_eq!(parse_port("8080"), Ok(8080));
        assert_eq!(parse_port("0"), Ok(0));
        assert_eq!(parse_port("00080"), Ok(80));
        assert_eq!(parse_port("65535"), Ok(65535));
    }

    #[test]
    fn port_rejects_overflow() {
        assert_eq!(parse_port("65536"), Err(ErrorRepr::PortOverflow.into()));
        assert_eq!(
            parse_port("99999999999999999999"),
            Err(ErrorRepr::PortOverflow.into())
        );
    }

    #[test]
    fn port_rejects_non_digits() {
        for s in ["-1564", "+80", "8080spam", "spam", " 80", "８０"] {
            assert_eq!(
                parse_port(s),
                Err(ErrorRepr::NonDigitInPort.into()),
                "{:?}",
                s
            );
        }
    }

    #[test]
    fn port_rejects_empty() {
        assert_eq!(parse_port(""), Err(ErrorRepr::EmptyPort.into()));
    }

    #[test]
    fn authority_without_user_info_or_port() {
        let c = decompose_authority("www.example.com").expect("valid authority");
        assert_eq!(c.user_info, "");
        assert_eq!(c.host, "www.example.com");
        assert_eq!(c.port, None);
    }

    #[test]
    fn authority_with_everything() {
        let c = decompose_authority("joe:pw@www.example.com:8080").expect("valid authority");
        assert_eq!(c.user_info, "joe:pw");
        assert_eq!(c.host, "www.example.com");
        assert_eq!(c.port, Some(8080));
    }

    #[test]
    fn authority_empty_parts() {
        let c = decompose_authority("").expect("valid authority");
        assert_eq!((c.user_info, c.host, c.port), ("", "", None));

        let c = decompose_authority("@").expect("valid authority");
        assert_eq!((c.user_info, c.host, c.port), ("", "", None));

        let c = decompose_authority(":80").expect("valid authority");
        assert_eq!((c.user_info, c.host, c.port), ("", "", Some(80)));
    }

    #[test]
    fn authority_bad_port() {
        assert!(decompose_authority("example.com:").is_err());
        assert!(decompose_authority("example.com:spam").is_err());
        assert!(decompose_authority("user@example.com:65536").is_err());
    }
}
