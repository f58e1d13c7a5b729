//! Functions for common string operations.

/// Returns the position of the first occurrence of the given byte.
#[inline]
#[must_use]
fn find(haystack: &str, needle: u8) -> Option<usize> {
    debug_assert!(needle.is_ascii(), "[precondition] needle should be ASCII");
    #[cfg(feature = "memchr")]
    {
        memchr::memchr(needle, haystack.as_bytes())
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.bytes().position(|b| b == needle)
    }
}

/// Returns the position of the first occurrence of either of the given bytes.
#[inline]
#[must_use]
fn find2(haystack: &str, needle1: u8, needle2: u8) -> Option<usize> {
    debug_assert!(needle1.is_ascii() && needle2.is_ascii());
    #[cfg(feature = "memchr")]
    {
        memchr::memchr2(needle1, needle2, haystack.as_bytes())
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack
            .bytes()
            .position(|b| b == needle1 || b == needle2)
    }
}

/// Splits the string at the first occurrence of the byte, and drops the byte.
///
/// Returns `(prefix, suffix)` where the delimiter is in neither part.
#[inline]
#[must_use]
pub(crate) fn find_split_hole(s: &str, needle: u8) -> Option<(&str, &str)> {
    find(s, needle).map(|pos| (&s[..pos], &s[(pos + 1)..]))
}

/// Splits the string at the first occurrence of the byte.
///
/// The delimiter is the first byte of the suffix.
#[inline]
#[must_use]
pub(crate) fn find_split(s: &str, needle: u8) -> Option<(&str, &str)> {
    find(s, needle).map(|pos| s.split_at(pos))
}

/// Splits the string at the first occurrence of either of the bytes.
///
/// The delimiter is the first byte of the suffix.
#[inline]
#[must_use]
pub(crate) fn find_split2(s: &str, needle1: u8, needle2: u8) -> Option<(&str, &str)> {
    find2(s, needle1, needle2).map(|pos| s.split_at(pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_hole_drops_delimiter() {
        assert_eq!(find_split_hole("user@host", b'@'), Some(("user", "host")));
        assert_eq!(find_split_hole("@", b'@'), Some(("", "")));
        assert_eq!(find_split_hole("host", b'@'), None);
    }

    #[test]
    fn split_keeps_delimiter() {
        assert_eq!(find_split("host/a/b", b'/'), Some(("host", "/a/b")));
        assert_eq!(find_split2("a/b?q#f", b'?', b'#'), Some(("a/b", "?q#f")));
        assert_eq!(find_split2("a/b#f?q", b'?', b'#'), Some(("a/b", "#f?q")));
        assert_eq!(find_split2("a/b", b'?', b'#'), None);
    }
}
