//! Serde support.
#![cfg(feature = "serde")]

use serde_test::{assert_de_tokens, assert_de_tokens_error, assert_tokens, Token};

use uri_parts::Uri;

#[test]
fn uri_as_string() {
    let uri = Uri::parse("http://joe@www.example.com:8080/foo?q#f").expect("valid URI");
    assert_tokens(&uri, &[Token::Str("http://joe@www.example.com:8080/foo?q#f")]);
    assert_de_tokens(&uri, &[Token::String("http://joe@www.example.com:8080/foo?q#f")]);
}

#[test]
fn empty_uri() {
    assert_tokens(&Uri::new(), &[Token::Str("")]);
}

#[test]
fn malformed_port() {
    assert_de_tokens_error::<Uri>(
        &[Token::Str("http://www.example.com:65536/")],
        "malformed port number: exceeds 65535",
    );
}
