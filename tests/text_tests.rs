// tests/text_tests.rs
use classic_ciphers::text::{decode, fold_case, strip_controls};
use classic_ciphers::{normalize, CipherError};

#[test]
fn test_only_four_controls_are_stripped() {
    assert_eq!(strip_controls(" a\tb\nc\rd "), "abcd");
    // form feed, vertical tab, no-break space, em space survive
    let kept = "\u{000C}\u{000B}\u{00A0}\u{2003}";
    assert_eq!(strip_controls(kept), kept);
}

#[test]
fn test_fold_case_scope() {
    assert_eq!(fold_case("hello, мир! ёж 42"), "HELLO, МИР! ЁЖ 42");
    assert_eq!(fold_case("ÄäßΩω"), "ÄäßΩω");
}

#[test]
fn test_normalize_strips_before_folding() {
    assert_eq!(normalize("при вет\r\n").unwrap(), "ПРИВЕТ");
    assert_eq!(normalize("ёлка").unwrap(), "ЁЛКА");
}

#[test]
fn test_normalize_empty_classes() {
    assert_eq!(normalize(""), Err(CipherError::EmptyInput));
    for only_controls in [" ", "\t", "\n", "\r", " \t\n\r \r\n"] {
        assert_eq!(normalize(only_controls), Err(CipherError::EmptyAfterCleaning));
    }
    // not one of the four, so it is content
    assert_eq!(normalize("\u{00A0}").unwrap(), "\u{00A0}");
}

#[test]
fn test_decode() {
    assert_eq!(decode("ЁЖ".as_bytes()).unwrap(), "ЁЖ");
    assert_eq!(decode(&[0xFF]), Err(CipherError::Encoding { valid_up_to: 0 }));
}
