//! Tests for truthy interpretation against the built-in table

extern crate std;

use crate::strings::truthy::is_truthy;

#[test]
fn test_builtin_tokens() {
    for token in ["1", "true", "yes", "on"] {
        std::assert!(is_truthy(token.as_bytes()), "{:?}", token);
    }
}

#[test]
fn test_case_insensitive() {
    std::assert!(is_truthy(b"TRUE"));
    std::assert!(is_truthy(b"Yes"));
    std::assert!(is_truthy(b"oN"));
}

#[test]
fn test_non_tokens_are_false() {
    for value in ["", "0", "false", "no", "off", "y", "t", "truee", "2", "enabled"] {
        std::assert!(!is_truthy(value.as_bytes()), "{:?}", value);
    }
}

#[test]
fn test_no_padding_allowed() {
    std::assert!(!is_truthy(b" true"));
    std::assert!(!is_truthy(b"true\n"));
    std::assert!(!is_truthy(b"1\0"));
}

#[test]
fn test_buffer_slice_of_larger_data() {
    let header = b"on;charset=utf-8";
    std::assert!(is_truthy(&header[..2]));
    std::assert!(!is_truthy(&header[..3]));
}

#[test]
fn test_non_utf8_is_false() {
    std::assert!(!is_truthy(&[0xff, 0xfe]));
}
