//! Tests for defaulting integer parsing

extern crate std;

use crate::strings::integer::{parse_int_or_default, parse_int_or_default_as};

#[test]
fn test_valid_integers() {
    std::assert_eq!(parse_int_or_default("42", -1), 42);
    std::assert_eq!(parse_int_or_default("-7", 0), -7);
    std::assert_eq!(parse_int_or_default("+15", 0), 15);
    std::assert_eq!(parse_int_or_default("0", 9), 0);
    std::assert_eq!(parse_int_or_default("007", 9), 7);
}

#[test]
fn test_invalid_input_uses_default() {
    std::assert_eq!(parse_int_or_default("", -1), -1);
    std::assert_eq!(parse_int_or_default("abc", -1), -1);
    std::assert_eq!(parse_int_or_default("12abc", -1), -1);
    std::assert_eq!(parse_int_or_default("-", -1), -1);
    std::assert_eq!(parse_int_or_default("+-3", -1), -1);
    std::assert_eq!(parse_int_or_default("1.5", -1), -1);
    std::assert_eq!(parse_int_or_default("0x10", -1), -1);
}

#[test]
fn test_whitespace_policy() {
    // Leading whitespace is skipped
    std::assert_eq!(parse_int_or_default("  42", -1), 42);
    std::assert_eq!(parse_int_or_default("\t\n-3", -1), -3);
    // Vertical tab and form feed count as whitespace, as in C isspace
    std::assert_eq!(parse_int_or_default("\x0b7", -1), 7);
    std::assert_eq!(parse_int_or_default("\x0c\r+8", -1), 8);
    // Other control bytes do not
    std::assert_eq!(parse_int_or_default("\x007", -1), -1);
    // Trailing whitespace and whitespace-only input are rejected
    std::assert_eq!(parse_int_or_default("42 ", -1), -1);
    std::assert_eq!(parse_int_or_default("   ", -1), -1);
    // Whitespace between sign and digits is rejected
    std::assert_eq!(parse_int_or_default("- 3", -1), -1);
}

#[test]
fn test_overflow_saturates() {
    std::assert_eq!(parse_int_or_default("9223372036854775807", 0), i64::MAX);
    std::assert_eq!(parse_int_or_default("9223372036854775808", 0), i64::MAX);
    std::assert_eq!(parse_int_or_default("-9223372036854775808", 0), i64::MIN);
    std::assert_eq!(parse_int_or_default("-99999999999999999999999", 0), i64::MIN);
}

#[test]
fn test_overflow_with_trailing_garbage_uses_default() {
    std::assert_eq!(parse_int_or_default("99999999999999999999x", 5), 5);
}

#[test]
fn test_narrow_types() {
    std::assert_eq!(parse_int_or_default_as::<u16>("8080", 80), 8080);
    std::assert_eq!(parse_int_or_default_as::<u16>("http", 80), 80);
    std::assert_eq!(parse_int_or_default_as::<u16>("70000", 80), u16::MAX);
    std::assert_eq!(parse_int_or_default_as::<u16>("-1", 80), 0);
    std::assert_eq!(parse_int_or_default_as::<i8>("-200", 0), i8::MIN);
    std::assert_eq!(parse_int_or_default_as::<i32>("-200", 0), -200);
}

#[test]
fn test_unsigned_word_types() {
    std::assert_eq!(parse_int_or_default_as::<usize>("8", 1), 8);
    std::assert_eq!(parse_int_or_default_as::<usize>("many", 1), 1);
    std::assert_eq!(parse_int_or_default_as::<usize>("-3", 1), 0);
    std::assert_eq!(parse_int_or_default_as::<u64>("9223372036854775807", 0), i64::MAX as u64);
    std::assert_eq!(parse_int_or_default_as::<u64>("-1", 7), 0);
}
