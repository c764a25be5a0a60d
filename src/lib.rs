pub mod strings;
pub mod utils;
pub mod commands;

pub use strings::{
    ends_with, ends_with_bytes, find_second_last_char, find_second_last_index, is_truthy,
    parse_int_or_default, parse_int_or_default_as, StrError, StrResult, TruthyTokens,
};
