//! String inspection helpers
//!
//! Four independent, side-effect-free operations over borrowed text:
//! suffix matching, defaulting integer parsing, truthy interpretation of
//! byte buffers and second-to-last character search.

pub mod errors;
pub mod suffix;
pub mod integer;
pub mod truthy;
pub mod tokens;
pub mod locate;
#[cfg(test)]
mod tests;

pub use errors::{StrError, StrResult};
pub use suffix::{ends_with, ends_with_bytes};
pub use integer::{parse_int_or_default, parse_int_or_default_as, Bounded};
pub use truthy::is_truthy;
pub use tokens::TruthyTokens;
pub use locate::{find_second_last_char, find_second_last_index};
