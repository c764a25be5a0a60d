//! Boolean interpretation of byte buffers

use crate::strings::tokens::TruthyTokens;

/// Returns true if `buffer` is one of the built-in truthy tokens.
///
/// The built-in set is `1`, `true`, `yes` and `on`, matched ignoring ASCII
/// case. The buffer must be exactly the token: no padding, no terminator.
/// Everything else, including an empty buffer, is false.
///
/// # Examples
///
/// ```
/// use strkit::is_truthy;
///
/// assert!(is_truthy(b"Yes"));
/// assert!(!is_truthy(b"no"));
/// assert!(!is_truthy(b"true\0"));
/// ```
pub fn is_truthy(buffer: &[u8]) -> bool {
    TruthyTokens::builtin().is_truthy(buffer)
}
