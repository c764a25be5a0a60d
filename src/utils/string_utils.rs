//! String utility functions
//!
//! Small validation helpers shared by the token tables and the CLI.

/// A usable truthy token is non-empty ASCII without whitespace or control bytes
pub fn is_valid_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_graphic())
}

/// Returns the character if `text` holds exactly one
pub fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
