//! Suffix matching

/// Returns true if `subject` ends with exactly the bytes of `suffix`.
///
/// An empty suffix matches every subject. Comparison is byte for byte,
/// with no case folding.
///
/// # Examples
///
/// ```
/// use strkit::ends_with;
///
/// assert!(ends_with("archive.tar.gz", ".gz"));
/// assert!(!ends_with("gz", ".gz"));
/// ```
pub fn ends_with(subject: &str, suffix: &str) -> bool {
    ends_with_bytes(subject.as_bytes(), suffix.as_bytes())
}

/// Byte-slice form of [`ends_with`]
pub fn ends_with_bytes(subject: &[u8], suffix: &[u8]) -> bool {
    if suffix.len() > subject.len() {
        return false;
    }
    &subject[subject.len() - suffix.len()..] == suffix
}
