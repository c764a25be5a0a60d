//! Reverse character search

/// Byte index of the second-to-last occurrence of `target` in `subject`.
///
/// Returns `None` when `target` occurs fewer than two times.
pub fn find_second_last_index(subject: &str, target: char) -> Option<usize> {
    subject.rmatch_indices(target).nth(1).map(|(index, _)| index)
}

/// Suffix of `subject` starting at the second-to-last occurrence of `target`.
///
/// The returned slice borrows `subject`; nothing is copied.
///
/// # Examples
///
/// ```
/// use strkit::find_second_last_char;
///
/// assert_eq!(find_second_last_char("report.txt.gz", '.'), Some(".txt.gz"));
/// assert_eq!(find_second_last_char("report.gz", '.'), None);
/// ```
pub fn find_second_last_char(subject: &str, target: char) -> Option<&str> {
    find_second_last_index(subject, target).map(|index| &subject[index..])
}
