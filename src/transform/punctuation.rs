//! Punctuation removal.

/// Remove all ASCII punctuation characters from the text.
///
/// # Examples
///
/// ```
/// use lexis::transform::punctuation::strip_punctuation;
///
/// assert_eq!(strip_punctuation("hello, world!"), "hello world");
/// ```
pub fn strip_punctuation(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect()
}
