//! Casing and reversal transforms.

use unicode_segmentation::UnicodeSegmentation;

/// Convert the text to uppercase.
pub fn uppercase(text: &str) -> String {
    text.to_uppercase()
}

/// Convert the text to lowercase.
pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Title-case the text: the first letter of every alphabetic run is
/// uppercased, the rest lowercased.
///
/// # Examples
///
/// ```
/// use lexis::transform::case::title_case;
///
/// assert_eq!(title_case("hello world"), "Hello World");
/// assert_eq!(title_case("rust-lang"), "Rust-Lang");
/// ```
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(c);
            in_word = false;
        }
    }

    result
}

/// Reverse the text by grapheme clusters.
///
/// Grapheme-aware so combining sequences survive; self-inverse.
pub fn reversed(text: &str) -> String {
    text.graphemes(true).rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_lowercase() {
        assert_eq!(uppercase("hello"), "HELLO");
        assert_eq!(lowercase("HeLLo"), "hello");
    }

    #[test]
    fn test_case_round_trip() {
        let s = "MiXeD Case Text";
        assert_eq!(lowercase(&uppercase(s)), lowercase(s));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("hello world"), "Hello World");
        assert_eq!(title_case("HELLO WORLD"), "Hello World");
        assert_eq!(title_case("rust-lang"), "Rust-Lang");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_reversed() {
        assert_eq!(reversed("abc"), "cba");
        assert_eq!(reversed(""), "");
    }

    #[test]
    fn test_reversed_is_self_inverse() {
        let s = "héllo wörld";
        assert_eq!(reversed(&reversed(s)), s);
    }

    #[test]
    fn test_reversed_keeps_graphemes_intact() {
        // e + combining acute accent stays one unit
        let s = "e\u{0301}x";
        assert_eq!(reversed(s), "xe\u{0301}");
    }
}
