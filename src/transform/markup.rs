//! Markup stripping and wrapping.
//!
//! # Examples
//!
//! ```
//! use lexis::transform::markup::{bold, heading, strip_markup};
//!
//! assert_eq!(strip_markup("<b>hi</b> there"), "hi there");
//! assert_eq!(heading("Title", 2), "<h2>Title</h2>");
//! assert_eq!(bold("loud"), "<b>loud</b>");
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Matches tag-like substrings, non-greedy.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// Remove all `<...>` tag-like substrings from the text.
///
/// Idempotent: stripping already-stripped text is a no-op.
pub fn strip_markup(text: &str) -> String {
    TAG_PATTERN.replace_all(text, "").into_owned()
}

/// Wrap the text in a heading tag of the given level.
///
/// The level is not validated.
pub fn heading(text: &str, level: u8) -> String {
    format!("<h{level}>{text}</h{level}>")
}

/// Wrap the text in italics tags.
pub fn italics(text: &str) -> String {
    format!("<i>{text}</i>")
}

/// Wrap the text in bold tags.
pub fn bold(text: &str) -> String {
    format!("<b>{text}</b>")
}

/// Wrap the text in underline tags.
pub fn underline(text: &str) -> String {
    format!("<u>{text}</u>")
}

/// Wrap the text in strikethrough tags.
pub fn strikethrough(text: &str) -> String {
    format!("<s>{text}</s>")
}

/// Wrap the text in a colored span.
///
/// The color string is not validated.
pub fn colored(text: &str, color: &str) -> String {
    format!("<span style=\"color:{color}\">{text}</span>")
}
