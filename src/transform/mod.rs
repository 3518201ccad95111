//! Independent string transforms.
//!
//! Each function is pure: a string in, a string out, no shared state and no
//! error conditions — malformed input passes through unchanged.

pub mod case;
pub mod markup;
pub mod punctuation;

pub use case::{lowercase, reversed, title_case, uppercase};
pub use markup::{bold, colored, heading, italics, strikethrough, strip_markup, underline};
pub use punctuation::strip_punctuation;
