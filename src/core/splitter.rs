//! Locating the front matter block at the start of a document

use regex::Regex;
use std::sync::LazyLock;

// Opening delimiter, lazily captured block, closing delimiter, then the rest.
// Delimiter padding is ASCII whitespace only.
static FRONT_MATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^---[\t\n\f\r ]*\n(.*?)\n---[\t\n\f\r ]*\n(.*)$").unwrap()
});

/// Split `input` into its raw metadata block and the content that follows.
///
/// Returns `None` when the text does not open with a delimited block; the
/// closing `---` line must be followed by a newline.
pub fn split_front_matter(input: &str) -> Option<(&str, &str)> {
    let caps = FRONT_MATTER_RE.captures(input)?;
    let block = caps.get(1)?.as_str();
    let content = caps.get(2)?.as_str();
    Some((block, content))
}
