//! Core document model
//!
//! A [`Document`] pairs flat front matter metadata with the body text that
//! follows it. Documents are produced by the parser or built directly, and
//! rendered back to text with [`Document::to_text`].

use crate::core::metadata::Metadata;
use crate::error::{FlatMatterError, Result};
use serde::Serialize;

/// Delimiter line opening and closing the front matter block
pub const DELIMITER: &str = "---";

/// A text document with flat key-value front matter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    metadata: Metadata,
    content: String,
}

impl Document {
    /// Create a new document from metadata and body content
    pub fn new(metadata: Metadata, content: impl Into<String>) -> Self {
        Self {
            metadata,
            content: content.into(),
        }
    }

    /// Create a new empty document
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a document with only body content (no front matter)
    pub fn body_only(content: impl Into<String>) -> Self {
        Self::new(Metadata::new(), content)
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Get the body content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the document has any metadata
    pub fn has_front_matter(&self) -> bool {
        !self.metadata.is_empty()
    }

    /// Value for `key`, or the empty string when the key is absent.
    ///
    /// Use [`Document::has`] to tell an absent key from an empty value.
    pub fn get(&self, key: &str) -> &str {
        self.metadata.get(key).unwrap_or("")
    }

    /// Insert or overwrite a metadata value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key, value);
    }

    /// Remove a metadata key; a missing key is a no-op
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.metadata.remove(key)
    }

    /// Check whether a metadata key is present
    pub fn has(&self, key: &str) -> bool {
        self.metadata.contains_key(key)
    }

    /// Ensure every key in `keys` is present, in order.
    ///
    /// Fails on the first missing key. A key with an empty value counts as
    /// present.
    pub fn validate_required<I, K>(&self, keys: I) -> Result<()>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        for key in keys {
            let key = key.as_ref();
            if !self.has(key) {
                return Err(FlatMatterError::missing_metadata(key));
            }
        }
        Ok(())
    }

    /// Render the document back to text.
    ///
    /// Without metadata the content is returned unchanged. Otherwise the
    /// pairs are written as `key: value` lines between `---` delimiters,
    /// followed by the content verbatim.
    pub fn to_text(&self) -> String {
        if self.metadata.is_empty() {
            return self.content.clone();
        }

        let mut out = String::with_capacity(self.content.len() + 64);
        out.push_str(DELIMITER);
        out.push('\n');
        for (key, value) in self.metadata.iter() {
            out.push_str(key);
            out.push_str(": ");
            out.push_str(value);
            out.push('\n');
        }
        out.push_str(DELIMITER);
        out.push('\n');
        out.push_str(&self.content);
        out
    }
}

/// Render an optional document, failing when none is given
pub fn generate(document: Option<&Document>) -> Result<String> {
    let document =
        document.ok_or_else(|| FlatMatterError::invalid_argument("document is missing"))?;
    Ok(document.to_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Document {
        let metadata: Metadata = [("title", "Test"), ("author", "Nick")].into_iter().collect();
        Document::new(metadata, "Body")
    }

    #[test]
    fn test_document_creation() {
        let doc = Document::empty();
        assert!(!doc.has_front_matter());
        assert_eq!(doc.content(), "");
        assert!(doc.metadata().is_empty());

        let doc = Document::body_only("Just text");
        assert!(!doc.has_front_matter());
        assert_eq!(doc.content(), "Just text");
    }

    #[test]
    fn test_get_absent_is_empty_string() {
        let mut doc = Document::empty();
        assert_eq!(doc.get("missing"), "");
        assert!(!doc.has("missing"));

        doc.set("draft", "");
        assert_eq!(doc.get("draft"), "");
        assert!(doc.has("draft"));
    }

    #[test]
    fn test_set_has_remove() {
        let mut doc = Document::empty();
        doc.set("k", "v");
        assert!(doc.has("k"));
        assert_eq!(doc.get("k"), "v");

        doc.set("k", "w");
        assert_eq!(doc.get("k"), "w");

        assert_eq!(doc.remove("k"), Some("w".to_string()));
        assert!(!doc.has("k"));
        assert_eq!(doc.remove("k"), None);
    }

    #[test]
    fn test_validate_required() {
        let mut doc = sample();
        assert!(doc.validate_required(Vec::<String>::new()).is_ok());
        assert!(doc.validate_required(["title", "author"]).is_ok());

        let err = doc.validate_required(["title", "missing", "other"]).unwrap_err();
        assert_eq!(err.missing_key(), Some("missing"));
        assert_eq!(err.to_string(), "missing required metadata: missing");

        doc.set("missing", "");
        assert!(doc.validate_required(["missing"]).is_ok());
    }

    #[test]
    fn test_to_text_with_metadata() {
        assert_eq!(sample().to_text(), "---\ntitle: Test\nauthor: Nick\n---\nBody");
    }

    #[test]
    fn test_to_text_without_metadata() {
        assert_eq!(Document::body_only("Body").to_text(), "Body");
    }

    #[test]
    fn test_generate() {
        assert_eq!(generate(Some(&sample())).unwrap(), sample().to_text());

        let err = generate(None).unwrap_err();
        assert!(matches!(err, FlatMatterError::InvalidArgument { .. }));
    }
}
