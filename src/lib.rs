//! flatmatter: flat key-value front matter for text documents
//!
//! A document may open with a block of `key: value` lines between two `---`
//! delimiter lines. This library splits that block from the body, exposes
//! the pairs through simple accessors, and renders documents back to text.
//!
//! ```text
//! ---
//! title: Hello
//! author: Nick
//! ---
//! Content here
//! ```
//!
//! The metadata is deliberately flat: every value is a string, and the first
//! colon on a line separates key from value. Lines that are not pairs are
//! ignored, and text without a well-formed block simply has no metadata, so
//! parsing never fails.
//!
//! # Quick Start
//!
//! ```rust
//! use flatmatter::{parse, generate, Result};
//! use std::sync::Arc;
//!
//! fn main() -> Result<()> {
//!     let mut document = parse("---\ntitle: Hello\n---\nContent here")?;
//!     assert_eq!(document.get("title"), "Hello");
//!     assert_eq!(document.content(), "Content here");
//!
//!     // Parsed documents are shared through the cache; edit a private copy
//!     let doc = Arc::make_mut(&mut document);
//!     doc.set("author", "Nick");
//!     doc.validate_required(["title", "author"])?;
//!
//!     let text = generate(Some(&*doc))?;
//!     assert_eq!(text, "---\ntitle: Hello\nauthor: Nick\n---\nContent here");
//!     Ok(())
//! }
//! ```
//!
//! # Caching
//!
//! Parse results are memoized by exact input text in a process-wide cache.
//! Repeated calls with the same input return the same `Arc<Document>`.
//! Create a [`FrontmatterProcessor`] with a [`CacheConfig`] for a private,
//! bounded, or disabled cache.
//!
//! # Architecture
//!
//! - [`core`]: Document, Metadata and block location
//! - [`cache`]: the parse cache
//! - [`processor`]: parsing and generation through the cache
//! - [`io`]: reading and writing files
//! - [`error`]: error types

pub use cache::{CacheConfig, CacheStats, ParseCache};
pub use crate::core::{Document, Metadata};
pub use error::{ErrorSeverity, FlatMatterError, Result};
pub use io::{
    BackupOptions, FrontMatterReader, FrontMatterWriter, OutputOptions, ReaderConfig,
    WriteOptions, WriteResult, WriterConfig,
};
pub use processor::{FrontmatterProcessor, ProcessorConfig};

pub mod cache;
pub mod core;
pub mod error;
pub mod io;
pub mod processor;

use std::sync::Arc;

/// Parse `input` through the process-wide processor.
///
/// Never returns an error; see [`FrontmatterProcessor::parse`].
pub fn parse(input: &str) -> Result<Arc<Document>> {
    FrontmatterProcessor::global().parse(input)
}

/// Render a document to text, failing with
/// [`FlatMatterError::InvalidArgument`] when no document is given.
pub fn generate(document: Option<&Document>) -> Result<String> {
    FrontmatterProcessor::global().generate(document)
}
