//! Core types for flat front matter
//!
//! - Document: metadata plus body content, with accessors and rendering
//! - Metadata: ordered key-value pairs and the block parser
//! - splitter: locating the delimited block at the start of a text

pub mod document;
pub mod metadata;
pub mod splitter;

pub use document::{generate, Document, DELIMITER};
pub use metadata::Metadata;
pub use splitter::split_front_matter;
