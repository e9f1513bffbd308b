//! Parsing and generation with a memoizing cache
//!
//! [`FrontmatterProcessor`] splits text into metadata and content, caching
//! the result per exact input. A process-wide instance backs the crate-level
//! [`parse`](crate::parse) and [`generate`](crate::generate) functions.

use std::sync::{Arc, OnceLock};

use log::trace;

use crate::cache::{CacheConfig, CacheStats, ParseCache};
use crate::core::{split_front_matter, Document, Metadata};
use crate::error::Result;

/// Configuration for a [`FrontmatterProcessor`]
#[derive(Debug, Clone, Default)]
pub struct ProcessorConfig {
    pub cache: CacheConfig,
}

/// Front matter parser and generator
pub struct FrontmatterProcessor {
    cache: ParseCache,
}

impl FrontmatterProcessor {
    /// Create a processor with an unbounded cache
    pub fn new() -> Self {
        Self::with_config(ProcessorConfig::default())
    }

    pub fn with_config(config: ProcessorConfig) -> Self {
        Self {
            cache: ParseCache::new(config.cache),
        }
    }

    /// Process-wide processor shared by the crate-level functions
    pub fn global() -> &'static FrontmatterProcessor {
        static GLOBAL: OnceLock<FrontmatterProcessor> = OnceLock::new();
        GLOBAL.get_or_init(FrontmatterProcessor::new)
    }

    /// Split `input` into metadata and content.
    ///
    /// Never fails. Text without a leading delimited block yields a document
    /// with no metadata whose content is the whole input. Documents with
    /// front matter are cached by their exact input; a repeated call returns
    /// the same shared instance. Use `Arc::make_mut` to get a private copy
    /// before editing.
    pub fn parse(&self, input: &str) -> Result<Arc<Document>> {
        if input.is_empty() {
            return Ok(Arc::new(Document::empty()));
        }

        if let Some(document) = self.cache.get(input) {
            trace!("Parse cache hit ({} bytes)", input.len());
            return Ok(document);
        }

        let Some((block, content)) = split_front_matter(input) else {
            trace!("No front matter found ({} bytes)", input.len());
            return Ok(Arc::new(Document::body_only(input)));
        };

        let document = Arc::new(Document::new(Metadata::parse_block(block), content));
        trace!(
            "Parsed {} metadata keys, caching ({} bytes)",
            document.metadata().len(),
            input.len()
        );
        self.cache.insert(input.to_string(), Arc::clone(&document));
        Ok(document)
    }

    /// Render a document back to text; fails when no document is given
    pub fn generate(&self, document: Option<&Document>) -> Result<String> {
        crate::core::generate(document)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

impl Default for FrontmatterProcessor {
    fn default() -> Self {
        Self::new()
    }
}
