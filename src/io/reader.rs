//! File reading and front matter parsing

use crate::cache::CacheConfig;
use crate::core::Document;
use crate::error::{FlatMatterError, Result};
use crate::processor::{FrontmatterProcessor, ProcessorConfig};
use log::debug;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Configuration for the front matter reader
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Maximum file size to read (in bytes)
    pub max_file_size: Option<u64>,
    /// Parse through the process-wide cache; when false nothing is memoized
    pub use_cache: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            max_file_size: Some(10 * 1024 * 1024), // 10MB default limit
            use_cache: true,
        }
    }
}

/// Front matter reader
pub struct FrontMatterReader {
    config: ReaderConfig,
    processor: Option<FrontmatterProcessor>,
}

impl FrontMatterReader {
    /// Create a new reader with default configuration
    pub fn new() -> Self {
        Self::with_config(ReaderConfig::default())
    }

    /// Create a new reader with custom configuration
    pub fn with_config(config: ReaderConfig) -> Self {
        let processor = if config.use_cache {
            None
        } else {
            Some(FrontmatterProcessor::with_config(ProcessorConfig {
                cache: CacheConfig::disabled(),
            }))
        };
        Self { config, processor }
    }

    /// Read a document from a file path
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<Arc<Document>> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(FlatMatterError::file_not_found(path));
        }

        if !path.is_file() {
            return Err(FlatMatterError::invalid_file_format(path));
        }

        if let Some(max_size) = self.config.max_file_size {
            let metadata = fs::metadata(path)?;
            if metadata.len() > max_size {
                return Err(FlatMatterError::validation(format!(
                    "File too large: {} bytes (limit: {} bytes)",
                    metadata.len(),
                    max_size
                )));
            }
        }

        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => FlatMatterError::permission_denied(path),
            _ => FlatMatterError::Io(e),
        })?;
        debug!("Read {} ({} bytes)", path.display(), content.len());

        self.parse_content(&content)
    }

    /// Parse document from string content
    pub fn parse_content(&self, content: &str) -> Result<Arc<Document>> {
        self.processor().parse(content)
    }

    /// Get reader configuration
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    fn processor(&self) -> &FrontmatterProcessor {
        self.processor
            .as_ref()
            .unwrap_or_else(|| FrontmatterProcessor::global())
    }
}

impl Default for FrontMatterReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience functions for common operations
pub mod convenience {
    use super::*;

    /// Read a document from a file path with default settings
    pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Arc<Document>> {
        FrontMatterReader::new().read_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".md").unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_read_file_with_front_matter() {
        let content = "---\ntitle: Test Document\nauthor: John Doe\n---\n# Hello World\n\nThis is the body content.";

        let file = create_test_file(content);
        let reader = FrontMatterReader::new();
        let doc = reader.read_file(file.path()).unwrap();

        assert!(doc.has_front_matter());
        assert_eq!(doc.get("title"), "Test Document");
        assert_eq!(doc.get("author"), "John Doe");
        assert_eq!(doc.content(), "# Hello World\n\nThis is the body content.");
    }

    #[test]
    fn test_read_file_without_front_matter() {
        let content = "# Hello World\n\nThis is just markdown content.";

        let file = create_test_file(content);
        let doc = FrontMatterReader::new().read_file(file.path()).unwrap();

        assert!(!doc.has_front_matter());
        assert_eq!(doc.content(), content);
    }

    #[test]
    fn test_read_empty_file() {
        let file = create_test_file("");
        let doc = FrontMatterReader::new().read_file(file.path()).unwrap();

        assert!(!doc.has_front_matter());
        assert_eq!(doc.content(), "");
    }

    #[test]
    fn test_read_missing_file() {
        let result = FrontMatterReader::new().read_file("/nonexistent/file.md");
        assert!(matches!(
            result.unwrap_err(),
            FlatMatterError::FileNotFound { .. }
        ));
    }

    #[test]
    fn test_read_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = FrontMatterReader::new().read_file(dir.path());
        assert!(matches!(
            result.unwrap_err(),
            FlatMatterError::InvalidFileFormat { .. }
        ));
    }

    #[test]
    fn test_size_limit() {
        let file = create_test_file("---\ntitle: Too long\n---\nbody");
        let reader = FrontMatterReader::with_config(ReaderConfig {
            max_file_size: Some(4),
            ..Default::default()
        });

        let err = reader.read_file(file.path()).unwrap_err();
        assert!(matches!(err, FlatMatterError::Validation { .. }));
    }

    #[test]
    fn test_uncached_reader() {
        let content = "---\ntitle: Private\n---\nbody";
        let reader = FrontMatterReader::with_config(ReaderConfig {
            use_cache: false,
            ..Default::default()
        });

        let first = reader.parse_content(content).unwrap();
        let second = reader.parse_content(content).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first.get("title"), "Private");
    }
}
