//! File I/O: reading documents, writing them back, resolving paths

pub mod reader;
pub mod resolver;
pub mod writer;

pub use reader::{FrontMatterReader, ReaderConfig};
pub use resolver::{is_markdown, resolve_files};
pub use writer::{
    BackupOptions, FrontMatterWriter, OutputOptions, WriteOptions, WriteResult, WriterConfig,
};

/// Convenience functions for common file operations
pub mod convenience {
    pub use super::reader::convenience::*;
    pub use super::writer::convenience::*;
}
