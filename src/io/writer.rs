//! File writing with atomic operations and backup support

use crate::core::Document;
use crate::error::{FlatMatterError, Result};
use log::debug;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Configuration for the front matter writer
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Create backup files before writing
    pub backup_enabled: bool,
    /// Backup file suffix (e.g., ".bak")
    pub backup_suffix: Option<String>,
    /// Backup directory (if None, backups go in same directory)
    pub backup_dir: Option<PathBuf>,
    /// Use atomic writes (write to temp file first, then rename)
    pub atomic_writes: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            backup_enabled: false,
            backup_suffix: None,
            backup_dir: None,
            atomic_writes: true,
        }
    }
}

/// Write operation options for individual operations
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Override backup settings for this operation
    pub backup: Option<BackupOptions>,
    /// Override output settings for this operation
    pub output: Option<OutputOptions>,
    /// Render and compare without writing
    pub dry_run: bool,
}

/// Backup options
#[derive(Debug, Clone)]
pub struct BackupOptions {
    pub enabled: bool,
    pub suffix: Option<String>,
    pub directory: Option<PathBuf>,
}

/// Where rendered output goes
#[derive(Debug, Clone)]
pub enum OutputOptions {
    /// Write to the original file (default)
    InPlace,
    /// Return the rendered text only; the caller prints it
    Stdout,
    /// Write to a specific file
    File(PathBuf),
}

/// Result of a write operation
#[derive(Debug)]
pub struct WriteResult {
    /// Whether the rendered text differs from what was on disk
    pub modified: bool,
    /// Path where the content was written (None for stdout and dry runs)
    pub output_path: Option<PathBuf>,
    /// Path of backup file if created
    pub backup_path: Option<PathBuf>,
    /// Rendered text, kept for dry runs and stdout output
    pub rendered: Option<String>,
}

/// Front matter writer
pub struct FrontMatterWriter {
    config: WriterConfig,
}

impl FrontMatterWriter {
    /// Create a new writer with default configuration
    pub fn new() -> Self {
        Self {
            config: WriterConfig::default(),
        }
    }

    /// Create a new writer with custom configuration
    pub fn with_config(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Render `document` and write it for `path`
    pub fn write_file<P: AsRef<Path>>(
        &self,
        document: &Document,
        path: P,
        options: Option<WriteOptions>,
    ) -> Result<WriteResult> {
        let path = path.as_ref();
        let options = options.unwrap_or_default();
        let new_content = document.to_text();

        let original_content = if path.is_file() {
            Some(fs::read_to_string(path)?)
        } else {
            None
        };
        let content_changed = original_content.as_deref() != Some(new_content.as_str());

        if options.dry_run {
            return Ok(WriteResult {
                modified: content_changed,
                output_path: None,
                backup_path: None,
                rendered: Some(new_content),
            });
        }

        match options.output.as_ref().unwrap_or(&OutputOptions::InPlace) {
            OutputOptions::Stdout => Ok(WriteResult {
                modified: content_changed,
                output_path: None,
                backup_path: None,
                rendered: Some(new_content),
            }),
            OutputOptions::InPlace => {
                self.write_to_file(path, &new_content, &options, content_changed)
            }
            OutputOptions::File(target) => {
                self.write_to_file(target, &new_content, &options, true)
            }
        }
    }

    fn write_to_file(
        &self,
        path: &Path,
        content: &str,
        options: &WriteOptions,
        content_changed: bool,
    ) -> Result<WriteResult> {
        let mut result = WriteResult {
            modified: content_changed,
            output_path: Some(path.to_path_buf()),
            backup_path: None,
            rendered: None,
        };

        if !content_changed {
            debug!("{} unchanged, skipping write", path.display());
            return Ok(result);
        }

        if self.should_create_backup(options) && path.exists() {
            result.backup_path = Some(self.create_backup(path, options)?);
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        if self.config.atomic_writes {
            self.write_atomic(path, content)?;
        } else {
            fs::write(path, content)?;
        }
        debug!("Wrote {} ({} bytes)", path.display(), content.len());

        Ok(result)
    }

    fn should_create_backup(&self, options: &WriteOptions) -> bool {
        match &options.backup {
            Some(backup) => backup.enabled,
            None => self.config.backup_enabled,
        }
    }

    /// Copy the original next to itself (or into the backup directory)
    fn create_backup(&self, original: &Path, options: &WriteOptions) -> Result<PathBuf> {
        let (suffix, directory) = match &options.backup {
            Some(backup) => (backup.suffix.as_deref(), backup.directory.as_ref()),
            None => (
                self.config.backup_suffix.as_deref(),
                self.config.backup_dir.as_ref(),
            ),
        };
        let suffix = suffix.unwrap_or(".bak");

        let file_name = original
            .file_name()
            .ok_or_else(|| FlatMatterError::backup_error("Could not extract filename for backup"))?;
        let backup_name = format!("{}{}", file_name.to_string_lossy(), suffix);

        let backup_path = match directory {
            Some(dir) => {
                fs::create_dir_all(dir).map_err(|e| {
                    FlatMatterError::backup_error(format!("Could not create backup directory: {}", e))
                })?;
                dir.join(backup_name)
            }
            None => original.with_file_name(backup_name),
        };

        fs::copy(original, &backup_path)
            .map_err(|e| FlatMatterError::backup_error(format!("Failed to create backup: {}", e)))?;
        debug!("Backed up {} to {}", original.display(), backup_path.display());

        Ok(backup_path)
    }

    fn write_atomic(&self, path: &Path, content: &str) -> Result<()> {
        let parent_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut temp_file = NamedTempFile::new_in(parent_dir)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.flush()?;
        temp_file.persist(path).map_err(|e| FlatMatterError::Io(e.error))?;

        Ok(())
    }

    /// Get writer configuration
    pub fn config(&self) -> &WriterConfig {
        &self.config
    }
}

impl Default for FrontMatterWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience functions for common operations
pub mod convenience {
    use super::*;

    /// Write a document to a file with default settings
    pub fn write_document<P: AsRef<Path>>(document: &Document, path: P) -> Result<WriteResult> {
        FrontMatterWriter::new().write_file(document, path, None)
    }

    /// Render a document and report whether it would change the file
    pub fn preview_changes<P: AsRef<Path>>(document: &Document, path: P) -> Result<WriteResult> {
        let options = WriteOptions {
            dry_run: true,
            ..Default::default()
        };
        FrontMatterWriter::new().write_file(document, path, Some(options))
    }
}
