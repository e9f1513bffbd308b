//! Expanding command-line paths into the documents to process

use crate::error::{FlatMatterError, Result};
use log::warn;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Check if a path has a markdown extension
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "md" | "markdown"))
        .unwrap_or(false)
}

/// Resolve files and directories into a sorted, deduplicated file list.
///
/// Files are taken as given, whatever their extension. Directories are
/// walked recursively for markdown files.
pub fn resolve_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            collect_markdown(WalkDir::new(path), &mut files);
        } else {
            return Err(FlatMatterError::file_not_found(path));
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// Push every markdown file under `walker` onto `files`, returning the
/// number of entries that could not be read.
fn collect_markdown(walker: WalkDir, files: &mut Vec<PathBuf>) -> usize {
    let mut skipped = 0;
    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && is_markdown(entry.path()) {
                    files.push(entry.into_path());
                }
            }
            Err(err) => {
                let location = err
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "<unknown>".to_string());
                warn!("Skipping {}: {}", location, err);
                skipped += 1;
            }
        }
    }
    skipped
}
