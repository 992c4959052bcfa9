//! Reading repository files from disk
//!
//! The scanner itself never touches the filesystem. This module is the glue
//! the CLI uses to turn a directory into [`SourceFile`]s: it walks the tree
//! with `ignore` (so `.gitignore` rules apply), skips hidden entries, the
//! `.git` directory and files whose extension marks them as binary.

use ignore::WalkBuilder;
use std::fs;
use std::path::Path;

use crate::batch::SourceFile;
use crate::error::{Result, ScanError};

/// Extensions never worth decoding as text
const BINARY_EXTENSIONS: &[&str] = &[
    // Images
    ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff", ".ico", ".svg",
    // Audio/Video
    ".mp3", ".wav", ".mp4", ".avi", ".mov", ".flv", ".wmv",
    // Archives
    ".zip", ".tar", ".gz", ".rar", ".7z",
    // Documents
    ".pdf", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx",
    // Executables
    ".exe", ".dll", ".so", ".dylib",
    // Other
    ".bin", ".dat", ".db", ".sqlite", ".pyc", ".pyo",
];

/// Whether a path's extension marks it as binary
pub fn is_binary_path(path: &str) -> bool {
    let lower = path.to_lowercase();
    BINARY_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Collect every text candidate under `root`, sorted by relative path
///
/// Paths are relative to `root` and use `/` separators. Unreadable files
/// are skipped with a warning; decoding and size checks are left to
/// [`BatchScanner::scan_sources`](crate::batch::BatchScanner::scan_sources).
pub fn collect_sources(root: &Path) -> Result<Vec<SourceFile>> {
    if !root.is_dir() {
        return Err(ScanError::FileNotFound {
            path: root.display().to_string(),
        });
    }

    let mut builder = WalkBuilder::new(root);
    builder.hidden(true);
    builder.follow_links(false);
    builder.sort_by_file_name(|a, b| a.cmp(b));
    builder.filter_entry(|entry| entry.file_name() != ".git");

    let mut sources = Vec::new();

    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Walk error under {}: {}", root.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let Some(rel_path) = relative_path(root, entry.path()) else {
            continue;
        };
        if is_binary_path(&rel_path) {
            tracing::debug!("Skipping binary file: {}", rel_path);
            continue;
        }

        match fs::read(entry.path()) {
            Ok(bytes) => sources.push(SourceFile::new(rel_path, bytes)),
            Err(e) => tracing::warn!("Error reading file {}: {}", rel_path, e),
        }
    }

    tracing::debug!("Collected {} files under {}", sources.len(), root.display());
    Ok(sources)
}

fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<&str> = rel
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<_>>()?;
    Some(parts.join("/"))
}
