//! Scan record data structures
//!
//! These are the structures handed to callers after a scan. They serialize
//! with serde so the persistence and summarization layers can store them
//! as-is.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One function or method found in a file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    /// Qualified name: `Class.method` inside a class construct, else bare
    pub name: String,

    /// Name plus raw parameter list text
    pub signature: String,

    /// Docstring text (Python only; empty otherwise)
    #[serde(default)]
    pub description: String,

    /// Start line (1-indexed)
    pub start_line: usize,

    /// End line (1-indexed, inclusive)
    pub end_line: usize,

    /// Raw source text of the function
    pub code: String,
}

impl FunctionRecord {
    /// Number of source lines covered by this record
    pub fn line_span(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}

/// Kind of documentation fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocKind {
    /// One-line prefixed comment (`//`, `#`, `--`)
    Single,
    /// Delimited block comment or docstring
    Multi,
}

impl DocKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multi => "multi",
        }
    }
}

/// A comment found in a file, markers stripped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentationFragment {
    #[serde(rename = "type")]
    pub kind: DocKind,

    pub content: String,

    /// Line where the fragment was detected (end line for blocks)
    pub line: usize,
}

/// Structured result of scanning one file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Repository-relative path
    pub path: String,

    /// Detected language label (`"Unknown"` when unresolved)
    pub language: String,

    /// Raw file content
    pub content: String,

    /// Size of the UTF-8 encoded content in bytes
    pub size_bytes: usize,

    /// Newline-delimited line count
    pub line_count: usize,

    #[serde(default)]
    pub functions: Vec<FunctionRecord>,

    #[serde(default)]
    pub documentation: Vec<DocumentationFragment>,

    /// Natural-language summary, attached by an external summarizer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Failure detail for degraded records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileRecord {
    /// Attach an externally generated summary
    pub fn attach_summary(&mut self, summary: impl Into<String>) {
        self.summary = Some(summary.into());
    }

    /// Whether this record was produced by the failure path
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

/// Count lines the way records report them: newlines + 1, zero for empty text
pub fn count_lines(content: &str) -> usize {
    if content.is_empty() {
        0
    } else {
        content.bytes().filter(|b| *b == b'\n').count() + 1
    }
}

/// Number of entries kept in `RepoMetrics::top_files`
pub const TOP_FILES_LIMIT: usize = 10;

/// A file ranked by how many functions it defines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFunctionCount {
    pub path: String,
    pub function_count: usize,
}

/// Aggregate figures over a set of scanned files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoMetrics {
    pub file_count: usize,
    pub function_count: usize,
    pub documentation_count: usize,
    pub total_lines: usize,
    pub total_bytes: usize,
    /// Files that took the degraded path
    pub failed_count: usize,
    /// Language label -> number of files
    pub languages: BTreeMap<String, usize>,
    /// Files with the most functions, most first; files without any are left out
    #[serde(default)]
    pub top_files: Vec<FileFunctionCount>,
}

impl RepoMetrics {
    /// Compute metrics from scan results
    pub fn from_records(records: &[FileRecord]) -> Self {
        let mut metrics = Self {
            file_count: records.len(),
            ..Default::default()
        };

        for record in records {
            metrics.function_count += record.functions.len();
            metrics.documentation_count += record.documentation.len();
            metrics.total_lines += record.line_count;
            metrics.total_bytes += record.size_bytes;
            if record.is_degraded() {
                metrics.failed_count += 1;
            }
            *metrics
                .languages
                .entry(record.language.clone())
                .or_insert(0) += 1;
        }

        let mut ranked: Vec<FileFunctionCount> = records
            .iter()
            .filter(|r| !r.functions.is_empty())
            .map(|r| FileFunctionCount {
                path: r.path.clone(),
                function_count: r.functions.len(),
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.function_count
                .cmp(&a.function_count)
                .then_with(|| a.path.cmp(&b.path))
        });
        ranked.truncate(TOP_FILES_LIMIT);
        metrics.top_files = ranked;

        metrics
    }

    /// Languages ordered by file count, most common first
    pub fn top_languages(&self) -> Vec<(&str, usize)> {
        let mut langs: Vec<(&str, usize)> = self
            .languages
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        langs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        langs
    }
}
