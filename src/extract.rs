//! Single-file scan orchestration
//!
//! This module coordinates language detection, function extraction and
//! documentation extraction for one file and assembles the `FileRecord`.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::detectors::extract_functions;
use crate::docs::extract_documentation;
use crate::lang::{LanguageDetector, UNKNOWN_LANGUAGE};
use crate::schema::{count_lines, FileRecord};

/// Scan one file's content into a `FileRecord`
///
/// This is the main entry point for per-file scanning. It never fails: if
/// anything inside the extractors panics, a degraded record is returned
/// with `language = "Unknown"`, empty function and documentation lists, and
/// `error` set. Size and line count are always computed.
pub fn scan_file(path: &str, content: &str) -> FileRecord {
    let size_bytes = content.len();
    let line_count = count_lines(content);

    let scanned = catch_unwind(AssertUnwindSafe(|| {
        let language = LanguageDetector::detect(path, Some(content));
        let functions = extract_functions(content, &language, path);
        let documentation = extract_documentation(content, &language);
        (language, functions, documentation)
    }));

    match scanned {
        Ok((language, functions, documentation)) => {
            tracing::debug!(
                "Scanned {} as {}: {} functions, {} doc fragments",
                path,
                language,
                functions.len(),
                documentation.len()
            );
            FileRecord {
                path: path.to_string(),
                language,
                content: content.to_string(),
                size_bytes,
                line_count,
                functions,
                documentation,
                summary: None,
                error: None,
            }
        }
        Err(panic) => {
            let message = panic_message(panic.as_ref());
            tracing::error!("Error scanning file {}: {}", path, message);
            degraded_record(path, content, message)
        }
    }
}

/// Record for a file whose scan failed
pub fn degraded_record(path: &str, content: &str, error: impl Into<String>) -> FileRecord {
    FileRecord {
        path: path.to_string(),
        language: UNKNOWN_LANGUAGE.to_string(),
        content: content.to_string(),
        size_bytes: content.len(),
        line_count: count_lines(content),
        functions: Vec::new(),
        documentation: Vec::new(),
        summary: None,
        error: Some(error.into()),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "internal error while scanning".to_string()
    }
}
