//! Language-specific function handlers
//!
//! Each handler turns one file's text into `FunctionRecord`s for its
//! language family. Handlers return `Err` only when they cannot make sense
//! of the input at all; [`extract_functions`] then retries with the generic
//! handler so callers always get a list.
//!
//! # Supported Languages
//!
//! - `python`: Python (tree-sitter grammar, docstrings, `Class.method` names)
//! - `javascript`: JS, TS, JSX, TSX
//! - `c_family`: C, C++
//! - `java`: Java
//! - `ruby`: Ruby
//! - `go`: Go
//! - `rust`: Rust
//! - `generic`: everything else, and the fallback for the above
//!
//! # Adding a New Language
//!
//! 1. Add the extension mapping in `lang.rs`
//! 2. Add a `LangFamily` variant and its label mapping
//! 3. Add a handler module here and a dispatch arm in [`extract_with_family`]

pub mod c_family;
pub mod common;
pub mod generic;
pub mod go;
pub mod java;
pub mod javascript;
pub mod python;
pub mod ruby;
pub mod rust;

use crate::error::ExtractError;
use crate::lang::LangFamily;
use crate::schema::FunctionRecord;

/// Extract functions from a file's content
///
/// `language` is a detected language label (e.g. `"TypeScript (React)"`);
/// `path` is only used in log messages. Never fails: a handler error is
/// logged and the generic handler's result is returned instead.
pub fn extract_functions(content: &str, language: &str, path: &str) -> Vec<FunctionRecord> {
    let family = LangFamily::from_label(language);

    match extract_with_family(content, family) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(
                "{} handler failed for {}: {}; using generic extraction",
                family.name(),
                path,
                e
            );
            generic::extract(content).unwrap_or_else(|e| {
                tracing::warn!("Generic extraction failed for {}: {}", path, e);
                Vec::new()
            })
        }
    }
}

/// Run the handler for one family without fallback
pub fn extract_with_family(
    content: &str,
    family: LangFamily,
) -> Result<Vec<FunctionRecord>, ExtractError> {
    match family {
        LangFamily::Python => python::extract(content),
        LangFamily::JavaScript => javascript::extract(content),
        LangFamily::CFamily => c_family::extract(content),
        LangFamily::Java => java::extract(content),
        LangFamily::Ruby => ruby::extract(content),
        LangFamily::Go => go::extract(content),
        LangFamily::Rust => rust::extract(content),
        LangFamily::Generic => generic::extract(content),
    }
}
