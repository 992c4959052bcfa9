//! repomind-scanner: multi-language static code scanner
//!
//! This library turns a file's path and text into a structured record:
//! the detected language, the functions and methods it defines (with line
//! ranges and source), and its documentation comments. It approximates
//! parsing for many grammars with brace and keyword matching, uses
//! tree-sitter for Python, and degrades gracefully on malformed input.
//!
//! # Supported Languages
//!
//! - Python (grammar-based, with docstrings)
//! - JavaScript, TypeScript, JSX, TSX
//! - C, C++
//! - Java
//! - Ruby
//! - Go
//! - Rust
//! - Everything else through a generic fallback
//!
//! # Example
//!
//! ```
//! use repomind_scanner::scan_file;
//!
//! let record = scan_file("math.js", "function add(a, b) { return a + b; }");
//! assert_eq!(record.language, "JavaScript");
//! assert_eq!(record.functions[0].name, "add");
//! ```

pub mod batch;
pub mod cli;
pub mod config;
pub mod detectors;
pub mod docs;
pub mod error;
pub mod extract;
pub mod lang;
pub mod schema;
pub mod source;

// Re-export commonly used types
pub use batch::{scan_batch, BatchScanner, ScanSink, SourceFile};
pub use cli::{Cli, OutputFormat};
pub use config::ScannerConfig;
pub use detectors::common::find_closing_brace;
pub use detectors::extract_functions;
pub use docs::extract_documentation;
pub use error::{ExtractError, Result, ScanError};
pub use extract::scan_file;
pub use lang::{LangFamily, LanguageDetector, UNKNOWN_LANGUAGE};
pub use schema::{
    DocKind, DocumentationFragment, FileFunctionCount, FileRecord, FunctionRecord, RepoMetrics,
};
pub use source::collect_sources;
