//! Language detection and handler-family dispatch keys
//!
//! Detection never fails: every path maps to some label, with `"Unknown"` as
//! the sentinel when neither the extension, the content signatures nor the
//! conventional filenames resolve it.

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

/// Label returned when a file cannot be classified
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Extension (lower-case, with leading dot) to language label
static EXTENSION_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Web
        (".html", "HTML"),
        (".htm", "HTML"),
        (".xhtml", "HTML"),
        (".css", "CSS"),
        (".scss", "SCSS"),
        (".sass", "Sass"),
        (".less", "Less"),
        (".js", "JavaScript"),
        (".jsx", "JavaScript (React)"),
        (".ts", "TypeScript"),
        (".tsx", "TypeScript (React)"),
        (".vue", "Vue.js"),
        (".svelte", "Svelte"),
        // Python
        (".py", "Python"),
        (".pyx", "Cython"),
        (".ipynb", "Jupyter Notebook"),
        // Java/JVM
        (".java", "Java"),
        (".class", "Java bytecode"),
        (".kt", "Kotlin"),
        (".kts", "Kotlin Script"),
        (".scala", "Scala"),
        (".groovy", "Groovy"),
        (".clj", "Clojure"),
        // C family
        (".c", "C"),
        (".h", "C header"),
        (".cpp", "C++"),
        (".cc", "C++"),
        (".cxx", "C++"),
        (".hpp", "C++ header"),
        (".hxx", "C++ header"),
        (".cs", "C#"),
        (".vb", "Visual Basic"),
        // Systems
        (".go", "Go"),
        (".rs", "Rust"),
        (".swift", "Swift"),
        (".d", "D"),
        // Scripting
        (".rb", "Ruby"),
        (".rbw", "Ruby"),
        (".php", "PHP"),
        (".pl", "Perl"),
        (".pm", "Perl module"),
        (".t", "Perl test"),
        (".sh", "Shell script"),
        (".bash", "Bash script"),
        (".zsh", "Zsh script"),
        (".ps1", "PowerShell"),
        (".lua", "Lua"),
        // Functional
        (".hs", "Haskell"),
        (".lhs", "Literate Haskell"),
        (".ml", "OCaml"),
        (".mli", "OCaml interface"),
        (".fs", "F#"),
        (".fsi", "F# interface"),
        (".fsx", "F# script"),
        (".elm", "Elm"),
        (".erl", "Erlang"),
        (".ex", "Elixir"),
        (".exs", "Elixir script"),
        // Data/Config
        (".json", "JSON"),
        (".yaml", "YAML"),
        (".yml", "YAML"),
        (".xml", "XML"),
        (".toml", "TOML"),
        (".ini", "INI"),
        (".csv", "CSV"),
        (".tsv", "TSV"),
        (".sql", "SQL"),
        // Documentation
        (".md", "Markdown"),
        (".rst", "reStructuredText"),
        (".tex", "LaTeX"),
        // Other
        (".r", "R"),
        (".dart", "Dart"),
        (".jl", "Julia"),
        (".nim", "Nim"),
        (".zig", "Zig"),
        (".v", "V"),
        (".crystal", "Crystal"),
    ])
});

/// Content signatures for files without a known extension.
///
/// Order is a priority list: the first matching signature wins.
static CONTENT_SIGNATURES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?m)^\s*<\?php", "PHP"),
        (r"(?m)^\s*<\?=", "PHP"),
        (r"(?m)^\s*#!/usr/bin/env\s+python", "Python"),
        (r"(?m)^\s*#!/usr/bin/python", "Python"),
        (r"(?m)^\s*#!/bin/bash", "Bash script"),
        (r"(?m)^\s*#!/bin/sh", "Shell script"),
        (r"(?m)^\s*#!/usr/bin/env\s+node", "JavaScript"),
        (r"(?m)^\s*#!/usr/bin/env\s+ruby", "Ruby"),
        (r"(?m)^\s*#!/usr/bin/ruby", "Ruby"),
        (r"(?m)^\s*#!/usr/bin/env\s+perl", "Perl"),
        (r"(?m)^\s*#!/usr/bin/perl", "Perl"),
        (r"(?m)^\s*import\s+React", "JavaScript (React)"),
        (r"(?m)^\s*package\s+main", "Go"),
        (r"(?m)^\s*using\s+System;", "C#"),
    ]
    .into_iter()
    .map(|(pattern, label)| (Regex::new(pattern).expect("valid signature regex"), label))
    .collect()
});

/// Language detector over extension, content signature and filename tables
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageDetector;

impl LanguageDetector {
    /// Detect the language label of a file
    ///
    /// Priority: extension table, then content signatures (when content is
    /// given), then conventional filenames, then `"Unknown"`.
    pub fn detect(path: &str, content: Option<&str>) -> String {
        if let Some(label) = Self::from_extension_of(path) {
            return label.to_string();
        }

        if let Some(label) = content.filter(|c| !c.is_empty()).and_then(Self::from_content) {
            return label.to_string();
        }

        Self::from_filename(path)
            .unwrap_or(UNKNOWN_LANGUAGE)
            .to_string()
    }

    /// Look up the label for a path's extension
    pub fn from_extension_of(path: &str) -> Option<&'static str> {
        let ext = Path::new(path).extension()?.to_str()?.to_lowercase();
        Self::from_extension(&ext)
    }

    /// Look up the label for a bare extension (with or without leading dot)
    pub fn from_extension(ext: &str) -> Option<&'static str> {
        let ext = ext.to_lowercase();
        let key = if ext.starts_with('.') {
            ext
        } else {
            format!(".{}", ext)
        };
        EXTENSION_MAP.get(key.as_str()).copied()
    }

    /// Match content against the ordered signature list
    pub fn from_content(content: &str) -> Option<&'static str> {
        CONTENT_SIGNATURES
            .iter()
            .find(|(re, _)| re.is_match(content))
            .map(|(_, label)| *label)
    }

    /// Conventional extension-less (or build-manifest) filenames
    pub fn from_filename(path: &str) -> Option<&'static str> {
        let name = Path::new(path).file_name()?.to_str()?.to_lowercase();

        let label = match name.as_str() {
            "makefile" => "Makefile",
            n if n.starts_with("makefile.") => "Makefile",
            "dockerfile" => "Dockerfile",
            n if n.starts_with("dockerfile.") => "Dockerfile",
            "vagrantfile" => "Ruby (Vagrant)",
            "jenkinsfile" => "Groovy (Jenkins)",
            "package.json" | "package-lock.json" => "JSON (npm)",
            "gemfile" => "Ruby (Bundler)",
            "rakefile" => "Ruby (Rake)",
            "requirements.txt" | "setup.py" => "Python (Package)",
            "cargo.toml" | "cargo.lock" => "TOML (Rust)",
            _ => return None,
        };
        Some(label)
    }

    /// Number of entries in the extension table
    pub fn extension_count() -> usize {
        EXTENSION_MAP.len()
    }
}

/// Coarse dispatch key for a language label
///
/// Lower-cased first whitespace-delimited token, cut at the first `(`, so
/// `"JavaScript (React)"` and `"JavaScript"` share the key `"javascript"`.
pub fn normalized_key(label: &str) -> String {
    label
        .to_lowercase()
        .split_whitespace()
        .next()
        .unwrap_or("")
        .split('(')
        .next()
        .unwrap_or("")
        .to_string()
}

/// Handler families for function extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LangFamily {
    /// Python (grammar-based)
    Python,
    /// JavaScript, TypeScript and their React variants
    JavaScript,
    /// C and C++
    CFamily,
    /// Java
    Java,
    /// Ruby
    Ruby,
    /// Go
    Go,
    /// Rust
    Rust,
    /// Everything else
    Generic,
}

impl LangFamily {
    /// Resolve the handler family for a language label
    pub fn from_label(label: &str) -> Self {
        match normalized_key(label).as_str() {
            "python" => Self::Python,
            "javascript" | "typescript" => Self::JavaScript,
            "c" | "c++" | "cpp" => Self::CFamily,
            "java" => Self::Java,
            "ruby" | "rb" => Self::Ruby,
            "go" => Self::Go,
            "rust" => Self::Rust,
            _ => Self::Generic,
        }
    }

    /// Get the canonical name of the language family
    pub fn name(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::CFamily => "c_family",
            Self::Java => "java",
            Self::Ruby => "ruby",
            Self::Go => "go",
            Self::Rust => "rust",
            Self::Generic => "generic",
        }
    }
}
