//! Documentation comment extraction
//!
//! One forward pass over a file's lines collects single-line comments and
//! delimited block comments (docstrings included) using a per-language
//! comment style table. Languages missing from the table get C-style
//! comments (`//`, `/* */`).

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::lang::normalized_key;
use crate::schema::{DocKind, DocumentationFragment};

// ============================================================================
// Comment Styles
// ============================================================================

/// Comment delimiters for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentStyle {
    /// Prefix of a one-line comment
    pub single: Option<&'static str>,
    /// Primary block start/end pair
    pub block: Option<(&'static str, &'static str)>,
    /// Second block syntax, e.g. `'''` next to `"""`
    pub alt_block: Option<(&'static str, &'static str)>,
}

impl CommentStyle {
    const fn new(
        single: Option<&'static str>,
        block: Option<(&'static str, &'static str)>,
        alt_block: Option<(&'static str, &'static str)>,
    ) -> Self {
        Self {
            single,
            block,
            alt_block,
        }
    }

    /// Block pairs in lookup order
    fn blocks(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        self.block.into_iter().chain(self.alt_block)
    }

    /// Offset of the earliest closing marker in `text`
    fn find_closer(&self, text: &str) -> Option<usize> {
        self.blocks().filter_map(|(_, end)| text.find(end)).min()
    }

    fn is_c_style(&self) -> bool {
        matches!(self.block, Some(("/*", _)))
    }
}

/// Style for languages absent from the table
pub const C_STYLE: CommentStyle = CommentStyle::new(Some("//"), Some(("/*", "*/")), None);

const HASH_ONLY: CommentStyle = CommentStyle::new(Some("#"), None, None);

static COMMENT_STYLES: Lazy<HashMap<&'static str, CommentStyle>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert(
        "python",
        CommentStyle::new(Some("#"), Some(("\"\"\"", "\"\"\"")), Some(("'''", "'''"))),
    );
    m.insert(
        "ruby",
        CommentStyle::new(Some("#"), Some(("=begin", "=end")), None),
    );
    m.insert(
        "perl",
        CommentStyle::new(Some("#"), Some(("=pod", "=cut")), None),
    );
    m.insert(
        "elixir",
        CommentStyle::new(Some("#"), Some(("\"\"\"", "\"\"\"")), None),
    );
    for key in ["shell", "bash", "zsh", "yaml", "toml", "r", "makefile", "dockerfile"] {
        m.insert(key, HASH_ONLY);
    }

    let markup = CommentStyle::new(None, Some(("<!--", "-->")), None);
    for key in ["html", "xml", "markdown", "vue", "vue.js", "svelte"] {
        m.insert(key, markup);
    }
    let stylesheet = CommentStyle::new(None, Some(("/*", "*/")), None);
    for key in ["css", "scss"] {
        m.insert(key, stylesheet);
    }

    m.insert(
        "sql",
        CommentStyle::new(Some("--"), Some(("/*", "*/")), None),
    );
    m.insert(
        "haskell",
        CommentStyle::new(Some("--"), Some(("{-", "-}")), None),
    );
    m.insert(
        "lua",
        CommentStyle::new(Some("--"), Some(("--[[", "]]")), None),
    );
    m.insert("ocaml", CommentStyle::new(None, Some(("(*", "*)")), None));
    m.insert(
        "f#",
        CommentStyle::new(Some("//"), Some(("(*", "*)")), None),
    );
    m.insert(
        "powershell",
        CommentStyle::new(Some("#"), Some(("<#", "#>")), None),
    );
    m.insert(
        "julia",
        CommentStyle::new(Some("#"), Some(("#=", "=#")), None),
    );
    m.insert("nim", CommentStyle::new(Some("#"), Some(("#[", "]#")), None));
    m.insert("erlang", CommentStyle::new(Some("%"), None, None));
    m.insert("latex", CommentStyle::new(Some("%"), None, None));
    m.insert("clojure", CommentStyle::new(Some(";"), None, None));
    m.insert("ini", CommentStyle::new(Some(";"), None, None));
    m.insert("visual", CommentStyle::new(Some("'"), None, None));

    m
});

/// Comment style for a language label
pub fn comment_style(language: &str) -> &'static CommentStyle {
    COMMENT_STYLES
        .get(normalized_key(language).as_str())
        .unwrap_or(&C_STYLE)
}

// ============================================================================
// Extraction
// ============================================================================

/// Collect documentation fragments in line order
pub fn extract_documentation(content: &str, language: &str) -> Vec<DocumentationFragment> {
    let style = comment_style(language);
    let mut fragments = Vec::new();
    let mut in_block = false;
    let mut block_lines: Vec<String> = Vec::new();
    let mut last_line = 0;

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        last_line = line_no;

        if in_block {
            match style.find_closer(raw) {
                Some(pos) => {
                    block_lines.push(block_text(style, &raw[..pos]));
                    fragments.push(multi(&block_lines, line_no));
                    block_lines.clear();
                    in_block = false;
                }
                None => block_lines.push(block_text(style, raw)),
            }
            continue;
        }

        let trimmed = raw.trim();

        if let Some((start, _)) = style.blocks().find(|(start, _)| trimmed.starts_with(start)) {
            let rest = &trimmed[start.len()..];
            match style.find_closer(rest) {
                Some(pos) => {
                    fragments.push(multi(&[block_text(style, &rest[..pos])], line_no));
                }
                None => {
                    block_lines.push(block_text(style, rest));
                    in_block = true;
                }
            }
            continue;
        }

        if let Some(marker) = style.single {
            if let Some(rest) = trimmed.strip_prefix(marker) {
                let text = rest.trim();
                if !text.is_empty() {
                    fragments.push(DocumentationFragment {
                        kind: DocKind::Single,
                        content: text.to_string(),
                        line: line_no,
                    });
                }
            }
        }
    }

    if in_block {
        tracing::debug!("Unterminated block comment, closing at line {}", last_line);
        fragments.push(multi(&block_lines, last_line));
    }

    fragments
}

/// One line of block text with C-style `*` decoration removed
fn block_text(style: &CommentStyle, text: &str) -> String {
    let text = text.trim();
    if style.is_c_style() {
        text.strip_prefix('*').unwrap_or(text).trim().to_string()
    } else {
        text.to_string()
    }
}

fn multi(lines: &[String], line: usize) -> DocumentationFragment {
    DocumentationFragment {
        kind: DocKind::Multi,
        content: lines.join("\n").trim().to_string(),
        line,
    }
}
