//! Common utilities shared across all function handlers
//!
//! Brace matching, offset-to-line conversion and the candidate collector
//! that turns regex matches into `FunctionRecord`s.

use std::collections::HashSet;

use tree_sitter::Node;

use crate::schema::FunctionRecord;

// ============================================================================
// Brace Matching
// ============================================================================

/// Find the brace closing an already-consumed opening brace
///
/// `start` is the offset just past the opening `{`; depth starts at 1.
/// Returns the offset immediately after the `}` that brings depth to 0, or
/// `None` if the text ends first. Braces inside strings and comments are
/// counted like any other.
pub fn find_closing_brace(content: &str, start: usize) -> Option<usize> {
    let bytes = content.as_bytes();
    let mut depth = 1usize;

    for (pos, byte) in bytes.iter().enumerate().skip(start) {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(pos + 1);
                }
            }
            _ => {}
        }
    }

    None
}

/// Offset of the first `{` at or after `from`
pub fn find_open_brace(content: &str, from: usize) -> Option<usize> {
    content.get(from..)?.find('{').map(|i| from + i)
}

// ============================================================================
// Line Numbers
// ============================================================================

/// 1-based line number of a byte offset (newlines before it, plus one)
pub fn line_at(content: &str, offset: usize) -> usize {
    let end = offset.min(content.len());
    content.as_bytes()[..end]
        .iter()
        .filter(|b| **b == b'\n')
        .count()
        + 1
}

// ============================================================================
// AST Traversal
// ============================================================================

/// Get text content of a node
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

/// Visit every node in preorder (iterative to avoid stack overflow)
pub fn visit_all<F>(node: &Node, mut visitor: F)
where
    F: FnMut(&Node),
{
    let mut cursor = node.walk();
    let mut did_visit_children = false;

    loop {
        if !did_visit_children {
            visitor(&cursor.node());
            if cursor.goto_first_child() {
                continue;
            }
        }

        if cursor.goto_next_sibling() {
            did_visit_children = false;
            continue;
        }

        if !cursor.goto_parent() {
            break;
        }
        did_visit_children = true;
    }
}

// ============================================================================
// Candidate Collection
// ============================================================================

/// Accumulates function candidates found by regex handlers
///
/// A body is identified by the offset of its opening brace. Once a body has
/// been claimed, later candidates pointing at the same brace are dropped so
/// overlapping patterns never report one function twice.
pub struct Candidates<'a> {
    content: &'a str,
    claimed: HashSet<usize>,
    found: Vec<(usize, FunctionRecord)>,
}

impl<'a> Candidates<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            claimed: HashSet::new(),
            found: Vec::new(),
        }
    }

    /// Whether a body starting at this brace offset is already recorded
    pub fn is_claimed(&self, open_brace: usize) -> bool {
        self.claimed.contains(&open_brace)
    }

    /// Record a brace-delimited function
    ///
    /// `start` is where the signature begins and `open_brace` the offset of
    /// the body's `{`. Returns false when the body is unterminated or was
    /// already claimed.
    pub fn push_braced(
        &mut self,
        name: String,
        signature: String,
        start: usize,
        open_brace: usize,
    ) -> bool {
        if self.is_claimed(open_brace) {
            return false;
        }
        let Some(end) = find_closing_brace(self.content, open_brace + 1) else {
            tracing::debug!("Unterminated body for {} at offset {}", name, start);
            return false;
        };
        self.claimed.insert(open_brace);
        self.push_span(name, signature, start, end);
        true
    }

    /// Record a function covering `start..end`
    pub fn push_span(&mut self, name: String, signature: String, start: usize, end: usize) {
        let record = FunctionRecord {
            name,
            signature,
            description: String::new(),
            start_line: line_at(self.content, start),
            end_line: line_at(self.content, end),
            code: self.content[start..end].to_string(),
        };
        self.found.push((start, record));
    }

    /// Records in source order
    pub fn finish(mut self) -> Vec<FunctionRecord> {
        self.found.sort_by_key(|(start, _)| *start);
        self.found.into_iter().map(|(_, record)| record).collect()
    }
}

/// Join a name and raw parameter text into a signature
pub fn signature(name: &str, params: &str) -> String {
    format!("{}({})", name, params)
}

/// Qualify a member name with its enclosing type, if any
pub fn qualify(owner: Option<&str>, name: &str) -> String {
    match owner {
        Some(owner) => format!("{}.{}", owner, name),
        None => name.to_string(),
    }
}
