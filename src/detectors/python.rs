//! Python function handler
//!
//! Python is the one family parsed with a real grammar. Every
//! `function_definition` in the tree is reported in source order; those
//! declared directly in a class body are named `Class.method`, nested
//! functions keep their bare name. The docstring becomes the description.
//!
//! A tree containing error nodes is reported as a syntax error so the
//! dispatcher can fall back to the generic handler.

use tree_sitter::{Node, Parser, Tree};

use crate::detectors::common::{node_text, qualify, visit_all};
use crate::error::ExtractError;
use crate::schema::FunctionRecord;

const LANGUAGE_NAME: &str = "Python";

/// Extract functions and methods from Python source
pub fn extract(content: &str) -> Result<Vec<FunctionRecord>, ExtractError> {
    let tree = parse(content)?;
    let root = tree.root_node();

    if root.has_error() {
        return Err(ExtractError::Syntax {
            language: LANGUAGE_NAME.to_string(),
            message: format!("invalid syntax near line {}", first_error_line(&root)),
        });
    }

    let lines: Vec<&str> = content.split('\n').collect();
    let mut records = Vec::new();

    visit_all(&root, |node| {
        if node.kind() == "function_definition" {
            if let Some(record) = function_record(node, content, &lines) {
                records.push(record);
            }
        }
    });

    Ok(records)
}

fn parse(content: &str) -> Result<Tree, ExtractError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| ExtractError::Parser {
            message: format!("Failed to set language: {}", e),
        })?;
    parser.parse(content, None).ok_or_else(|| ExtractError::Parser {
        message: "parser returned no tree".to_string(),
    })
}

fn first_error_line(root: &Node) -> usize {
    let mut line = None;
    visit_all(root, |node| {
        if line.is_none() && (node.is_error() || node.is_missing()) {
            line = Some(node.start_position().row + 1);
        }
    });
    line.unwrap_or(1)
}

// ============================================================================
// Records
// ============================================================================

fn function_record(node: &Node, source: &str, lines: &[&str]) -> Option<FunctionRecord> {
    let name = node_text(&node.child_by_field_name("name")?, source);
    let params = node
        .child_by_field_name("parameters")
        .map(|p| positional_parameters(&p, source))
        .unwrap_or_default();

    let start_line = node.start_position().row + 1;
    let end = node.end_position();
    // A node ending at column 0 ends on the previous line
    let end_line = (if end.column == 0 { end.row } else { end.row + 1 }).max(start_line);

    let code = lines
        .get(start_line - 1..end_line.min(lines.len()))
        .map(|slice| slice.join("\n"))
        .unwrap_or_default();

    Some(FunctionRecord {
        name: qualify(enclosing_class(node, source), name),
        signature: format!("def {}({})", name, params.join(", ")),
        description: docstring(node, source).unwrap_or_default(),
        start_line,
        end_line,
        code,
    })
}

/// Name of the class whose body directly contains this definition
fn enclosing_class<'a>(node: &Node, source: &'a str) -> Option<&'a str> {
    let mut parent = node.parent()?;
    if parent.kind() == "decorated_definition" {
        parent = parent.parent()?;
    }
    if parent.kind() != "block" {
        return None;
    }
    let class = parent.parent()?;
    if class.kind() != "class_definition" {
        return None;
    }
    class
        .child_by_field_name("name")
        .map(|n| node_text(&n, source))
}

/// Plain and positional-only parameter names plus `**kwargs`
///
/// `*args` and keyword-only parameters after it (or after a bare `*`) are
/// left out.
fn positional_parameters(params: &Node, source: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut keyword_only = false;
    let mut cursor = params.walk();

    for param in params.named_children(&mut cursor) {
        match param.kind() {
            "identifier" if !keyword_only => names.push(node_text(&param, source).to_string()),
            "default_parameter" | "typed_default_parameter" if !keyword_only => {
                if let Some(name) = param.child_by_field_name("name") {
                    names.push(node_text(&name, source).to_string());
                }
            }
            "typed_parameter" => match param.named_child(0) {
                Some(inner) if inner.kind() == "identifier" && !keyword_only => {
                    names.push(node_text(&inner, source).to_string());
                }
                Some(inner) if inner.kind() == "list_splat_pattern" => keyword_only = true,
                Some(inner) if inner.kind() == "dictionary_splat_pattern" => {
                    names.push(node_text(&inner, source).to_string());
                }
                _ => {}
            },
            "list_splat_pattern" | "keyword_separator" => keyword_only = true,
            "dictionary_splat_pattern" => names.push(node_text(&param, source).to_string()),
            _ => {}
        }
    }

    names
}

// ============================================================================
// Docstrings
// ============================================================================

fn docstring(node: &Node, source: &str) -> Option<String> {
    let body = node.child_by_field_name("body")?;
    let mut cursor = body.walk();
    let first = body
        .named_children(&mut cursor)
        .find(|child| child.kind() != "comment")?;

    if first.kind() != "expression_statement" {
        return None;
    }
    let literal = first.named_child(0)?;
    if literal.kind() != "string" {
        return None;
    }

    Some(clean_docstring(string_value(node_text(&literal, source))))
}

/// Strip prefix letters and quotes from a string literal
fn string_value(literal: &str) -> &str {
    let unprefixed = literal.trim_start_matches(|c: char| c.is_ascii_alphabetic());
    for quote in ["\"\"\"", "'''", "\"", "'"] {
        if let Some(inner) = unprefixed
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    unprefixed
}

/// Normalize docstring indentation
///
/// The first line loses its leading whitespace, the rest lose their common
/// indentation, and blank lines at either end are dropped.
pub fn clean_docstring(doc: &str) -> String {
    let expanded = expand_tabs(doc);
    let lines: Vec<&str> = expanded.split('\n').collect();

    let margin = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim_start().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    let mut cleaned: Vec<String> = Vec::with_capacity(lines.len());
    if let Some(first) = lines.first() {
        cleaned.push(first.trim_start().to_string());
    }
    for line in lines.iter().skip(1) {
        cleaned.push(line.get(margin..).unwrap_or("").to_string());
    }

    while cleaned.last().is_some_and(|l| l.is_empty()) {
        cleaned.pop();
    }
    let leading = cleaned.iter().take_while(|l| l.is_empty()).count();
    cleaned.drain(..leading);

    cleaned.join("\n")
}

fn expand_tabs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for ch in text.chars() {
        match ch {
            '\t' => {
                let pad = 8 - column % 8;
                out.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(ch);
                column = 0;
            }
            _ => {
                out.push(ch);
                column += 1;
            }
        }
    }
    out
}
