//! JavaScript and TypeScript function handler
//!
//! Recognises four shapes: `function name(...) {`, `const name = (...) => {`,
//! method shorthand `name(...) {`, and `class Name {` whose body is scanned
//! again for method shorthand (qualified as `Name.method`).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::detectors::common::{find_closing_brace, qualify, signature, Candidates};
use crate::error::ExtractError;
use crate::schema::FunctionRecord;

static FUNCTION_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"function\s+([a-zA-Z_$][a-zA-Z0-9_$]*)\s*\(([^)]*)\)\s*\{")
        .expect("valid function regex")
});

static ARROW_FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:const|let|var)\s+([a-zA-Z_$][a-zA-Z0-9_$]*)\s*=\s*(?:async\s*)?\(([^)]*)\)\s*=>\s*\{",
    )
    .expect("valid arrow regex")
});

static METHOD_SHORTHAND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:async\s+)?([a-zA-Z_$][a-zA-Z0-9_$]*)\s*\(([^)]*)\)\s*\{")
        .expect("valid method regex")
});

static CLASS_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"class\s+([a-zA-Z_$][a-zA-Z0-9_$]*)(?:\s*<[^>{]*>)?(?:\s+extends\s+[a-zA-Z0-9_$.]+(?:<[^>{]*>)?)?(?:\s+implements\s+[a-zA-Z0-9_$.,\s]+)?\s*\{",
    )
    .expect("valid class regex")
});

/// Keywords that look like `name(...) {` but open a block, not a method
const BLOCK_KEYWORDS: &[&str] = &[
    "if", "for", "while", "switch", "catch", "function", "return", "with", "else",
];

/// Extract functions from JavaScript/TypeScript source
pub fn extract(content: &str) -> Result<Vec<FunctionRecord>, ExtractError> {
    let mut candidates = Candidates::new(content);

    // Classes first so their methods are claimed with qualified names
    for class in CLASS_DECL.captures_iter(content) {
        let (Some(whole), Some(name)) = (class.get(0), class.get(1)) else {
            continue;
        };
        let body_start = whole.end();
        let Some(class_end) = find_closing_brace(content, body_start) else {
            continue;
        };
        extract_class_methods(&mut candidates, content, name.as_str(), body_start, class_end);
    }

    for caps in FUNCTION_DECL.captures_iter(content) {
        push_match(&mut candidates, &caps, 0, None);
    }

    for caps in ARROW_FUNCTION.captures_iter(content) {
        push_match(&mut candidates, &caps, 0, None);
    }

    for caps in METHOD_SHORTHAND.captures_iter(content) {
        if is_method_definition(content, &caps) {
            push_match(&mut candidates, &caps, 0, None);
        }
    }

    Ok(candidates.finish())
}

/// Scan one class body for method shorthand at the body's top level
fn extract_class_methods(
    candidates: &mut Candidates<'_>,
    content: &str,
    class_name: &str,
    body_start: usize,
    body_end: usize,
) {
    let body = &content[body_start..body_end];
    let mut cursor = 0usize;

    for caps in METHOD_SHORTHAND.captures_iter(body) {
        let Some(whole) = caps.get(0) else { continue };
        // Skip matches inside a method already taken from this class
        if whole.start() < cursor || !is_method_definition(body, &caps) {
            continue;
        }
        if push_match(candidates, &caps, body_start, Some(class_name)) {
            if let Some(end) = find_closing_brace(body, whole.end()) {
                cursor = end;
            }
        }
    }
}

/// Push a `name(params) {` match; `base` shifts offsets of a sub-slice match
fn push_match(
    candidates: &mut Candidates<'_>,
    caps: &regex::Captures<'_>,
    base: usize,
    owner: Option<&str>,
) -> bool {
    let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
        return false;
    };
    let params = caps.get(2).map(|m| m.as_str()).unwrap_or("");
    let open_brace = base + whole.end() - 1;

    candidates.push_braced(
        qualify(owner, name.as_str()),
        signature(name.as_str(), params),
        base + whole.start(),
        open_brace,
    )
}

/// Reject control-flow blocks and member calls that the shorthand pattern
/// also matches
fn is_method_definition(text: &str, caps: &regex::Captures<'_>) -> bool {
    let Some(name) = caps.get(1) else {
        return false;
    };
    if BLOCK_KEYWORDS.contains(&name.as_str()) {
        return false;
    }
    !text[..name.start()].ends_with('.')
}
