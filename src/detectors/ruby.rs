//! Ruby method handler
//!
//! A method runs from `def` to the first `end` keyword after it. Nested
//! `if`/`do` blocks are not counted, so methods containing them are cut
//! short at the inner `end`. Like Java, the last `class` in the file
//! qualifies every method.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::detectors::common::{qualify, signature, Candidates};
use crate::error::ExtractError;
use crate::schema::FunctionRecord;

static CLASS_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"class\s+(\w+)").expect("valid class regex"));

static METHOD_DEF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"def\s+(\w+)(?:\(([^)]*)\))?").expect("valid def regex")
});

static END_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bend\b").expect("valid end regex"));

/// Extract methods from Ruby source
pub fn extract(content: &str) -> Result<Vec<FunctionRecord>, ExtractError> {
    let owner = CLASS_NAME
        .captures_iter(content)
        .last()
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str());
    let mut candidates = Candidates::new(content);

    for caps in METHOD_DEF.captures_iter(content) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let params = caps.get(2).map(|m| m.as_str()).unwrap_or("");

        let Some(end) = END_KEYWORD.find_at(content, whole.end()) else {
            tracing::debug!("No closing end for Ruby method {}", name.as_str());
            continue;
        };

        candidates.push_span(
            qualify(owner, name.as_str()),
            signature(name.as_str(), params),
            whole.start(),
            end.end(),
        );
    }

    Ok(candidates.finish())
}
