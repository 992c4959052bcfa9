//! Java method handler
//!
//! Methods are qualified with the name of the last `class` declared in the
//! file, which is exact for the common one-class-per-file layout.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::detectors::common::{qualify, signature, Candidates};
use crate::error::ExtractError;
use crate::schema::FunctionRecord;

static CLASS_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"class\s+(\w+)").expect("valid class regex"));

static METHOD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:public|private|protected|static|\s) +(?:[\w<>\[\]]+\s+)+(\w+) *\(([^\)]*)\) *(?:throws [^{]+)? *\{",
    )
    .expect("valid method regex")
});

/// Extract methods from Java source
pub fn extract(content: &str) -> Result<Vec<FunctionRecord>, ExtractError> {
    let owner = CLASS_NAME
        .captures_iter(content)
        .last()
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str());

    let mut candidates = Candidates::new(content);

    for caps in METHOD.captures_iter(content) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let params = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        // The leading modifier alternative may consume a newline
        let start = whole.start() + leading_whitespace(whole.as_str());

        candidates.push_braced(
            qualify(owner, name.as_str()),
            signature(name.as_str(), params),
            start,
            whole.end() - 1,
        );
    }

    Ok(candidates.finish())
}

fn leading_whitespace(text: &str) -> usize {
    text.len() - text.trim_start().len()
}
