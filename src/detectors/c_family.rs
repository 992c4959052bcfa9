//! C and C++ function handler
//!
//! A single pattern matches a return-type-prefixed declarator, the parameter
//! list, optional trailing qualifiers, and the body. The body is matched by
//! an inline balanced-brace sub-pattern that tolerates two nested levels;
//! deeper nesting inside a body stops the match from reaching the real end.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::detectors::common::{signature, Candidates};
use crate::error::ExtractError;
use crate::schema::FunctionRecord;

static C_FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?:[\w:]+\s+)+(\w+)\s*\(([^)]*)\)",
        r"\s*(?:const)?\s*(?:override)?\s*(?:final)?",
        r"\s*(?:=\s*(?:default|delete|0))?\s*(?:noexcept)?",
        r"\s*\{(?:[^{}]|\{(?:[^{}]|\{[^{}]*\})*\})*\}",
    ))
    .expect("valid C/C++ function regex")
});

/// Extract functions from C/C++ source
pub fn extract(content: &str) -> Result<Vec<FunctionRecord>, ExtractError> {
    let mut candidates = Candidates::new(content);

    for caps in C_FUNCTION.captures_iter(content) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let params = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        candidates.push_span(
            name.as_str().to_string(),
            signature(name.as_str(), params),
            whole.start(),
            whole.end(),
        );
    }

    Ok(candidates.finish())
}
