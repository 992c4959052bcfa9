//! Go function handler
//!
//! Matches `func name(params) result {` with an optional method receiver.
//! Methods keep their bare name; the receiver type is not folded in.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::detectors::common::{signature, Candidates};
use crate::error::ExtractError;
use crate::schema::FunctionRecord;

static FUNC_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"func\s+(?:\([^)]*\)\s*)?(\w+)\s*\(([^)]*)\)\s*(?:\([^)]*\)|[\w\.\*\[\]]+)?\s*\{",
    )
    .expect("valid func regex")
});

/// Extract functions and methods from Go source
pub fn extract(content: &str) -> Result<Vec<FunctionRecord>, ExtractError> {
    let mut candidates = Candidates::new(content);

    for caps in FUNC_DECL.captures_iter(content) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let params = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        candidates.push_braced(
            name.as_str().to_string(),
            signature(name.as_str(), params),
            whole.start(),
            whole.end() - 1,
        );
    }

    Ok(candidates.finish())
}
