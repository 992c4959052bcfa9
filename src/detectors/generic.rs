//! Fallback function handler
//!
//! Used for languages without a dedicated handler and whenever a dedicated
//! handler fails. Three loose patterns cover keyword-introduced functions
//! (`function`, `func`, `def`, `fn`), modifier-prefixed methods and named
//! arrow functions. The body is the next balanced `{ ... }` after the match.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::detectors::common::{find_open_brace, signature, Candidates};
use crate::error::ExtractError;
use crate::schema::FunctionRecord;

static PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?:function|func|def|fn)\s+(\w+)\s*\(([^)]*)\)",
        r"(?:public|private|protected|static)?\s+(?:\w+\s+)*(\w+)\s*\(([^)]*)\)\s*\{",
        r"(?:const|let|var)\s+(\w+)\s*=\s*(?:async\s*)?\(([^)]*)\)\s*=>",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid generic function regex"))
    .collect()
});

/// Words the method pattern would otherwise take for a function name
const CONTROL_KEYWORDS: &[&str] = &["if", "for", "while", "switch", "catch", "return", "else"];

/// Extract functions with the fallback patterns
pub fn extract(content: &str) -> Result<Vec<FunctionRecord>, ExtractError> {
    let mut candidates = Candidates::new(content);

    for pattern in PATTERNS.iter() {
        for caps in pattern.captures_iter(content) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if CONTROL_KEYWORDS.contains(&name.as_str()) {
                continue;
            }

            let open_brace = if whole.as_str().ends_with('{') {
                whole.end() - 1
            } else {
                match find_open_brace(content, whole.end()) {
                    Some(pos) => pos,
                    None => continue,
                }
            };

            let params = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            // Leading whitespace belongs to the match, not the function
            let start = whole.start() + (whole.len() - whole.as_str().trim_start().len());

            candidates.push_braced(
                name.as_str().to_string(),
                signature(name.as_str(), params),
                start,
                open_brace,
            );
        }
    }

    Ok(candidates.finish())
}
