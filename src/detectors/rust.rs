//! Rust function handler
//!
//! Matches `fn` items with optional visibility, `async`, generics and a
//! return type. Trait method declarations ending in `;` have no body and are
//! skipped.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::detectors::common::{signature, Candidates};
use crate::error::ExtractError;
use crate::schema::FunctionRecord;

static FN_ITEM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:pub(?:\([^)]*\))?\s+)?(?:async\s+)?(?:unsafe\s+)?fn\s+(\w+)\s*(?:<[^(]*>)?\s*\(([^)]*)\)(?:\[[^\]]*\]|[^{;\[])*",
    )
    .expect("valid fn regex")
});

/// Extract functions from Rust source
pub fn extract(content: &str) -> Result<Vec<FunctionRecord>, ExtractError> {
    let mut candidates = Candidates::new(content);

    for caps in FN_ITEM.captures_iter(content) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        // The tail stops at the body or at the end of a declaration; `;` inside
        // `[T; N]` types is skipped
        let open_brace = whole.end();
        if !content[open_brace..].starts_with('{') {
            continue;
        }
        let params = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        candidates.push_braced(
            name.as_str().to_string(),
            signature(name.as_str(), params),
            whole.start(),
            open_brace,
        );
    }

    Ok(candidates.finish())
}
