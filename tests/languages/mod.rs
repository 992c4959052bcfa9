//! Language-specific integration tests for repomind-scanner
//!
//! Tests function extraction and documentation extraction for every
//! handler family, organized by language family.
//!
//! ## Test Categories per Language
//!
//! 1. **Function Extraction** - names, signatures, line ranges
//! 2. **Qualification** - `Class.method` where the handler supports it
//! 3. **Documentation** - comment and docstring fragments
//! 4. **Edge Cases** - malformed input, documented heuristic limits

pub mod jvm_family;
pub mod markup_family;
pub mod scripting_family;
