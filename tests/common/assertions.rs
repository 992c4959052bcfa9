//! Custom assertions for integration tests
//!
//! Helpers for validating the JSON report and the records it contains.

use serde_json::Value;

use repomind_scanner::{FileRecord, FunctionRecord};

/// Assert that output is valid JSON and return parsed value
pub fn assert_valid_json(output: &str, context: &str) -> Value {
    serde_json::from_str(output).unwrap_or_else(|e| {
        panic!(
            "Expected valid JSON ({}): {}\nOutput:\n{}",
            context, e, output
        )
    })
}

/// Find a file entry in a JSON scan report
pub fn find_file<'a>(json: &'a Value, path: &str) -> &'a Value {
    json["files"]
        .as_array()
        .and_then(|files| files.iter().find(|f| f["path"] == path))
        .unwrap_or_else(|| panic!("Expected file '{}' in report", path))
}

/// Function names of a file entry in a JSON scan report
pub fn json_function_names(file: &Value) -> Vec<String> {
    file["functions"]
        .as_array()
        .map(|fns| {
            fns.iter()
                .filter_map(|f| f["name"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Names of the functions in a record, in order
pub fn function_names(record: &FileRecord) -> Vec<&str> {
    record.functions.iter().map(|f| f.name.as_str()).collect()
}

/// Assert that a record holds a function with the given name and return it
pub fn assert_function_exists<'a>(record: &'a FileRecord, name: &str) -> &'a FunctionRecord {
    record
        .functions
        .iter()
        .find(|f| f.name == name)
        .unwrap_or_else(|| {
            panic!(
                "Expected function '{}' in {}; found {:?}",
                name,
                record.path,
                function_names(record)
            )
        })
}

/// Assert that a record holds no function with the given name
pub fn assert_function_not_exists(record: &FileRecord, name: &str) {
    assert!(
        record.functions.iter().all(|f| f.name != name),
        "Expected NOT to find function '{}' in {}",
        name,
        record.path
    );
}

/// Assert the structural invariants every function record must satisfy
pub fn assert_well_formed(record: &FileRecord) {
    for function in &record.functions {
        assert!(
            function.start_line >= 1 && function.start_line <= function.end_line,
            "Bad line range {}-{} for {} in {}",
            function.start_line,
            function.end_line,
            function.name,
            record.path
        );
        assert!(
            function.end_line <= record.line_count.max(1),
            "{} ends past the file in {}",
            function.name,
            record.path
        );
        assert!(!function.name.is_empty());
        assert_eq!(
            function.code.split('\n').count(),
            function.line_span(),
            "Code of {} does not cover lines {}-{} in {}",
            function.name,
            function.start_line,
            function.end_line,
            record.path
        );
    }
}
