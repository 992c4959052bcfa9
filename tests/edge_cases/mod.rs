//! Edge case and error handling tests
