//! Common test utilities and fixtures for repomind-scanner integration tests
//!
//! This module provides:
//! - `TestRepo` builder for creating throwaway repositories on disk
//! - Assertions over the JSON report printed by `repomind-scan scan`

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod assertions;

pub use assertions::*;
pub use test_repo::TestRepo;
