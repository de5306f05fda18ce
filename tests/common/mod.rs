//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Assertion helpers for size and ratio comparisons
//! - Fixtures for Go sources and tool archives
//! - Mock executors and downloaders that stand in for `go`, `upx` and the network
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::fixtures;
//!
//! let (workspace, source) = fixtures::go_source("main").unwrap();
//! ```

pub mod assertions;
pub mod fixtures;
pub mod mocks;

/// Check if running in CI environment
#[allow(dead_code)]
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok() || std::env::var("GITHUB_ACTIONS").is_ok()
}
