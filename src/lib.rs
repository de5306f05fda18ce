#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! gopack library
//!
//! This library provides the compile-then-compress pipeline for Go programs:
//! `go build` with stripped symbols for a fixed target, followed by in-place
//! UPX compression, with the packer downloaded and cached on first use.
//! It can be used programmatically in addition to the CLI interface.
//!
//! # Basic Example
//!
//! Adjusting the compile target before running a build:
//!
//! ```
//! use gopack::pipeline::{CompileTarget, PipelineConfig};
//!
//! let config = PipelineConfig {
//!     target: CompileTarget {
//!         arch: "arm64".to_string(),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//!
//! let env: Vec<_> = config.target.env_overrides().into_iter().collect();
//! assert!(env.contains(&("GOARCH", "arm64".to_string())));
//! assert!(env.contains(&("CGO_ENABLED", "0".to_string())));
//! ```
//!
//! # Advanced Example: Output Resolution
//!
//! Where the artifact lands for a given request:
//!
//! ```
//! use gopack::pipeline::{BuildRequest, PipelineConfig, ResolvedPaths};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let workspace = TempDir::new().unwrap();
//! let source = workspace.path().join("server.go");
//! fs::write(&source, "package main\n").unwrap();
//!
//! let request = BuildRequest::new(&source, None, &PipelineConfig::default()).unwrap();
//! let paths = ResolvedPaths::resolve(&request).unwrap();
//!
//! assert_eq!(paths.output_path, workspace.path().join("server"));
//! ```

/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file support
pub mod config;
/// Application error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Home directory resolution for the tool cache
pub mod home;
/// Infrastructure traits for filesystem, command execution and downloads
pub mod infra;
/// Email notifications
pub mod notify;
/// Build pipeline orchestration
pub mod pipeline;
