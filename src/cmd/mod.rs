//! Command handlers for the gopack CLI
//!
//! Each submodule handles a specific CLI command.

pub mod build;

pub use build::cmd_build;
