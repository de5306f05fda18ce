//! Application error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes
//! - Exit codes following sysexits.h conventions
//!
//! # Examples
//!
//! ```no_run
//! use gopack::error::GopackError;
//! use gopack::pipeline::{BuildPipeline, BuildRequest, PipelineConfig};
//!
//! let config = PipelineConfig::default();
//! let run = || -> Result<(), GopackError> {
//!     let request = BuildRequest::new("main.go", None, &config)?;
//!     BuildPipeline::new("/home/dev", config.clone()).build(&request)?;
//!     Ok(())
//! };
//!
//! if let Err(e) = run() {
//!     eprintln!("Build failed: {}", e);
//!     std::process::exit(e.exit_code());
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::pipeline::PipelineError;

/// gopack errors with contextual suggestions
#[derive(Error, Debug)]
pub enum GopackError {
    /// No home directory could be determined
    #[error("Could not determine the home directory")]
    HomeUnresolved,

    /// Configuration file could not be read or is invalid
    #[error("Invalid configuration in {path}: {reason}")]
    Config {
        /// Path to config file
        path: PathBuf,
        /// What is wrong with it
        reason: String,
    },

    /// Pipeline error during build
    #[error("Build failed")]
    Pipeline(#[from] PipelineError),
}

impl GopackError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use gopack::error::GopackError;
    ///
    /// let suggestion = GopackError::HomeUnresolved.suggestion();
    /// assert!(suggestion.unwrap().contains("HOME"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::HomeUnresolved => Some(
                "Set HOME (or HOMEDRIVE/HOMEPATH or USERPROFILE on Windows) so the compression tool can be cached"
                    .to_string(),
            ),
            Self::Config { path, .. } => {
                Some(format!("Fix or remove {} to use the defaults", path.display()))
            }
            Self::Pipeline(e) => pipeline_suggestion(e),
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Returns Unix-style exit codes based on the error type, following sysexits.h conventions.
    ///
    /// # Examples
    ///
    /// ```
    /// use gopack::error::GopackError;
    ///
    /// assert_eq!(GopackError::HomeUnresolved.exit_code(), 78); // EX_CONFIG
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::HomeUnresolved => 78,   // EX_CONFIG
            Self::Config { .. } => 78,    // EX_CONFIG
            Self::Pipeline(e) => pipeline_exit_code(e),
        }
    }

    /// Returns the pipeline error if this is a `Pipeline` variant.
    pub fn as_pipeline_error(&self) -> Option<&PipelineError> {
        match self {
            Self::Pipeline(e) => Some(e),
            _ => None,
        }
    }
}

fn pipeline_suggestion(error: &PipelineError) -> Option<String> {
    match error {
        PipelineError::Lookup { path, .. } => Some(format!(
            "Check permissions on {} and its parent directories",
            path.display()
        )),
        PipelineError::Download { .. } => Some(
            "Check network access, or set 'archive-url' in .gopack.toml to a reachable mirror"
                .to_string(),
        ),
        PipelineError::Extraction(_) => Some(
            "The downloaded archive does not contain a usable upx binary; check 'archive-url'"
                .to_string(),
        ),
        PipelineError::InvalidPath { .. } => {
            Some("Pass an existing .go file with -f/--file".to_string())
        }
        PipelineError::ToolchainLaunch { program, .. } => Some(format!(
            "Make sure {} is installed and on PATH",
            program
        )),
        PipelineError::ToolchainFailed { .. } => {
            Some("Check the tool output above and fix the reported problem".to_string())
        }
        PipelineError::ArtifactMissing { .. } | PipelineError::Io(_) => {
            Some("Check free disk space and permissions on the output directory".to_string())
        }
    }
}

fn pipeline_exit_code(error: &PipelineError) -> i32 {
    match error {
        PipelineError::Lookup { .. } => 74,           // EX_IOERR
        PipelineError::Download { .. } => 69,         // EX_UNAVAILABLE
        PipelineError::Extraction(_) => 65,           // EX_DATAERR
        PipelineError::InvalidPath { .. } => 66,      // EX_NOINPUT
        PipelineError::ToolchainLaunch { .. } => 127, // Command not found
        PipelineError::ToolchainFailed { .. } => 1,   // Generic error (build failed)
        PipelineError::ArtifactMissing { .. } => 70,  // EX_SOFTWARE
        PipelineError::Io(_) => 74,                   // EX_IOERR
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and a suggestion
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        // Main error message
        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        // Error chain (caused by)
        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        let suggestion = match error.downcast_ref::<GopackError>() {
            Some(gp_error) => gp_error.suggestion(),
            None => error
                .downcast_ref::<PipelineError>()
                .and_then(pipeline_suggestion),
        };
        if let Some(suggestion) = suggestion {
            output.push_str(&format!(
                "\n{} {}\n",
                style("help:").cyan().bold(),
                suggestion
            ));
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        if let Some(gp_error) = error.downcast_ref::<GopackError>() {
            gp_error.exit_code()
        } else if let Some(pipeline_error) = error.downcast_ref::<PipelineError>() {
            pipeline_exit_code(pipeline_error)
        } else {
            1 // Generic error
        }
    }
}
