//! Error types for the build pipeline

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

use super::extractor::ExtractError;

/// Errors that can occur during pipeline execution
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Checking the tool cache failed for a reason other than absence
    #[error("Failed to look up cached tool at {path}")]
    Lookup {
        /// Cached tool path
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Fetching or storing the tool archive failed
    #[error("Failed to download {url}")]
    Download {
        /// Archive URL
        url: String,
        #[source]
        /// Underlying network or write error
        source: std::io::Error,
    },

    /// Unpacking the tool archive failed
    #[error("Failed to extract compression tool")]
    Extraction(#[from] ExtractError),

    /// Source or output path is unusable
    #[error("Invalid path {path}: {reason}")]
    InvalidPath {
        /// Offending path
        path: PathBuf,
        /// Why it was rejected
        reason: String,
    },

    /// Toolchain or compression tool could not be started
    #[error("Failed to launch {program}")]
    ToolchainLaunch {
        /// Program that failed to start
        program: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Toolchain or compression tool exited unsuccessfully
    #[error("{program} failed on {artifact} ({status})")]
    ToolchainFailed {
        /// Program that failed
        program: String,
        /// Artifact the program was producing or rewriting
        artifact: PathBuf,
        /// Exit status of the child
        status: ExitStatus,
    },

    /// The artifact could not be inspected after a stage reported success
    #[error("Artifact not found at {path}")]
    ArtifactMissing {
        /// Expected artifact path
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// I/O error during the pipeline
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    /// Whether this error came from a subprocess (launch failure or exit status)
    pub fn is_toolchain_error(&self) -> bool {
        matches!(
            self,
            Self::ToolchainLaunch { .. } | Self::ToolchainFailed { .. }
        )
    }

    /// Single-line rendering of this error and its sources
    pub fn describe(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            message.push_str(": ");
            message.push_str(&err.to_string());
            source = err.source();
        }
        message
    }
}
