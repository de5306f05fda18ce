//! In-place executable compression

use std::path::Path;

use crate::infra::{CommandExecutor, FileSystem};

use super::acquirer::ToolLocation;
use super::error::PipelineError;

/// Runs the acquired compression tool on an artifact
pub struct Compressor<FS: FileSystem, CE: CommandExecutor> {
    fs: FS,
    cmd_executor: CE,
}

impl<FS: FileSystem, CE: CommandExecutor> Compressor<FS, CE> {
    /// Create a new compressor
    pub fn new(fs: FS, cmd_executor: CE) -> Self {
        Self { fs, cmd_executor }
    }

    /// Compress `artifact` in place and return its new size in bytes
    ///
    /// The tool gets the artifact as its only argument and the unmodified
    /// process environment. Nothing is unwound on failure.
    pub fn compress(&self, tool: &ToolLocation, artifact: &Path) -> Result<u64, PipelineError> {
        let program = tool.path.display().to_string();

        let status = self
            .cmd_executor
            .run(|cmd| cmd.arg(artifact), &tool.path)
            .map_err(|source| PipelineError::ToolchainLaunch {
                program: program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(PipelineError::ToolchainFailed {
                program,
                artifact: artifact.to_path_buf(),
                status,
            });
        }

        let size = self
            .fs
            .metadata(artifact)
            .map_err(|source| PipelineError::ArtifactMissing {
                path: artifact.to_path_buf(),
                source,
            })?
            .len();

        Ok(size)
    }
}
