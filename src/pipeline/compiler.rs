//! Go toolchain invocation
//!
//! Runs `go build` with symbol stripping against the fixed cross-compilation
//! target and measures the produced executable.

use crate::infra::{CommandExecutor, FileSystem};

use super::config::PipelineConfig;
use super::error::PipelineError;
use super::request::{BuildRequest, ResolvedPaths};

/// Result of a successful compilation
#[derive(Debug, Clone)]
pub struct CompiledArtifact {
    /// Where the executable was written
    pub paths: ResolvedPaths,
    /// Size of the executable before compression (bytes)
    pub size_bytes: u64,
}

/// Invokes the language toolchain
pub struct Compiler<FS: FileSystem, CE: CommandExecutor> {
    config: PipelineConfig,
    fs: FS,
    cmd_executor: CE,
}

impl<FS: FileSystem, CE: CommandExecutor> Compiler<FS, CE> {
    /// Create a new compiler with the given configuration
    pub fn new(config: PipelineConfig, fs: FS, cmd_executor: CE) -> Self {
        Self {
            config,
            fs,
            cmd_executor,
        }
    }

    /// Build `request` into a stripped executable
    ///
    /// The child inherits the process environment plus the target overrides.
    /// Its output is not captured.
    pub fn compile(&self, request: &BuildRequest) -> Result<CompiledArtifact, PipelineError> {
        let paths = ResolvedPaths::resolve(request)?;
        let program = self.config.toolchain.as_str();
        let ldflags = self.config.ldflags.as_str();
        let env = self.config.target.env_overrides();

        log::debug!(
            "{} build -ldflags \"{}\" -o {} {}",
            program,
            ldflags,
            paths.output_path.display(),
            request.source().display()
        );

        let status = self
            .cmd_executor
            .run(
                |cmd| {
                    cmd.arg("build")
                        .arg("-ldflags")
                        .arg(ldflags)
                        .arg("-o")
                        .arg(&paths.output_path)
                        .arg(request.source())
                        .envs(env)
                },
                program,
            )
            .map_err(|source| PipelineError::ToolchainLaunch {
                program: program.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(PipelineError::ToolchainFailed {
                program: format!("{} build", program),
                artifact: paths.output_path.clone(),
                status,
            });
        }

        let size_bytes = self
            .fs
            .metadata(&paths.output_path)
            .map_err(|source| PipelineError::ArtifactMissing {
                path: paths.output_path.clone(),
                source,
            })?
            .len();

        Ok(CompiledArtifact { paths, size_bytes })
    }
}
