//! Build pipeline executor
//!
//! Entry point for a single run:
//! 1. make sure the compression tool is cached under the home directory
//! 2. `go build -ldflags "-s -w"` for the configured target
//! 3. compress the executable in place

use std::path::PathBuf;

use crate::infra::{
    CommandExecutor, Downloader, FileSystem, HttpDownloader, RealCommandExecutor, RealFileSystem,
};

use super::build_orchestrator::{BuildOrchestrator, PipelineReport, PipelineStage};
use super::config::PipelineConfig;
use super::error::PipelineError;
use super::request::BuildRequest;

/// Main build pipeline
///
/// Coordinates tool acquisition → compile → compress.
pub struct BuildPipeline<
    FS: FileSystem = RealFileSystem,
    CE: CommandExecutor = RealCommandExecutor,
    D: Downloader = HttpDownloader,
> {
    orchestrator: BuildOrchestrator<FS, CE, D>,
}

impl BuildPipeline {
    /// Create a pipeline that caches the tool under `home`
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use gopack::pipeline::{BuildPipeline, BuildRequest, PipelineConfig};
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let config = PipelineConfig::default();
    /// let request = BuildRequest::new("main.go", None, &config)?;
    /// let pipeline = BuildPipeline::new("/home/dev", config);
    ///
    /// let report = pipeline.build(&request)?;
    /// println!("{}", report.metrics);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(home: impl Into<PathBuf>, config: PipelineConfig) -> Self {
        Self::with_executors(
            home,
            config,
            RealFileSystem,
            RealCommandExecutor,
            HttpDownloader,
        )
    }
}

impl<FS, CE, D> BuildPipeline<FS, CE, D>
where
    FS: FileSystem + Clone,
    CE: CommandExecutor + Clone,
    D: Downloader,
{
    /// Create a pipeline with custom filesystem, command and download implementations
    pub fn with_executors(
        home: impl Into<PathBuf>,
        config: PipelineConfig,
        fs: FS,
        cmd_executor: CE,
        downloader: D,
    ) -> Self {
        Self {
            orchestrator: BuildOrchestrator::new(home.into(), config, fs, cmd_executor, downloader),
        }
    }

    /// Run the complete build pipeline
    ///
    /// # Errors
    /// Returns error if:
    /// - the tool cannot be looked up, downloaded or extracted
    /// - the toolchain or the compression tool cannot be launched or exits non-zero
    /// - the artifact is missing after a stage reported success
    ///
    /// A failed compression leaves the uncompressed executable in place.
    pub fn build(&self, request: &BuildRequest) -> Result<PipelineReport, PipelineError> {
        self.orchestrator.execute(request)
    }

    /// Stage reached by the latest run
    pub fn stage(&self) -> PipelineStage {
        self.orchestrator.stage()
    }
}
