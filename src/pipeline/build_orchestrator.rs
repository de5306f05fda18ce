//! Build orchestration logic
//!
//! Drives the linear stage machine
//! `Start → ToolReady → Compiled → Compressed → Done`. Any failure moves the
//! run to `Aborted`. Nothing is retried and nothing is rolled back.

use std::cell::Cell;
use std::fmt;
use std::path::PathBuf;

use console::style;

use crate::fmt::{format_mib, CHECKMARK, HAMMER, PACKAGE, SPARKLES};
use crate::infra::{CommandExecutor, Downloader, FileSystem};

use super::acquirer::{ToolAcquirer, ToolLocation};
use super::compiler::Compiler;
use super::compressor::Compressor;
use super::config::PipelineConfig;
use super::error::PipelineError;
use super::metrics::SizeMetrics;
use super::request::{BuildRequest, ResolvedPaths};
use super::result_formatter::ResultFormatter;

/// Position of a run in the stage machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    /// Nothing has run yet
    Start,
    /// Compression tool is available
    ToolReady,
    /// Executable was built
    Compiled,
    /// Executable was compressed
    Compressed,
    /// Sizes were reported
    Done,
    /// A stage failed
    Aborted,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::ToolReady => "tool-ready",
            Self::Compiled => "compiled",
            Self::Compressed => "compressed",
            Self::Done => "done",
            Self::Aborted => "aborted",
        };
        f.write_str(name)
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Compression tool used
    pub tool: ToolLocation,
    /// Artifact location
    pub paths: ResolvedPaths,
    /// Before/after sizes
    pub metrics: SizeMetrics,
}

/// Orchestrates tool acquisition, compilation and compression
pub struct BuildOrchestrator<FS: FileSystem, CE: CommandExecutor, D: Downloader> {
    acquirer: ToolAcquirer<FS, D>,
    compiler: Compiler<FS, CE>,
    compressor: Compressor<FS, CE>,
    stage: Cell<PipelineStage>,
}

impl<FS, CE, D> BuildOrchestrator<FS, CE, D>
where
    FS: FileSystem + Clone,
    CE: CommandExecutor + Clone,
    D: Downloader,
{
    /// Create a new build orchestrator caching the tool under `home`
    pub fn new(
        home: PathBuf,
        config: PipelineConfig,
        fs: FS,
        cmd_executor: CE,
        downloader: D,
    ) -> Self {
        Self {
            acquirer: ToolAcquirer::new(config.clone(), home, fs.clone(), downloader),
            compiler: Compiler::new(config, fs.clone(), cmd_executor.clone()),
            compressor: Compressor::new(fs, cmd_executor),
            stage: Cell::new(PipelineStage::Start),
        }
    }

    /// Stage reached by the latest run
    pub fn stage(&self) -> PipelineStage {
        self.stage.get()
    }

    /// Execute the complete build pipeline
    ///
    /// A failure is logged once, leaves the orchestrator in
    /// [`PipelineStage::Aborted`] and is returned to the caller.
    pub fn execute(&self, request: &BuildRequest) -> Result<PipelineReport, PipelineError> {
        self.stage.set(PipelineStage::Start);

        let result = self.run_stages(request);
        if let Err(e) = &result {
            log::error!("Aborted after stage '{}': {}", self.stage(), e.describe());
            self.stage.set(PipelineStage::Aborted);
        }
        result
    }

    fn advance(&self, stage: PipelineStage) {
        log::debug!("Stage {} -> {}", self.stage(), stage);
        self.stage.set(stage);
    }

    fn run_stages(&self, request: &BuildRequest) -> Result<PipelineReport, PipelineError> {
        println!("\n{} {} Go Build Pipeline", HAMMER, style("Running").bold());

        println!("\n{} Step 1: Locating compression tool...", PACKAGE);
        let tool = self.acquirer.acquire()?;
        self.advance(PipelineStage::ToolReady);
        println!(
            "   {} Tool: {}",
            CHECKMARK,
            style(tool.path.display()).cyan()
        );

        println!("\n{} Step 2: Compiling...", SPARKLES);
        log::info!("Starting compile of {}", request.source().display());
        let compiled = self.compiler.compile(request)?;
        self.advance(PipelineStage::Compiled);
        log::info!(
            "Compile completion, compiled file size: {}, starting compress...",
            format_mib(compiled.size_bytes)
        );

        println!("\n{} Step 3: Compressing...", SPARKLES);
        let artifact = &compiled.paths.output_path;
        let compressed_size = self.compressor.compress(&tool, artifact)?;
        self.advance(PipelineStage::Compressed);

        let metrics = SizeMetrics::new(compiled.size_bytes, compressed_size);
        log::info!(
            "Compress completion, size of compressed file: {}, file path: {}",
            format_mib(compressed_size),
            artifact.display()
        );
        log::info!("Compression ratio: {}", metrics);
        self.advance(PipelineStage::Done);

        ResultFormatter::print_summary(&metrics, artifact);

        Ok(PipelineReport {
            tool,
            paths: compiled.paths,
            metrics,
        })
    }
}
