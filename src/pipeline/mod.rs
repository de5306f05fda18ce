//! Build pipeline orchestration module
//!
//! Implements the complete Go build pipeline:
//! 1. fetch and cache the UPX packer under the home directory (first run only)
//! 2. go build -ldflags "-s -w" with GOOS/GOARCH/CGO_ENABLED forced
//! 3. upx on the produced executable, in place

pub mod acquirer;
pub mod build_orchestrator;
pub mod compiler;
pub mod compressor;
pub mod config;
pub mod error;
pub mod executor;
pub mod extractor;
pub mod metrics;
pub mod request;
pub mod result_formatter;

pub use acquirer::{ToolAcquirer, ToolLocation};
pub use build_orchestrator::{BuildOrchestrator, PipelineReport, PipelineStage};
pub use compiler::{CompiledArtifact, Compiler};
pub use compressor::Compressor;
pub use config::{CompileTarget, PipelineConfig, DEFAULT_ARCHIVE_URL};
pub use error::PipelineError;
pub use executor::BuildPipeline;
pub use extractor::{ArchiveExtractor, ExtractError};
pub use metrics::SizeMetrics;
pub use request::{BuildRequest, ResolvedPaths};
pub use result_formatter::ResultFormatter;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_pipeline_config_default_has_expected_values() {
        let config = PipelineConfig::default();

        assert_eq!(config.archive_url, DEFAULT_ARCHIVE_URL);
        assert_eq!(config.toolchain, "go");
        assert_eq!(config.ldflags, "-s -w");
        assert_eq!(config.source_extension, "go");
        assert_eq!(config.target.os, "linux");
        assert_eq!(config.target.arch, "amd64");
        assert!(!config.target.cgo_enabled);
    }

    #[test]
    fn test_tool_is_cached_under_home() {
        let config = PipelineConfig::default();

        assert_eq!(
            config.tool_path(Path::new("/home/dev")),
            Path::new("/home/dev").join("upx").join("upx.exe")
        );
    }

    #[test]
    fn test_size_metrics_with_large_values_above_1gb_calculates_correctly() {
        let metrics = SizeMetrics::new(2 * 1024 * 1024 * 1024, 1024 * 1024 * 1024);

        assert_eq!(metrics.reduction_bytes(), 1024 * 1024 * 1024);
        assert_eq!(metrics.reduction_percent(), 50.0);
    }
}
