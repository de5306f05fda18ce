//! Build command implementation
//!
//! Thin presentation layer for the build command.
//! Business logic lives in `pipeline::BuildPipeline`.

use anyhow::Result;
use console::style;
use std::env;
use std::path::{Path, PathBuf};

use crate::config::ConfigLoader;
use crate::error::GopackError;
use crate::fmt::{format_bytes, CHECKMARK};
use crate::home::resolve_home;
use crate::pipeline::{BuildPipeline, BuildRequest, PipelineReport};

/// Main build command handler (presentation layer)
///
/// Loads `.gopack.toml` from the working directory, resolves the home
/// directory for the tool cache and runs the pipeline.
///
/// # Examples
///
/// ```no_run
/// use gopack::cmd::build::cmd_build;
/// use std::path::{Path, PathBuf};
///
/// // Artifact next to the source
/// cmd_build(None, Path::new("cmd/server/main.go"))?;
///
/// // Artifact in an explicit directory
/// cmd_build(Some(Path::new("dist/")), Path::new("main.go"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_build(output: Option<&Path>, file: &Path) -> Result<()> {
    let work_dir = env::current_dir()?;
    build_in(&work_dir, resolve_home(), output, file)
}

/// Build with an explicit working directory and an already resolved home
fn build_in(
    work_dir: &Path,
    home: Option<PathBuf>,
    output: Option<&Path>,
    file: &Path,
) -> Result<()> {
    let config = ConfigLoader::load(work_dir)?;

    let home = home.ok_or(GopackError::HomeUnresolved)?;
    log::debug!("Home directory: {}", home.display());

    let request =
        BuildRequest::new(file, output.map(Path::to_path_buf), &config).map_err(|e| {
            log::error!("Rejected build request: {}", e.describe());
            GopackError::from(e)
        })?;
    let pipeline = BuildPipeline::new(home, config);

    let report = pipeline.build(&request).map_err(GopackError::from)?;
    present_build_results(&report);

    Ok(())
}

/// Present build completion and tool cache status
fn present_build_results(report: &PipelineReport) {
    println!();
    println!("{} Build completed successfully!", CHECKMARK);
    println!(
        "   Final size: {}",
        style(format_bytes(report.metrics.after_bytes)).green().bold()
    );
    if report.tool.downloaded {
        println!(
            "   {} Cached compression tool at {}",
            style("→").dim(),
            report.tool.path.display()
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorFormatter;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_without_home_exits_with_config_code() {
        let workspace = TempDir::new().unwrap();
        let source = workspace.path().join("main.go");
        fs::write(&source, "package main\n").unwrap();

        let err = build_in(workspace.path(), None, None, &source).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<GopackError>(),
            Some(GopackError::HomeUnresolved)
        ));
        assert_eq!(ErrorFormatter::exit_code(&err), 78);
    }

    #[test]
    fn test_build_with_missing_source_reports_invalid_path() {
        let workspace = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let source = workspace.path().join("missing.go");

        let err = build_in(
            workspace.path(),
            Some(home.path().to_path_buf()),
            None,
            &source,
        )
        .unwrap_err();

        assert_eq!(ErrorFormatter::exit_code(&err), 66);
        // Nothing was downloaded
        assert!(!home.path().join("upx").exists());
    }
}
