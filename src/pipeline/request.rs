//! Build request validation and output path resolution

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use super::config::PipelineConfig;
use super::error::PipelineError;

/// Immutable pipeline input
///
/// Construction checks that the source is an existing file carrying the
/// recognized source extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    source: PathBuf,
    output: Option<PathBuf>,
}

impl BuildRequest {
    /// Validate a source path and optional explicit output path
    pub fn new(
        source: impl Into<PathBuf>,
        output: Option<PathBuf>,
        config: &PipelineConfig,
    ) -> Result<Self, PipelineError> {
        let source = source.into();
        let invalid = |reason: &str| PipelineError::InvalidPath {
            path: source.clone(),
            reason: reason.to_string(),
        };

        match std::fs::metadata(&source) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => return Err(invalid("not a regular file")),
            Err(e) => return Err(invalid(&e.to_string())),
        }

        if source.extension() != Some(OsStr::new(&config.source_extension)) {
            return Err(invalid(&format!(
                "expected a .{} source file",
                config.source_extension
            )));
        }

        // An empty output flag means "not given"
        let output = output.filter(|p| !p.as_os_str().is_empty());

        Ok(Self { source, output })
    }

    /// Source file path
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Explicit output path, if one was given
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }
}

/// Output location derived from a [`BuildRequest`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Directory the artifact is written to
    pub output_dir: PathBuf,
    /// Artifact file name
    pub file_name: OsString,
    /// Absolute artifact path
    pub output_path: PathBuf,
}

impl ResolvedPaths {
    /// Resolve the artifact location for `request`
    ///
    /// With an explicit output, its directory part is kept and an empty file
    /// name is replaced by the source stem. Without one, the artifact lands
    /// next to the source. Only the working directory is consulted, to make
    /// relative results absolute.
    pub fn resolve(request: &BuildRequest) -> Result<Self, PipelineError> {
        let source = request.source();
        let stem = source
            .file_stem()
            .map(OsString::from)
            .ok_or_else(|| PipelineError::InvalidPath {
                path: source.to_path_buf(),
                reason: "source has no file name".to_string(),
            })?;

        let (dir, name) = match request.output() {
            Some(output) => {
                let (dir, name) = split_output(output);
                (dir, name.unwrap_or(stem))
            }
            None => (
                source.parent().map(Path::to_path_buf).unwrap_or_default(),
                stem,
            ),
        };

        let joined = dir.join(&name);
        let output_path =
            std::path::absolute(&joined).map_err(|e| PipelineError::InvalidPath {
                path: joined.clone(),
                reason: e.to_string(),
            })?;
        let output_dir = output_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Ok(Self {
            output_dir,
            file_name: name,
            output_path,
        })
    }
}

/// Split an explicit output into its directory and file name
///
/// A trailing separator means the output names a directory only.
fn split_output(output: &Path) -> (PathBuf, Option<OsString>) {
    let names_dir = output
        .to_string_lossy()
        .ends_with(std::path::is_separator);

    match output.file_name() {
        Some(name) if !names_dir => (
            output.parent().map(Path::to_path_buf).unwrap_or_default(),
            Some(name.to_os_string()),
        ),
        _ => (output.to_path_buf(), None),
    }
}
