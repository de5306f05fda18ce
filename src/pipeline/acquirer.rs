//! Compression tool acquisition
//!
//! Looks the tool up in the per-user cache and, when it is missing, downloads
//! the release archive and unpacks the binary into the cache.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::infra::{Downloader, FileSystem};

use super::config::PipelineConfig;
use super::error::PipelineError;
use super::extractor::ArchiveExtractor;

/// Mode for the tool cache directory
const TOOL_DIR_MODE: u32 = 0o777;

/// Location of a usable compression tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolLocation {
    /// Path to the tool executable
    pub path: PathBuf,
    /// Whether this run downloaded the tool
    pub downloaded: bool,
}

/// Ensures the compression tool is present in the per-user cache
pub struct ToolAcquirer<FS: FileSystem, D: Downloader> {
    config: PipelineConfig,
    home: PathBuf,
    fs: FS,
    downloader: D,
}

impl<FS: FileSystem, D: Downloader> ToolAcquirer<FS, D> {
    /// Create an acquirer caching under `home`
    pub fn new(config: PipelineConfig, home: impl Into<PathBuf>, fs: FS, downloader: D) -> Self {
        Self {
            config,
            home: home.into(),
            fs,
            downloader,
        }
    }

    /// Conventional cached tool path
    pub fn tool_path(&self) -> PathBuf {
        self.config.tool_path(&self.home)
    }

    /// Return the cached tool, downloading it first if absent
    ///
    /// A cached tool is returned as is: no download, no version check.
    pub fn acquire(&self) -> Result<ToolLocation, PipelineError> {
        let tool_path = self.tool_path();

        match self.fs.metadata(&tool_path) {
            Ok(_) => {
                log::debug!("Using cached {}", tool_path.display());
                return Ok(ToolLocation {
                    path: tool_path,
                    downloaded: false,
                });
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(PipelineError::Lookup {
                    path: tool_path,
                    source,
                })
            }
        }

        log::info!(
            "No {} found in the current environment, start downloading",
            self.config.tool_binary
        );
        let tool_dir = self.config.tool_dir_path(&self.home);
        self.fs.create_dir_all_with_mode(&tool_dir, TOOL_DIR_MODE)?;

        self.download_and_install(&tool_dir, &tool_path)?;
        log::info!(
            "Unzip complete, {} path: {}",
            self.config.tool_binary,
            tool_path.display()
        );

        Ok(ToolLocation {
            path: tool_path,
            downloaded: true,
        })
    }

    fn download_and_install(&self, tool_dir: &Path, tool_path: &Path) -> Result<(), PipelineError> {
        let url = &self.config.archive_url;
        let download_error = |source| PipelineError::Download {
            url: url.clone(),
            source,
        };

        // Removed on drop, whichever way this function exits
        let mut archive = tempfile::Builder::new()
            .prefix(&self.config.tool_binary)
            .suffix(".zip")
            .tempfile_in(tool_dir)
            .map_err(download_error)?;

        let bytes = self
            .downloader
            .fetch(url, archive.as_file_mut())
            .map_err(download_error)?;
        archive.as_file_mut().flush().map_err(download_error)?;
        log::info!("Download completed ({} bytes), unzipping", bytes);

        let extracted = ArchiveExtractor::new(&self.config).extract(archive.path(), tool_dir)?;
        archive.close()?;

        self.fs.rename(&extracted, tool_path)?;
        Ok(())
    }
}
