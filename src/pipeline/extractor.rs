//! Single-binary extraction from the downloaded tool archive
//!
//! Only the tool executable is written out. Every other entry is skipped
//! without being decompressed.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use zip::result::ZipError;
use zip::ZipArchive;

use super::config::PipelineConfig;

/// Mode applied when an archive entry carries no unix permissions
const DEFAULT_ENTRY_MODE: u32 = 0o755;

/// Mode for directories created during extraction
const DIR_MODE: u32 = 0o755;

/// Errors raised while extracting the tool binary
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The archive is missing or is not a readable zip file
    #[error("cannot open archive {path}")]
    Open {
        /// Archive path
        path: PathBuf,
        #[source]
        /// Zip error source
        source: ZipError,
    },

    /// An entry header could not be read
    #[error("cannot read archive entry #{index}")]
    Entry {
        /// Entry index
        index: usize,
        #[source]
        /// Zip error source
        source: ZipError,
    },

    /// Writing the extracted binary failed
    #[error("cannot write {path}")]
    Io {
        /// Output path
        path: PathBuf,
        #[source]
        /// IO error source
        source: io::Error,
    },

    /// No entry matched the tool binary name
    #[error("no {name} entry in archive {archive}")]
    NoMatchingEntry {
        /// Expected binary name
        name: String,
        /// Archive path
        archive: PathBuf,
    },
}

/// Extracts the compression tool binary from a zip archive
#[derive(Debug, Clone, Copy)]
pub struct ArchiveExtractor<'a> {
    config: &'a PipelineConfig,
}

impl<'a> ArchiveExtractor<'a> {
    /// Create an extractor for the tool described by `config`
    pub fn new(config: &'a PipelineConfig) -> Self {
        Self { config }
    }

    /// Extract the tool binary from `archive` into `target_dir`
    ///
    /// The binary is always written to `<target_dir>/<binary name>`, whatever
    /// its path inside the archive. The first failure aborts extraction.
    pub fn extract(&self, archive: &Path, target_dir: &Path) -> Result<PathBuf, ExtractError> {
        let open_error = |source| ExtractError::Open {
            path: archive.to_path_buf(),
            source,
        };
        let file = File::open(archive).map_err(|e| open_error(ZipError::Io(e)))?;
        let mut zip = ZipArchive::new(file).map_err(open_error)?;

        let output = target_dir.join(&self.config.tool_binary);
        let mut extracted = None;

        for index in 0..zip.len() {
            let mut entry = zip
                .by_index(index)
                .map_err(|source| ExtractError::Entry { index, source })?;

            if !self.config.matches_tool_entry(entry.name()) {
                log::debug!("Skipping archive entry {}", entry.name());
                continue;
            }

            if entry.is_dir() {
                create_dir(&output)?;
                continue;
            }

            if !target_dir.is_dir() {
                create_dir(target_dir)?;
            }

            log::debug!("Extracting {} to {}", entry.name(), output.display());
            let mode = entry.unix_mode().unwrap_or(DEFAULT_ENTRY_MODE) & 0o777;
            let mut out = open_output(&output, mode)?;
            io::copy(&mut entry, &mut out).map_err(|source| ExtractError::Io {
                path: output.clone(),
                source,
            })?;
            set_mode(&output, mode)?;

            extracted = Some(output.clone());
        }

        extracted.ok_or_else(|| ExtractError::NoMatchingEntry {
            name: self.config.tool_binary.clone(),
            archive: archive.to_path_buf(),
        })
    }
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> ExtractError + '_ {
    move |source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn create_dir(path: &Path) -> Result<(), ExtractError> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder.create(path).map_err(io_error(path))
}

fn open_output(path: &Path, _mode: u32) -> Result<File, ExtractError> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(_mode);
    }
    options.open(path).map_err(io_error(path))
}

// The open mode is ignored when the file already exists
#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> Result<(), ExtractError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(io_error(path))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> Result<(), ExtractError> {
    Ok(())
}
