//! Configuration file loading

use super::file::{ConfigFile, CONFIG_FILE_NAME};
use crate::error::GopackError;
use crate::infra::{FileSystem, RealFileSystem};
use crate::pipeline::PipelineConfig;
use std::path::Path;

/// Handles loading configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from .gopack.toml in the given directory
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use gopack::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Target: {}/{}", config.target.os, config.target.arch);
    /// # Ok::<(), gopack::error::GopackError>(())
    /// ```
    pub fn load(work_dir: &Path) -> Result<PipelineConfig, GopackError> {
        Self::load_with_fs(work_dir, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(
        work_dir: &Path,
        fs: &FS,
    ) -> Result<PipelineConfig, GopackError> {
        Ok(Self::read_file(work_dir, fs)?.apply(PipelineConfig::default()))
    }

    /// Read and validate the raw config file, defaulting when it is absent
    pub fn read_file<FS: FileSystem>(work_dir: &Path, fs: &FS) -> Result<ConfigFile, GopackError> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let invalid = |reason: String| GopackError::Config {
            path: config_path.clone(),
            reason,
        };

        // Read directly instead of checking existence first
        let contents = match fs.read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                return Ok(ConfigFile::default());
            }
            Err(e) => return Err(invalid(format!("failed to read: {}", e))),
        };

        let config: ConfigFile = toml_edit::de::from_str(&contents)
            .map_err(|e| invalid(e.to_string().trim_end().to_string()))?;
        config.validate().map_err(invalid)?;

        log::debug!("Loaded {}", config_path.display());
        Ok(config)
    }
}
