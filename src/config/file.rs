//! Configuration file data structures

use serde::{Deserialize, Serialize};

use crate::pipeline::PipelineConfig;

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".gopack.toml";

/// gopack configuration file structure
///
/// Every field is optional; unset fields keep the [`PipelineConfig`] default.
///
/// ```
/// use gopack::config::ConfigFile;
/// use gopack::pipeline::PipelineConfig;
///
/// let file = ConfigFile {
///     target_arch: Some("arm64".to_string()),
///     ..Default::default()
/// };
///
/// let config = file.apply(PipelineConfig::default());
/// assert_eq!(config.target.arch, "arm64");
/// assert_eq!(config.target.os, "linux");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigFile {
    /// Download URL of the compression tool archive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_url: Option<String>,

    /// Cache directory name under the home directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_dir: Option<String>,

    /// Linker flags passed to `go build`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldflags: Option<String>,

    /// GOOS for the compiled executable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_os: Option<String>,

    /// GOARCH for the compiled executable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_arch: Option<String>,

    /// CGO_ENABLED for the compiled executable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cgo_enabled: Option<bool>,
}

impl ConfigFile {
    /// Check that configured values are usable
    pub fn validate(&self) -> Result<(), String> {
        let non_empty = [
            ("archive-url", &self.archive_url),
            ("tool-dir", &self.tool_dir),
            ("target-os", &self.target_os),
            ("target-arch", &self.target_arch),
        ];
        for (key, value) in non_empty {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(format!("'{}' cannot be empty", key));
            }
        }

        if let Some(url) = &self.archive_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(format!("'archive-url' must be an http(s) URL, got '{}'", url));
            }
        }

        // The cache directory must stay directly under the home directory
        if let Some(dir) = &self.tool_dir {
            if dir.contains(['/', '\\']) || dir == "." || dir == ".." {
                return Err(format!("'tool-dir' must be a single directory name, got '{}'", dir));
            }
        }

        Ok(())
    }

    /// Overlay the configured values on `config`
    pub fn apply(&self, mut config: PipelineConfig) -> PipelineConfig {
        if let Some(url) = &self.archive_url {
            config.archive_url = url.clone();
        }
        if let Some(dir) = &self.tool_dir {
            config.tool_dir = dir.clone();
        }
        if let Some(ldflags) = &self.ldflags {
            config.ldflags = ldflags.clone();
        }
        if let Some(os) = &self.target_os {
            config.target.os = os.clone();
        }
        if let Some(arch) = &self.target_arch {
            config.target.arch = arch.clone();
        }
        if let Some(cgo) = self.cgo_enabled {
            config.target.cgo_enabled = cgo;
        }
        config
    }
}
