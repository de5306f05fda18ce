//! Pipeline configuration types

use std::path::{Path, PathBuf};

/// UPX 3.95 release archive
pub const DEFAULT_ARCHIVE_URL: &str =
    "http://github.com/upx/upx/releases/download/v3.95/upx-3.95-win64.zip";

/// Cross-compilation target handed to the Go toolchain
///
/// Always injected into the compiler environment, regardless of the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileTarget {
    /// Value for `GOOS`
    pub os: String,
    /// Value for `GOARCH`
    pub arch: String,
    /// Value for `CGO_ENABLED` (native interop)
    pub cgo_enabled: bool,
}

impl Default for CompileTarget {
    fn default() -> Self {
        Self {
            os: "linux".to_string(),
            arch: "amd64".to_string(),
            cgo_enabled: false,
        }
    }
}

impl CompileTarget {
    /// Environment overrides for the compiler subprocess
    pub fn env_overrides(&self) -> [(&'static str, String); 3] {
        [
            ("GOOS", self.os.clone()),
            ("GOARCH", self.arch.clone()),
            (
                "CGO_ENABLED",
                if self.cgo_enabled { "1" } else { "0" }.to_string(),
            ),
        ]
    }
}

/// Configuration for the build pipeline
///
/// # Examples
///
/// ```
/// use gopack::pipeline::PipelineConfig;
/// use std::path::Path;
///
/// let config = PipelineConfig::default();
/// assert_eq!(config.toolchain, "go");
/// assert_eq!(
///     config.tool_path(Path::new("/home/dev")),
///     Path::new("/home/dev/upx/upx.exe")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Archive containing the compression tool
    pub archive_url: String,
    /// Tool cache directory, relative to the user's home
    pub tool_dir: String,
    /// Name of the tool binary inside the archive, and its extracted name
    pub tool_binary: String,
    /// Canonical cached file name of the tool
    pub tool_file_name: String,
    /// Toolchain program (default: go)
    pub toolchain: String,
    /// Linker flags passed through `-ldflags` (default strips symbols and DWARF)
    pub ldflags: String,
    /// Fixed cross-compilation target
    pub target: CompileTarget,
    /// Recognized source file extension, stripped to name the artifact
    pub source_extension: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            archive_url: DEFAULT_ARCHIVE_URL.to_string(),
            tool_dir: "upx".to_string(),
            tool_binary: "upx".to_string(),
            tool_file_name: "upx.exe".to_string(),
            toolchain: "go".to_string(),
            ldflags: "-s -w".to_string(),
            target: CompileTarget::default(),
            source_extension: "go".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Tool cache directory under `home`
    pub fn tool_dir_path(&self, home: &Path) -> PathBuf {
        home.join(&self.tool_dir)
    }

    /// Conventional cached tool location under `home`
    pub fn tool_path(&self, home: &Path) -> PathBuf {
        self.tool_dir_path(home).join(&self.tool_file_name)
    }

    /// Whether an archive entry name refers to the tool binary
    pub fn matches_tool_entry(&self, entry_name: &str) -> bool {
        entry_name.ends_with(self.tool_binary.as_str())
            || entry_name.ends_with(self.tool_file_name.as_str())
    }
}
