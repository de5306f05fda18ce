//! Infrastructure traits for abstracting I/O operations.
//!
//! The pipeline never touches the filesystem, spawns a process or opens a
//! network connection directly. It goes through the traits below so every
//! stage can be exercised with mocks.

use std::fs::Metadata;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, ExitStatus};

use indicatif::ProgressBar;

/// Trait for abstracting filesystem operations.
pub trait FileSystem {
    /// Get metadata for a file or directory.
    fn metadata(&self, path: &Path) -> io::Result<Metadata>;

    /// Create a directory and all missing parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create a directory tree, applying `mode` to newly created directories on unix.
    ///
    /// Defaults to [`FileSystem::create_dir_all`] for implementations that
    /// have no notion of permissions.
    fn create_dir_all_with_mode(&self, path: &Path, _mode: u32) -> io::Result<()> {
        self.create_dir_all(path)
    }

    /// Rename a file, replacing the destination if it exists.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Read the entire contents of a file into a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Real filesystem implementation that delegates to std::fs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn metadata(&self, path: &Path) -> io::Result<Metadata> {
        std::fs::metadata(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    #[cfg(unix)]
    fn create_dir_all_with_mode(&self, path: &Path, mode: u32) -> io::Result<()> {
        use std::os::unix::fs::DirBuilderExt;
        std::fs::DirBuilder::new()
            .recursive(true)
            .mode(mode)
            .create(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Trait for abstracting command execution.
///
/// Only the exit status is observed; child stdout/stderr are inherited.
pub trait CommandExecutor {
    /// Execute a command and return its exit status.
    fn status(&self, cmd: &mut Command) -> io::Result<ExitStatus>;

    /// Execute a command built with a closure and return its exit status.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use gopack::infra::{CommandExecutor, RealCommandExecutor};
    ///
    /// let executor = RealCommandExecutor;
    /// let status = executor.run(|cmd| cmd.arg("version"), "go")?;
    /// # Ok::<(), std::io::Error>(())
    /// ```
    fn run<F>(&self, builder: F, program: impl AsRef<std::ffi::OsStr>) -> io::Result<ExitStatus>
    where
        F: FnOnce(&mut Command) -> &mut Command,
    {
        let mut cmd = Command::new(program);
        builder(&mut cmd);
        self.status(&mut cmd)
    }
}

/// Real command executor that delegates to std::process::Command.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealCommandExecutor;

impl CommandExecutor for RealCommandExecutor {
    fn status(&self, cmd: &mut Command) -> io::Result<ExitStatus> {
        cmd.status()
    }
}

/// Trait for abstracting HTTP downloads.
pub trait Downloader {
    /// Fetch `url` and stream the whole response body into `sink`.
    ///
    /// Returns the number of bytes written. Network failures, non-success
    /// statuses and write failures all surface as `io::Error`.
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> io::Result<u64>;
}

/// Blocking HTTP downloader backed by reqwest.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpDownloader;

impl Downloader for HttpDownloader {
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> io::Result<u64> {
        let mut response = reqwest::blocking::get(url)
            .and_then(|r| r.error_for_status())
            .map_err(io::Error::other)?;

        let progress = match response.content_length() {
            Some(len) => ProgressBar::new(len),
            None => ProgressBar::new_spinner(),
        };

        let mut writer = progress.wrap_write(sink);
        let written = response.copy_to(&mut writer).map_err(io::Error::other);
        progress.finish_and_clear();

        let written = written?;
        writer.flush()?;
        Ok(written)
    }
}

/// Create an ExitStatus with the given exit code for use in test mocks.
#[cfg(all(test, unix))]
pub fn mock_exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(all(test, windows))]
pub fn mock_exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}
