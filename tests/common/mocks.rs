//! Mock infrastructure for pipeline tests
//!
//! `ToolchainSimulator` plays both subprocesses: the `go` invocation writes an
//! artifact at its `-o` path, any other program rewrites its first argument
//! to the compressed size.

#![allow(dead_code)]

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, ExitStatus};
use std::sync::{Arc, Mutex};

use gopack::infra::{CommandExecutor, Downloader};

/// Create an ExitStatus with the given exit code
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}

/// One recorded subprocess invocation
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Program as passed to `Command::new`
    pub program: OsString,
    /// Arguments in order
    pub args: Vec<OsString>,
    /// Explicit environment overrides
    pub envs: Vec<(OsString, OsString)>,
}

impl Invocation {
    /// File name of the program
    pub fn program_name(&self) -> String {
        Path::new(&self.program)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Value of an environment override, if set
    pub fn env(&self, key: &str) -> Option<String> {
        self.envs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.to_string_lossy().into_owned())
    }
}

/// Simulated `go` and `upx`
#[derive(Clone)]
pub struct ToolchainSimulator {
    compiled_size: usize,
    compressed_size: usize,
    fail_program: Option<String>,
    invocations: Arc<Mutex<Vec<Invocation>>>,
}

impl ToolchainSimulator {
    /// Compiles to `compiled_size` bytes, compresses to `compressed_size`
    pub fn new(compiled_size: usize, compressed_size: usize) -> Self {
        Self {
            compiled_size,
            compressed_size,
            fail_program: None,
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Make the program with this file name exit with status 1
    pub fn failing(mut self, program_name: &str) -> Self {
        self.fail_program = Some(program_name.to_string());
        self
    }

    /// Recorded invocations in order
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations
            .lock()
            .expect("ToolchainSimulator lock should never be poisoned in tests")
            .clone()
    }
}

impl CommandExecutor for ToolchainSimulator {
    fn status(&self, cmd: &mut Command) -> io::Result<ExitStatus> {
        let invocation = Invocation {
            program: cmd.get_program().to_os_string(),
            args: cmd.get_args().map(OsStr::to_os_string).collect(),
            envs: cmd
                .get_envs()
                .filter_map(|(k, v)| v.map(|v| (k.to_os_string(), v.to_os_string())))
                .collect(),
        };
        self.invocations
            .lock()
            .expect("ToolchainSimulator lock should never be poisoned in tests")
            .push(invocation.clone());

        let name = invocation.program_name();
        if self.fail_program.as_deref() == Some(name.as_str()) {
            return Ok(exit_status(1));
        }

        if name == "go" {
            let out = invocation
                .args
                .iter()
                .position(|a| a == "-o")
                .and_then(|i| invocation.args.get(i + 1))
                .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "missing -o"))?;
            fs::write(out, vec![0u8; self.compiled_size])?;
        } else {
            let artifact = invocation
                .args
                .first()
                .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "missing artifact"))?;
            fs::write(artifact, vec![1u8; self.compressed_size])?;
        }
        Ok(exit_status(0))
    }
}

/// Serves a fixed archive body and counts requests
#[derive(Clone)]
pub struct MockDownloader {
    body: Option<Vec<u8>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockDownloader {
    /// Serve `body` for every request
    pub fn serving(body: Vec<u8>) -> Self {
        Self {
            body: Some(body),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fail every request as unreachable
    pub fn unreachable() -> Self {
        Self {
            body: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// URLs requested so far
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .expect("MockDownloader lock should never be poisoned in tests")
            .clone()
    }
}

impl Downloader for MockDownloader {
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> io::Result<u64> {
        self.requests
            .lock()
            .expect("MockDownloader lock should never be poisoned in tests")
            .push(url.to_string());
        match &self.body {
            Some(body) => {
                sink.write_all(body)?;
                Ok(body.len() as u64)
            }
            None => Err(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            )),
        }
    }
}
