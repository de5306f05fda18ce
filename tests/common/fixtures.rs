//! Test fixture helpers for Go sources and tool archives

#![allow(dead_code)]

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Re-export anyhow for convenience
pub use anyhow;

/// Minimal Go program
pub const HELLO_GO: &str = r#"package main

import "fmt"

func main() {
	fmt.Println("hello")
}
"#;

/// Creates a workspace holding `<name>.go`
///
/// # Returns
///
/// A tuple of (TempDir, PathBuf to the source) - the TempDir must be kept alive
pub fn go_source(name: &str) -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let source = temp_dir.path().join(format!("{}.go", name));
    fs::write(&source, HELLO_GO)?;
    Ok((temp_dir, source))
}

/// Builds a zip archive from `(entry name, contents)` pairs
///
/// Entry names ending in `/` become directory entries.
pub fn zip_archive(entries: &[(&str, &[u8])]) -> anyhow::Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().unix_permissions(0o755);

    for (name, contents) in entries {
        if let Some(dir) = name.strip_suffix('/') {
            writer.add_directory(dir, options)?;
        } else {
            writer.start_file(*name, options)?;
            writer.write_all(contents)?;
        }
    }

    Ok(writer.finish()?.into_inner())
}

/// Archive laid out like an upx release: the binary in a versioned folder
/// next to docs
pub fn upx_release_archive() -> anyhow::Result<Vec<u8>> {
    zip_archive(&[
        ("upx-3.95-win64/", b""),
        ("upx-3.95-win64/README", b"readme"),
        ("upx-3.95-win64/upx.exe", b"upx binary"),
        ("upx-3.95-win64/upx.1", b"manual"),
    ])
}

/// Pre-populates the tool cache under `home`
pub fn cache_tool(home: &Path) -> anyhow::Result<PathBuf> {
    let tool = home.join("upx").join("upx.exe");
    fs::create_dir_all(home.join("upx"))?;
    fs::write(&tool, b"cached upx")?;
    Ok(tool)
}
