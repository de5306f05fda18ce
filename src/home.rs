//! Home directory resolution
//!
//! The tool cache lives under the user's home. Lookup order:
//! `HOMEDRIVE` + `HOMEPATH`, then `USERPROFILE`, then the platform home
//! directory reported by `dirs`.

use std::path::PathBuf;

/// Resolve the home directory from the process environment
pub fn resolve_home() -> Option<PathBuf> {
    resolve_home_with(|key| std::env::var(key).ok(), dirs::home_dir)
}

/// Resolve the home directory using `lookup` for environment variables
///
/// Empty variables count as unset. `fallback` is only consulted when no
/// variable resolves.
pub fn resolve_home_with<L, F>(lookup: L, fallback: F) -> Option<PathBuf>
where
    L: Fn(&str) -> Option<String>,
    F: FnOnce() -> Option<PathBuf>,
{
    let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let (Some(drive), Some(path)) = (var("HOMEDRIVE"), var("HOMEPATH")) {
        return Some(PathBuf::from(format!("{}{}", drive, path)));
    }
    if let Some(profile) = var("USERPROFILE") {
        return Some(PathBuf::from(profile));
    }
    fallback().filter(|p| !p.as_os_str().is_empty())
}
