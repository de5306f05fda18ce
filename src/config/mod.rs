//! Configuration for gopack
//!
//! This module provides:
//! - .gopack.toml config file support
//! - Overlaying file settings on the built-in pipeline defaults

pub mod file;
pub mod loader;

pub use file::{ConfigFile, CONFIG_FILE_NAME};
pub use loader::ConfigLoader;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_name_constant_is_correct() {
        assert_eq!(CONFIG_FILE_NAME, ".gopack.toml");
    }
}
