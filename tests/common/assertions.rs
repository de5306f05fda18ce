//! Test assertion helpers

use std::path::Path;

/// Assert that two floating-point values are approximately equal
///
/// Use this instead of `assert_eq!` for f64 comparisons such as reduction
/// percentages.
#[allow(dead_code)]
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff < epsilon,
        "Float values not approximately equal:\n  actual: {}\n  expected: {}\n  diff: {} (epsilon: {})",
        actual, expected, diff, epsilon
    );
}

/// Assert that `path` is a regular file of exactly `expected_bytes`
#[allow(dead_code)]
pub fn assert_file_size(path: &Path, expected_bytes: u64) {
    let metadata = std::fs::metadata(path)
        .unwrap_or_else(|e| panic!("{} should exist: {}", path.display(), e));
    assert!(metadata.is_file(), "{} should be a file", path.display());
    assert_eq!(
        metadata.len(),
        expected_bytes,
        "unexpected size for {}",
        path.display()
    );
}

/// Assert that `dir` contains exactly the given entry names
#[allow(dead_code)]
pub fn assert_dir_entries(dir: &Path, expected: &[&str]) {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("{} should be readable: {}", dir.display(), e))
        .map(|entry| {
            entry
                .expect("directory entry should be readable")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();

    let mut expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    expected.sort();

    assert_eq!(names, expected, "unexpected entries in {}", dir.display());
}
