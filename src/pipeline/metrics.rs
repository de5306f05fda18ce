//! Artifact size metrics

use std::fmt;

use crate::fmt::format_mib;

/// Artifact size before and after compression
///
/// ```
/// use gopack::pipeline::SizeMetrics;
///
/// let metrics = SizeMetrics::new(10 * 1024 * 1024, 3 * 1024 * 1024);
/// assert_eq!(metrics.reduction_percent().round(), 70.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeMetrics {
    /// Size after compilation (bytes)
    pub before_bytes: u64,
    /// Size after compression (bytes)
    pub after_bytes: u64,
}

impl SizeMetrics {
    /// Pair the post-compile and post-compress samples
    pub fn new(before_bytes: u64, after_bytes: u64) -> Self {
        Self {
            before_bytes,
            after_bytes,
        }
    }

    /// Size reduction in bytes (negative if the artifact grew)
    pub fn reduction_bytes(&self) -> i64 {
        self.before_bytes as i64 - self.after_bytes as i64
    }

    /// Size reduction as percentage of the compiled size
    pub fn reduction_percent(&self) -> f64 {
        if self.before_bytes == 0 {
            return 0.0;
        }
        (self.reduction_bytes() as f64 / self.before_bytes as f64) * 100.0
    }

    /// Compressed size as a fraction of the compiled size
    pub fn ratio(&self) -> f64 {
        if self.before_bytes == 0 {
            return 1.0;
        }
        self.after_bytes as f64 / self.before_bytes as f64
    }
}

impl fmt::Display for SizeMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({:.1}% reduction)",
            format_mib(self.before_bytes),
            format_mib(self.after_bytes),
            self.reduction_percent()
        )
    }
}
