//! Shared formatting utilities for size display and console output

use console::Emoji;

/// Hammer emoji for build operations
pub const HAMMER: Emoji = Emoji("🔨", ">");

/// Package emoji for tool download operations
pub const PACKAGE: Emoji = Emoji("📦", "#");

/// Sparkles emoji for completion/success
pub const SPARKLES: Emoji = Emoji("✨", "*");

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Chart emoji for metrics/statistics
pub const CHART: Emoji = Emoji("📊", "~");

const KB: u64 = 1024;
const MB: u64 = KB * 1024;

/// Format bytes as human-readable size string
///
/// # Examples
///
/// ```
/// use gopack::fmt::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1_048_576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Format bytes as mebibytes with two decimals, the unit used in log lines
///
/// ```
/// use gopack::fmt::format_mib;
///
/// assert_eq!(format_mib(3 * 1024 * 1024), "3.00M");
/// ```
pub fn format_mib(bytes: u64) -> String {
    format!("{:.2}M", bytes as f64 / MB as f64)
}
