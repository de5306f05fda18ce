//! Build result formatting and display

use std::path::Path;

use console::style;

use super::metrics::SizeMetrics;
use crate::fmt::{format_bytes, CHART, SPARKLES};

/// Formats and displays build results
pub struct ResultFormatter;

impl ResultFormatter {
    /// Render the size summary lines for an artifact
    pub fn summary_lines(metrics: &SizeMetrics, artifact: &Path) -> Vec<String> {
        let mut lines = vec![
            format!(
                "   {} Compiled:   {}",
                style("→").dim(),
                style(format_bytes(metrics.before_bytes)).yellow()
            ),
            format!(
                "   {} Compressed: {}",
                style("→").dim(),
                style(format_bytes(metrics.after_bytes)).green().bold()
            ),
        ];

        let reduction = metrics.reduction_bytes();
        if reduction > 0 {
            lines.push(format!(
                "   {} Saved:      {} ({:.1}% reduction)",
                style("→").dim(),
                style(format_bytes(reduction as u64)).green().bold(),
                metrics.reduction_percent()
            ));
        } else {
            lines.push(format!("   {} No size reduction", style("→").dim()));
        }

        lines.push(format!(
            "   {} Artifact:   {}",
            style("→").dim(),
            style(artifact.display()).cyan()
        ));
        lines
    }

    /// Print a formatted summary of build size metrics
    pub fn print_summary(metrics: &SizeMetrics, artifact: &Path) {
        println!("\n{} {}", CHART, style("Build Summary").bold());
        for line in Self::summary_lines(metrics, artifact) {
            println!("{}", line);
        }
        println!(
            "\n{} {} Build complete!",
            SPARKLES,
            style("Success!").green().bold()
        );
    }
}
