/*!
 * Reporting functionality for projdump
 *
 * Renders a summary of a snapshot run using the tabled library.
 */

use std::collections::HashMap;
use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::scanner::ScannerStatistics;
use crate::utils::format_file_size;
use crate::writer::WriteSummary;

/// Information about a file in the report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReportInfo {
    /// Number of lines in the file
    pub lines: usize,
    /// Number of characters in the file
    pub chars: usize,
    /// Size of the file content in bytes
    pub bytes: u64,
}

/// Statistics for a snapshot run
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Output file path
    pub output_file: String,
    /// Time taken to scan and write
    pub duration: Duration,
    /// Files written to the document
    pub files_included: usize,
    /// Files skipped because reading failed
    pub files_failed: usize,
    /// Listed files that failed the decode probe
    pub files_binary: usize,
    /// Listed files rejected by extension
    pub files_excluded_extension: usize,
    /// Directories pruned during the walk
    pub dirs_pruned: usize,
    /// Total number of lines
    pub total_lines: usize,
    /// Total number of characters
    pub total_chars: usize,
    /// Details for each included file
    pub file_details: HashMap<String, FileReportInfo>,
}

impl ScanReport {
    /// Combine writer and scanner totals into a report
    pub fn new(
        output_file: String,
        duration: Duration,
        summary: WriteSummary,
        stats: &ScannerStatistics,
    ) -> Self {
        Self {
            output_file,
            duration,
            files_included: summary.files_included,
            files_failed: summary.files_failed,
            files_binary: stats.files_binary,
            files_excluded_extension: stats.files_excluded_extension,
            dirs_pruned: stats.dirs_pruned,
            total_lines: summary.total_lines,
            total_chars: summary.total_chars,
            file_details: summary.file_details,
        }
    }
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for run results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate a report string
    pub fn generate_report(&self, report: &ScanReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &ScanReport) {
        println!("\n{}", self.generate_report(report));
    }

    // Keep the tail of long paths, which carries the file name
    fn format_path(&self, path: &str, max_len: usize) -> String {
        let count = path.chars().count();
        if count <= max_len {
            return path.to_string();
        }
        let tail: String = path.chars().skip(count - (max_len - 3)).collect();
        format!("...{}", tail)
    }

    fn create_summary_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let rows = vec![
            SummaryRow {
                key: "📂 Output File".to_string(),
                value: report.output_file.clone(),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "📄 Files Included".to_string(),
                value: self.format_number(report.files_included),
            },
            SummaryRow {
                key: "⚠️ Read Failures".to_string(),
                value: self.format_number(report.files_failed),
            },
            SummaryRow {
                key: "🧱 Binary Skipped".to_string(),
                value: self.format_number(report.files_binary),
            },
            SummaryRow {
                key: "🚫 Extension Skipped".to_string(),
                value: self.format_number(report.files_excluded_extension),
            },
            SummaryRow {
                key: "✂️ Dirs Pruned".to_string(),
                value: self.format_number(report.dirs_pruned),
            },
            SummaryRow {
                key: "📝 Total Lines".to_string(),
                value: self.format_number(report.total_lines),
            },
            SummaryRow {
                key: "📦 LLM Tokens".to_string(),
                value: format!(
                    "{} tokens (estimated)",
                    self.format_number(report.total_chars / 4)
                ),
            },
        ];

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn create_files_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Size")]
            size: String,

            #[tabled(rename = "Lines")]
            lines: String,

            #[tabled(rename = "Est. Tokens")]
            tokens: String,
        }

        // Largest first; ties broken by path so the table is stable
        let mut files: Vec<_> = report.file_details.iter().collect();
        files.sort_by(|(pa, a), (pb, b)| b.chars.cmp(&a.chars).then_with(|| pa.cmp(pb)));

        let shown = if files.len() > 15 { &files[..10] } else { &files[..] };

        let rows: Vec<FileRow> = shown
            .iter()
            .map(|(path, info)| FileRow {
                path: self.format_path(path, 60),
                size: format_file_size(info.bytes),
                lines: self.format_number(info.lines),
                tokens: self.format_number(info.chars / 4),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn generate_console_report(&self, report: &ScanReport) -> String {
        let summary_table = self.create_summary_table(report);
        let files_table = self.create_files_table(report);

        let summary_title = "✅  SNAPSHOT COMPLETE";
        let files_title = if report.file_details.len() > 15 {
            "📋  TOP 10 LARGEST FILES BY CHARACTER COUNT  📋"
        } else {
            "📋  INCLUDED FILES"
        };

        format!(
            "{}\n{}\n\n{}\n{}",
            files_title, files_table, summary_title, summary_table
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with(files: usize) -> ScanReport {
        let file_details = (0..files)
            .map(|i| {
                (
                    format!("client/src/file_{:02}.ts", i),
                    FileReportInfo {
                        lines: i + 1,
                        chars: (i + 1) * 100,
                        bytes: ((i + 1) * 1024) as u64,
                    },
                )
            })
            .collect();
        ScanReport {
            output_file: "/tmp/project_code.xml".to_string(),
            duration: Duration::from_millis(12),
            files_included: files,
            files_failed: 1,
            files_binary: 2,
            files_excluded_extension: 3,
            dirs_pruned: 4,
            total_lines: 1_500,
            total_chars: 40_000,
            file_details,
        }
    }

    #[test]
    fn test_format_number() {
        let reporter = Reporter::new(ReportFormat::ConsoleTable);
        assert_eq!(reporter.format_number(999), "999");
        assert_eq!(reporter.format_number(1_500), "1.5K");
        assert_eq!(reporter.format_number(2_000_000), "2.0M");
    }

    #[test]
    fn test_format_path_keeps_tail() {
        let reporter = Reporter::new(ReportFormat::ConsoleTable);
        assert_eq!(reporter.format_path("server/src/lib.rs", 60), "server/src/lib.rs");
        let long = format!("{}/lib.rs", "a".repeat(80));
        let shown = reporter.format_path(&long, 20);
        assert_eq!(shown.chars().count(), 20);
        assert!(shown.starts_with("..."));
        assert!(shown.ends_with("/lib.rs"));
    }

    #[test]
    fn test_report_lists_all_small_sets() {
        let reporter = Reporter::new(ReportFormat::ConsoleTable);
        let text = reporter.generate_report(&report_with(3));
        assert!(text.contains("INCLUDED FILES"));
        assert!(text.contains("client/src/file_00.ts"));
        assert!(text.contains("client/src/file_02.ts"));
        assert!(text.contains("3.00 KB"));
        assert!(text.contains("10.0K tokens (estimated)"));
    }

    #[test]
    fn test_report_truncates_large_sets() {
        let reporter = Reporter::new(ReportFormat::ConsoleTable);
        let text = reporter.generate_report(&report_with(20));
        assert!(text.contains("TOP 10 LARGEST FILES"));
        assert!(text.contains("client/src/file_19.ts"));
        assert!(!text.contains("client/src/file_00.ts"));
    }
}
