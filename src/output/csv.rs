//! CSV output formatting
//!
//! This module provides CSV output for policy comparison results.
//! CSV format is ideal for analysis in Excel, Python pandas, R, and other tools.
//!
//! One row per policy. The visit sequence is embedded in the last
//! column with `;` separators so the row stays a single CSV record.

use crate::metrics::PolicyReport;
use crate::Result;
use anyhow::Context;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// CSV writer for policy comparison results
pub struct CsvWriter {
    file: File,
}

impl CsvWriter {
    /// Create a new CSV writer and emit the header row
    pub fn new(path: &Path) -> Result<Self> {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create CSV output file: {}", path.display()))?;

        writeln!(
            file,
            "algorithm,total_movement,avg_seek,max_seek,std_dev_seek,throughput,avg_response_time_ms,visit_sequence"
        )?;

        Ok(Self { file })
    }

    /// Append one policy's results as a row
    pub fn append_report(&mut self, report: &PolicyReport) -> Result<()> {
        let throughput = if report.throughput.is_finite() {
            format!("{:.4}", report.throughput)
        } else {
            "Inf".to_string()
        };
        let sequence = report
            .sequence
            .iter()
            .map(|cylinder| cylinder.to_string())
            .collect::<Vec<_>>()
            .join(";");

        writeln!(
            self.file,
            "{},{},{:.2},{},{:.2},{},{:.2},{}",
            report.policy.name(),
            report.total_movement,
            report.avg_seek,
            report.max_seek,
            report.std_dev_seek,
            throughput,
            report.avg_response_time_ms,
            sequence,
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{evaluate, DiskParams};
    use crate::sched::Policy;
    use std::fs;

    #[test]
    fn test_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        let params = DiskParams::default();
        let mut writer = CsvWriter::new(&path).unwrap();
        writer
            .append_report(&evaluate(Policy::Fcfs, vec![50, 95, 10], 2, &params))
            .unwrap();
        drop(writer);

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "algorithm,total_movement,avg_seek,max_seek,std_dev_seek,throughput,avg_response_time_ms,visit_sequence"
        );
        assert!(lines[1].starts_with("FCFS,130,65.00,85,"));
        assert!(lines[1].ends_with(",50;95;10"));
    }

    #[test]
    fn test_infinite_throughput_renders_as_inf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        let params = DiskParams::default();
        let mut writer = CsvWriter::new(&path).unwrap();
        writer
            .append_report(&evaluate(Policy::Sstf, vec![50, 50], 1, &params))
            .unwrap();
        drop(writer);

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.lines().nth(1).unwrap().contains(",Inf,"));
    }

    #[test]
    fn test_create_fails_for_missing_directory() {
        let result = CsvWriter::new(Path::new("/nonexistent/dir/report.csv"));
        assert!(result.is_err());
    }
}
