//! Metric extraction from nosqlbench output.
//!
//! The final summary table looks like:
//!
//! ```text
//! | req/s    |      51200    |      53401    |       55012   |
//! ```
//!
//! Columns are minimal, average and maximum; the default column picks the average.

use std::path::Path;

use crate::error::{ExportError, Result};

pub const DEFAULT_MARKER: &str = "| req/s";
pub const DEFAULT_COLUMN: usize = 3;

/// Finds the first marker line in a report and pulls out one `|` column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportParser {
    pub marker: String,
    pub column: usize,
}

impl Default for ReportParser {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            column: DEFAULT_COLUMN,
        }
    }
}

impl ReportParser {
    pub fn new(marker: impl Into<String>, column: usize) -> Self {
        Self {
            marker: marker.into(),
            column,
        }
    }

    /// Invalid UTF-8 is replaced rather than rejected; only the marker line matters.
    pub async fn parse_file(&self, path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ExportError::ReadReport {
                path: path.to_path_buf(),
                source,
            })?;
        self.parse(&String::from_utf8_lossy(&bytes))
    }

    /// Return the trimmed column of the first line containing the marker.
    /// Later matching lines are never looked at.
    pub fn parse(&self, contents: &str) -> Result<String> {
        let (idx, line) = contents
            .lines()
            .enumerate()
            .find(|(_, line)| line.contains(&self.marker))
            .ok_or_else(|| ExportError::MetricNotFound {
                marker: self.marker.clone(),
            })?;
        let line_no = idx + 1;

        tracing::debug!(line_no, line, "matched report line");

        let columns: Vec<&str> = line.split('|').collect();
        let value = columns
            .get(self.column)
            .ok_or_else(|| ExportError::ColumnOutOfRange {
                column: self.column,
                found: columns.len(),
                line_no,
                line: line.to_string(),
            })?
            .trim();

        if value.is_empty() {
            return Err(ExportError::EmptyMetric {
                column: self.column,
                line_no,
            });
        }

        Ok(value.to_string())
    }
}
