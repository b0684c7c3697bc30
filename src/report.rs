//! Run summary emitted at the end of an analysis.

use crate::charts::ChartOutcome;
use serde::Serialize;

/// Summary of one analysis run, serializable for `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    /// Column names detected in the input, in file order.
    pub columns: Vec<String>,
    /// Row count before deduplication.
    pub rows_before: usize,
    /// Row count after deduplication.
    pub rows_after: usize,
    /// Duplicate rows removed (0 when deduplication is disabled).
    pub duplicates_removed: usize,
    /// Human-readable log of normalization actions.
    pub normalization_actions: Vec<String>,
    /// Paths of the charts written.
    pub charts_written: Vec<String>,
    /// Names of charts skipped due to absent columns or empty data.
    pub charts_skipped: Vec<String>,
    /// Wall-clock duration of the pipeline in milliseconds.
    pub duration_ms: u128,
}

impl AnalysisSummary {
    pub fn from_parts(
        columns: Vec<String>,
        rows_before: usize,
        rows_after: usize,
        duplicates_removed: usize,
        normalization_actions: Vec<String>,
        charts: ChartOutcome,
        duration_ms: u128,
    ) -> Self {
        Self {
            columns,
            rows_before,
            rows_after,
            duplicates_removed,
            normalization_actions,
            charts_written: charts.written,
            charts_skipped: charts.skipped,
            duration_ms,
        }
    }
}
