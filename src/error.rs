//! Custom error types for the catalog analysis pipeline.
//!
//! Two tiers of failure exist: loading the dataset is fatal (a one-shot
//! analysis run has nothing to retry), while malformed individual values are
//! absorbed into per-row nulls during normalization and never surface here.

use thiserror::Error;

/// The main error type for the analysis pipeline.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Column was not found in the dataset.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The input file could not be read as tabular data.
    #[error("Failed to load dataset: {0}")]
    LoadFailed(String),

    /// A chart could not be written to disk.
    #[error("Failed to render chart '{chart}': {reason}")]
    ChartRender { chart: String, reason: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
