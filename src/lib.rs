//! Catalog EDA Library
//!
//! Exploratory data analysis over tabular catalog exports (titles, types,
//! countries, ratings, durations, dates added) built with Rust and Polars.
//!
//! # Overview
//!
//! The library is a single forward pipeline:
//!
//! - **Loader**: reads a delimited (optionally compressed) export into a
//!   DataFrame, with fallback parsing strategies
//! - **Normalizer**: derives a fixed set of columns (parsed dates, filled
//!   categorical gaps, duration split, genre lists), guarded per source
//!   column so partial exports degrade instead of failing
//! - **Deduplicator**: removes rows duplicated across all scalar columns,
//!   keeping the first occurrence in order
//! - **Chart renderer**: six independent descriptive charts written as PNGs
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use catalog_eda::{AnalysisConfig, AnalysisPipeline, loader};
//! use std::path::Path;
//!
//! let df = loader::load_catalog(Path::new("catalog.csv"))?;
//!
//! let config = AnalysisConfig::builder()
//!     .output_dir("charts")
//!     .top_countries(10)
//!     .build()?;
//!
//! let summary = AnalysisPipeline::new(config)?.run(df)?;
//! println!("{} charts written", summary.charts_written.len());
//! ```

pub mod charts;
pub mod config;
pub mod dedup;
pub mod error;
pub mod loader;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod schema;

// Re-exports for convenient access
pub use charts::{ChartOutcome, ChartRenderer};
pub use config::{AnalysisConfig, AnalysisConfigBuilder, ConfigValidationError};
pub use dedup::{drop_duplicate_rows, LIST_COLUMNS};
pub use error::{AnalysisError, Result as AnalysisResult};
pub use loader::load_catalog;
pub use normalize::{Normalizer, FILLED_COLUMNS, UNKNOWN};
pub use pipeline::AnalysisPipeline;
pub use report::AnalysisSummary;
pub use schema::{CatalogSchema, EXPECTED_COLUMNS};
