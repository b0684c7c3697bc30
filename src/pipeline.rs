//! The analysis pipeline: Normalizer -> Deduplicator -> Chart renderer.
//!
//! A single forward pass over one in-memory table. Nothing is mutated after
//! deduplication; the renderers only read.

use crate::charts::ChartRenderer;
use crate::config::AnalysisConfig;
use crate::dedup::drop_duplicate_rows;
use crate::error::{AnalysisError, Result};
use crate::normalize::Normalizer;
use crate::report::AnalysisSummary;
use polars::prelude::*;
use std::time::Instant;
use tracing::info;

/// Runs the full analysis over a loaded catalog.
pub struct AnalysisPipeline {
    config: AnalysisConfig,
}

impl AnalysisPipeline {
    /// Create a pipeline with a validated configuration.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| AnalysisError::InvalidConfig(e.to_string()))?;
        Ok(Self { config })
    }

    /// Normalize, deduplicate, and render charts for a catalog DataFrame.
    pub fn run(&self, df: DataFrame) -> Result<AnalysisSummary> {
        let started = Instant::now();
        let columns: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        info!("Analyzing catalog: {} rows x {} columns", df.height(), df.width());

        let mut df = df;
        let normalization_actions = Normalizer::normalize(&mut df)?;
        let rows_before = df.height();

        let duplicates_removed = if self.config.remove_duplicates {
            let (deduped, removed) = drop_duplicate_rows(&df)?;
            df = deduped;
            removed
        } else {
            0
        };
        let rows_after = df.height();

        std::fs::create_dir_all(&self.config.output_dir)?;
        let charts = ChartRenderer::new(&self.config).render_all(&df)?;

        Ok(AnalysisSummary::from_parts(
            columns,
            rows_before,
            rows_after,
            duplicates_removed,
            normalization_actions,
            charts,
            started.elapsed().as_millis(),
        ))
    }
}
