//! Configuration types for the catalog analysis pipeline.
//!
//! This module provides configuration options using the builder pattern
//! for flexible and ergonomic pipeline setup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the analysis pipeline.
///
/// Use [`AnalysisConfig::builder()`] to create a new configuration
/// with a fluent API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Output directory for rendered charts.
    /// Default: "charts"
    pub output_dir: PathBuf,

    /// Number of countries shown in the top-countries chart.
    /// Default: 10
    pub top_countries: usize,

    /// Bucket count for the release-year histogram.
    /// Default: 20
    pub release_year_bins: usize,

    /// Bucket count for the movie-duration histogram.
    /// Default: 30
    pub duration_bins: usize,

    /// Whether to remove duplicate rows before rendering.
    /// Default: true
    pub remove_duplicates: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("charts"),
            top_countries: 10,
            release_year_bins: 20,
            duration_bins: 30,
            remove_duplicates: true,
        }
    }
}

impl AnalysisConfig {
    /// Create a new configuration builder.
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.top_countries == 0 {
            return Err(ConfigValidationError::InvalidCount {
                field: "top_countries".to_string(),
                value: self.top_countries,
            });
        }
        if self.release_year_bins == 0 {
            return Err(ConfigValidationError::InvalidCount {
                field: "release_year_bins".to_string(),
                value: self.release_year_bins,
            });
        }
        if self.duration_bins == 0 {
            return Err(ConfigValidationError::InvalidCount {
                field: "duration_bins".to_string(),
                value: self.duration_bins,
            });
        }
        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid value for '{field}': {value} (must be at least 1)")]
    InvalidCount { field: String, value: usize },
}

/// Builder for [`AnalysisConfig`].
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfigBuilder {
    config: AnalysisConfig,
}

impl AnalysisConfigBuilder {
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    pub fn top_countries(mut self, count: usize) -> Self {
        self.config.top_countries = count;
        self
    }

    pub fn release_year_bins(mut self, bins: usize) -> Self {
        self.config.release_year_bins = bins;
        self
    }

    pub fn duration_bins(mut self, bins: usize) -> Self {
        self.config.duration_bins = bins;
        self
    }

    pub fn remove_duplicates(mut self, enabled: bool) -> Self {
        self.config.remove_duplicates = enabled;
        self
    }

    /// Build the configuration, validating it first.
    pub fn build(self) -> Result<AnalysisConfig, ConfigValidationError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AnalysisConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = AnalysisConfig::builder()
            .output_dir("out")
            .top_countries(5)
            .duration_bins(15)
            .remove_duplicates(false)
            .build()
            .unwrap();

        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.top_countries, 5);
        assert_eq!(config.duration_bins, 15);
        assert!(!config.remove_duplicates);
        // untouched fields keep their defaults
        assert_eq!(config.release_year_bins, 20);
    }

    #[test]
    fn test_zero_bins_rejected() {
        let result = AnalysisConfig::builder().release_year_bins(0).build();
        assert!(result.is_err());

        let result = AnalysisConfig::builder().top_countries(0).build();
        assert!(result.is_err());
    }
}
