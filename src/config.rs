//! Dashboard settings loaded from TOML
//!
//! Missing keys fall back to the defaults of the interactive controls.

use std::fs;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::render::{Backend, Color, DotColors};
use crate::PiError;

/// Term-count control for the series approximations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesSettings {
    pub min_terms: u64,
    pub max_terms: u64,
    pub default_terms: u64,
    pub step: u64,
}

impl Default for SeriesSettings {
    fn default() -> Self {
        Self {
            min_terms: 0,
            max_terms: 400,
            default_terms: 100,
            step: 20,
        }
    }
}

impl SeriesSettings {
    pub fn validate(&self) -> Result<(), PiError> {
        if self.max_terms < self.min_terms {
            return Err(PiError::InvalidConfig(
                "series.max_terms must be greater than or equal to series.min_terms".to_string(),
            ));
        }

        if !(self.min_terms..=self.max_terms).contains(&self.default_terms) {
            return Err(PiError::InvalidConfig(
                "series.default_terms must lie within [min_terms, max_terms]".to_string(),
            ));
        }

        if self.step == 0 {
            return Err(PiError::InvalidConfig(
                "series.step must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn clamp(&self, terms: u64) -> u64 {
        terms.clamp(self.min_terms, self.max_terms)
    }
}

/// Point-count control and plot options for the Monte Carlo estimator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonteCarloSettings {
    pub min_points: usize,
    pub max_points: usize,
    pub initial_points: usize,
    pub step: usize,
    pub seed: Option<i64>,
    pub backend: String,
    pub show_arc: bool,
    pub inside_color: String,
    pub outside_color: String,
}

impl Default for MonteCarloSettings {
    fn default() -> Self {
        Self {
            min_points: 1,
            max_points: 10_000,
            initial_points: 10,
            step: 500,
            seed: None,
            backend: Backend::Plotly.name().to_string(),
            show_arc: true,
            inside_color: "red".to_string(),
            outside_color: "blue".to_string(),
        }
    }
}

impl MonteCarloSettings {
    pub fn validate(&self) -> Result<(), PiError> {
        if self.min_points == 0 {
            return Err(PiError::InvalidConfig(
                "monte_carlo.min_points must be greater than zero".to_string(),
            ));
        }

        if self.max_points < self.min_points {
            return Err(PiError::InvalidConfig(
                "monte_carlo.max_points must be greater than or equal to monte_carlo.min_points"
                    .to_string(),
            ));
        }

        if !(self.min_points..=self.max_points).contains(&self.initial_points) {
            return Err(PiError::InvalidConfig(
                "monte_carlo.initial_points must lie within [min_points, max_points]".to_string(),
            ));
        }

        if self.step == 0 {
            return Err(PiError::InvalidConfig(
                "monte_carlo.step must be greater than zero".to_string(),
            ));
        }

        self.backend()
            .map_err(|e| PiError::InvalidConfig(format!("monte_carlo.backend: {e}")))?;
        self.dot_colors()
            .map_err(|e| PiError::InvalidConfig(format!("monte_carlo colors: {e}")))?;

        Ok(())
    }

    pub fn backend(&self) -> Result<Backend, PiError> {
        self.backend.parse()
    }

    pub fn dot_colors(&self) -> Result<DotColors, PiError> {
        let inside: Color = self.inside_color.parse()?;
        let outside: Color = self.outside_color.parse()?;
        Ok(DotColors::new(inside, outside))
    }

    /// Point count actually sampled for a control value.
    ///
    /// The control can reach 0, which is not a valid point count; it maps to
    /// 1, and anything else is clamped into the configured range.
    pub fn effective_points(&self, requested: usize) -> usize {
        requested.max(1).clamp(self.min_points, self.max_points)
    }

    /// Uniform point count in `[min_points, max_points]`.
    pub fn random_points<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.gen_range(self.min_points..=self.max_points)
    }
}

/// Dashboard controls
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub series: SeriesSettings,
    pub monte_carlo: MonteCarloSettings,
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<(), PiError> {
        self.series.validate()?;
        self.monte_carlo.validate()?;
        Ok(())
    }

    pub fn from_toml(raw: &str) -> Result<Self, PiError> {
        let config: DashboardConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, PiError> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }
}
