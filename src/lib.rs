//! pi-approx - approximations of pi
//!
//! Two truncated infinite series (Leibniz, Euler) and a Monte Carlo
//! estimator that samples the unit square and counts the points falling
//! inside the unit quarter-circle. The estimator is reproducible: a given
//! seed always yields the same sample stream, and seed 42 matches the
//! reference PCG64 stream draw for draw.

pub mod config;
pub mod coords;
pub mod metrics;
pub mod monte_carlo;
pub mod output;
pub mod params;
pub mod render;
pub mod seed;
pub mod series;

use thiserror::Error;

// Re-export main types
pub use config::{DashboardConfig, MonteCarloSettings, SeriesSettings};
pub use coords::{create_coords, Coordinate, CoordinateStream};
pub use metrics::{distance, distance_from_origin, pi_error, relative_error};
pub use monte_carlo::{PiMonteCarlo, RunSummary};
pub use params::Points;
pub use render::{
    Backend, Color, ConvergenceChart, DotColors, Figure, PlotStyle, Renderer, ScatterData,
};
pub use series::{convergence_table, euler, leibniz, ConvergenceRows, Series, SeriesRow};

#[derive(Debug, Error)]
pub enum PiError {
    #[error("{field} must be {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },
    #[error("{field} {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
    #[error("backend must be plotters or plotly, got {0:?}")]
    UnknownBackend(String),
    #[error("relative error is undefined for a zero reference value")]
    ZeroReference,
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("render failed: {0}")]
    Render(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl PiError {
    /// The argument had the wrong type altogether.
    pub fn is_type_error(&self) -> bool {
        matches!(self, PiError::InvalidType { .. })
    }

    /// The argument had an acceptable type but an unacceptable value.
    pub fn is_value_error(&self) -> bool {
        matches!(
            self,
            PiError::InvalidValue { .. }
                | PiError::UnknownBackend(_)
                | PiError::ZeroReference
                | PiError::InvalidColor(_)
        )
    }
}
