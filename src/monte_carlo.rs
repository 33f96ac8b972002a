//! Monte Carlo estimation of pi
//!
//! Points drawn uniformly from the unit square land inside the unit
//! quarter-circle with probability pi/4, so four times the inside fraction
//! estimates pi.
//!
//! Samples, their classification and the estimate are computed lazily and
//! cached. Every successful change of the point count or seed clears the
//! whole cache before the new value is stored; a rejected change touches
//! nothing.
//!
//! Any integer is accepted as a seed, but a negative one cannot drive the
//! generator. Such an estimator is constructed fine and reports the failure
//! from every accessor that needs samples, leaving the cache empty.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::coords::{create_coords, Coordinate};
use crate::metrics::{distance_from_origin, pi_error, relative_error};
use crate::params::{seed_from_value, Points};
use crate::render::{Backend, DotColors, Figure, PlotStyle, ScatterData};
use crate::PiError;

/// Sample set with its inside/outside classification
#[derive(Debug, Clone)]
struct Samples {
    coords: Vec<Coordinate>,
    /// `true` where the sample lies within distance 1 of the origin
    mask: Vec<bool>,
}

impl Samples {
    fn generate(points: Points, seed: Option<i64>) -> Result<Self, PiError> {
        debug!(points = points.get(), seed = ?seed, "generating samples");
        let coords: Vec<Coordinate> = create_coords(points.get(), seed)?.collect();
        let mask = coords
            .iter()
            .map(|&c| distance_from_origin(c) <= 1.0)
            .collect();
        Ok(Self { coords, mask })
    }

    fn inside(&self) -> usize {
        self.mask.iter().filter(|&&inside| inside).count()
    }
}

/// Derived values, each either absent or computed from the current parameters
#[derive(Debug, Clone, Default)]
struct SampleCache {
    samples: Option<Samples>,
    estimate: Option<f64>,
}

impl SampleCache {
    fn invalidate(&mut self) {
        if self.samples.is_some() || self.estimate.is_some() {
            debug!("invalidating cached samples and estimate");
        }
        self.samples = None;
        self.estimate = None;
    }

    fn is_empty(&self) -> bool {
        self.samples.is_none() && self.estimate.is_none()
    }
}

/// Serializable snapshot of one estimation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub points: usize,
    pub seed: Option<i64>,
    /// Samples within distance 1 of the origin
    pub inside: usize,
    pub estimate: f64,
    /// Relative error of `estimate` against pi
    pub error: f64,
}

/// Pi estimator by quarter-circle sampling
#[derive(Debug, Clone)]
pub struct PiMonteCarlo {
    /// Number of samples drawn
    points: Points,
    /// Generator seed; `None` samples from fresh OS entropy on every regeneration
    seed: Option<i64>,
    /// Samples and estimate for the current `points` and `seed`
    cache: SampleCache,
}

impl PiMonteCarlo {
    /// Create an estimator; fails if `points` is not positive.
    pub fn new(points: i64, seed: Option<i64>) -> Result<Self, PiError> {
        Ok(Self::with_points(Points::new(points)?, seed))
    }

    /// Create an estimator from an already validated point count.
    pub fn with_points(points: Points, seed: Option<i64>) -> Self {
        Self {
            points,
            seed,
            cache: SampleCache::default(),
        }
    }

    /// Create an estimator from untyped parameters.
    ///
    /// `points` must be a positive integer and `seed` either `null` or an
    /// integer. Type mismatches are reported as [`PiError::InvalidType`],
    /// bad values as [`PiError::InvalidValue`].
    pub fn from_values(points: &Value, seed: &Value) -> Result<Self, PiError> {
        let points = Points::from_value(points)?;
        let seed = seed_from_value(seed)?;
        Ok(Self::with_points(points, seed))
    }

    /// Current number of sample points.
    pub fn points(&self) -> usize {
        self.points.get()
    }

    /// Current seed, `None` when unseeded.
    pub fn seed(&self) -> Option<i64> {
        self.seed
    }

    /// Change the point count, clearing the cache; fails if not positive.
    pub fn set_points(&mut self, points: i64) -> Result<(), PiError> {
        let points = Points::new(points)?;
        self.commit_points(points);
        Ok(())
    }

    pub fn set_points_value(&mut self, points: &Value) -> Result<(), PiError> {
        let points = Points::from_value(points)?;
        self.commit_points(points);
        Ok(())
    }

    /// Change the seed, clearing the cache.
    pub fn set_seed(&mut self, seed: Option<i64>) {
        self.cache.invalidate();
        self.seed = seed;
    }

    pub fn set_seed_value(&mut self, seed: &Value) -> Result<(), PiError> {
        let seed = seed_from_value(seed)?;
        self.set_seed(seed);
        Ok(())
    }

    fn commit_points(&mut self, points: Points) {
        self.cache.invalidate();
        self.points = points;
    }

    /// Whether any derived value is currently cached.
    pub fn is_cached(&self) -> bool {
        !self.cache.is_empty()
    }

    fn samples(&mut self) -> Result<&Samples, PiError> {
        let samples = match self.cache.samples.take() {
            Some(samples) => samples,
            None => Samples::generate(self.points, self.seed)?,
        };
        Ok(&*self.cache.samples.insert(samples))
    }

    /// Sample coordinates, generated on first use and cached afterwards.
    pub fn coordinates(&mut self) -> Result<&[Coordinate], PiError> {
        Ok(&self.samples()?.coords)
    }

    /// Inside/outside classification of [`coordinates`](Self::coordinates).
    pub fn mask(&mut self) -> Result<&[bool], PiError> {
        Ok(&self.samples()?.mask)
    }

    /// Number of samples within distance 1 of the origin.
    pub fn count_inside(&mut self) -> Result<usize, PiError> {
        Ok(self.samples()?.inside())
    }

    /// Pi estimate `4 * inside / points`, cached.
    pub fn estimate(&mut self) -> Result<f64, PiError> {
        if let Some(estimate) = self.cache.estimate {
            trace!(estimate, "estimate cache hit");
            return Ok(estimate);
        }

        let area = self.count_inside()? as f64 / self.points.get() as f64;
        let estimate = area * 4.0;
        debug!(points = self.points.get(), estimate, "estimated pi");
        self.cache.estimate = Some(estimate);
        Ok(estimate)
    }

    /// Relative error of the estimate against `expected`.
    pub fn error(&mut self, expected: f64) -> Result<f64, PiError> {
        relative_error(self.estimate()?, expected)
    }

    /// Relative error of the estimate against pi.
    pub fn error_vs_pi(&mut self) -> Result<f64, PiError> {
        Ok(pi_error(self.estimate()?))
    }

    /// Points, seed, inside count, estimate and error of the current samples.
    pub fn summary(&mut self) -> Result<RunSummary, PiError> {
        let estimate = self.estimate()?;
        Ok(RunSummary {
            points: self.points.get(),
            seed: self.seed,
            inside: self.count_inside()?,
            estimate,
            error: pi_error(estimate),
        })
    }

    /// Everything a renderer needs, borrowed from the cache.
    pub fn scatter_data(&mut self) -> Result<ScatterData<'_>, PiError> {
        let estimate = self.estimate()?;
        let points = self.points.get();
        let samples = self.samples()?;
        Ok(ScatterData {
            points,
            coords: &samples.coords,
            mask: &samples.mask,
            estimate,
            error: pi_error(estimate),
        })
    }

    /// Scatter plot of the samples, colored by classification.
    pub fn render(
        &mut self,
        colors: &DotColors,
        backend: Backend,
        show_arc: bool,
    ) -> Result<Figure, PiError> {
        let style = PlotStyle {
            colors: *colors,
            show_arc,
        };
        let renderer = backend.renderer();
        renderer.render(&self.scatter_data()?, &style)
    }

    /// As [`render`](Self::render), with the backend given by name.
    ///
    /// An unknown name fails before any sample is generated.
    pub fn render_named(
        &mut self,
        colors: &DotColors,
        backend: &str,
        show_arc: bool,
    ) -> Result<Figure, PiError> {
        let backend: Backend = backend.parse()?;
        self.render(colors, backend, show_arc)
    }
}
