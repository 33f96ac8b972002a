//! Random sample points in the unit square

use rand::Rng;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};

use crate::seed::try_seeded_rng;
use crate::PiError;

/// A point in the plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Lazy, finite stream of uniformly distributed coordinates in `[0, 1)^2`.
///
/// Each coordinate consumes two draws from the generator, `x` first.
#[derive(Debug, Clone)]
pub struct CoordinateStream {
    rng: Pcg64,
    remaining: usize,
}

impl CoordinateStream {
    pub fn new(rng: Pcg64, points: usize) -> Self {
        Self {
            rng,
            remaining: points,
        }
    }
}

impl Iterator for CoordinateStream {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let x: f64 = self.rng.gen();
        let y: f64 = self.rng.gen();
        Some(Coordinate::new(x, y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for CoordinateStream {}

impl std::iter::FusedIterator for CoordinateStream {}

/// Stream of `points` coordinates; the same seed always yields the same stream.
///
/// Fails for a negative seed, which cannot seed the generator.
pub fn create_coords(points: usize, seed: Option<i64>) -> Result<CoordinateStream, PiError> {
    Ok(CoordinateStream::new(try_seeded_rng(seed)?, points))
}
