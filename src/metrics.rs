//! Distance and error helpers

use std::f64::consts::PI;

use crate::coords::Coordinate;
use crate::PiError;

/// Euclidean distance between `point` and `origin`.
pub fn distance(point: Coordinate, origin: Coordinate) -> f64 {
    let dx = point.x - origin.x;
    let dy = point.y - origin.y;
    (dx * dx + dy * dy).sqrt()
}

/// Euclidean distance from `(0, 0)`.
pub fn distance_from_origin(point: Coordinate) -> f64 {
    distance(point, Coordinate::ORIGIN)
}

/// Relative error `(calculated - expected) / expected`.
///
/// A zero reference has no meaningful relative error and is rejected
/// instead of producing an infinity or NaN.
pub fn relative_error(calculated: f64, expected: f64) -> Result<f64, PiError> {
    if expected == 0.0 {
        return Err(PiError::ZeroReference);
    }
    Ok(ratio_error(calculated, expected))
}

/// [`relative_error`] against pi, which is never a zero reference.
pub fn pi_error(calculated: f64) -> f64 {
    ratio_error(calculated, PI)
}

fn ratio_error(calculated: f64, expected: f64) -> f64 {
    (calculated - expected) / expected
}
