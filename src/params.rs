//! Estimator parameters
//!
//! Validation for the two user-facing inputs of the Monte Carlo estimator:
//! the point count and the optional seed. Typed constructors catch bad
//! values; the `serde_json::Value` entry points additionally catch bad
//! types, for callers that receive parameters as untyped data.

use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::PiError;

const POINTS: &str = "points";
const SEED: &str = "seed";

/// A strictly positive number of sample points
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "usize")]
pub struct Points(NonZeroUsize);

impl Points {
    /// Validate a point count.
    pub fn new(points: i64) -> Result<Self, PiError> {
        usize::try_from(points)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Points)
            .ok_or(PiError::InvalidValue {
                field: POINTS,
                reason: "must be a positive integer",
            })
    }

    /// Validate an untyped point count; only integers are accepted.
    pub fn from_value(value: &Value) -> Result<Self, PiError> {
        match value {
            Value::Number(n) if n.is_i64() || n.is_u64() => match n.as_i64() {
                Some(points) => Self::new(points),
                // u64 beyond i64::MAX
                None => n
                    .as_u64()
                    .and_then(|p| usize::try_from(p).ok())
                    .and_then(NonZeroUsize::new)
                    .map(Points)
                    .ok_or(PiError::InvalidValue {
                        field: POINTS,
                        reason: "is too large",
                    }),
            },
            _ => Err(PiError::InvalidType {
                field: POINTS,
                expected: "an integer",
            }),
        }
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<i64> for Points {
    type Error = PiError;

    fn try_from(points: i64) -> Result<Self, Self::Error> {
        Points::new(points)
    }
}

impl TryFrom<usize> for Points {
    type Error = PiError;

    fn try_from(points: usize) -> Result<Self, Self::Error> {
        NonZeroUsize::new(points).map(Points).ok_or(PiError::InvalidValue {
            field: POINTS,
            reason: "must be a positive integer",
        })
    }
}

impl From<NonZeroUsize> for Points {
    fn from(points: NonZeroUsize) -> Self {
        Points(points)
    }
}

impl From<Points> for usize {
    fn from(points: Points) -> usize {
        points.get()
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validate an untyped seed: `null` or an integer.
///
/// Negative integers are accepted here; they only fail once samples are drawn.
pub fn seed_from_value(value: &Value) -> Result<Option<i64>, PiError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) if n.is_i64() => Ok(n.as_i64()),
        Value::Number(n) if n.is_u64() => Err(PiError::InvalidValue {
            field: SEED,
            reason: "does not fit in a signed 64-bit integer",
        }),
        _ => Err(PiError::InvalidType {
            field: SEED,
            expected: "None or integer",
        }),
    }
}
