//! Truncated infinite series for pi
//!
//! Leibniz: pi = 8 * sum_{k>=0} 1 / ((4k+1)(4k+3))
//! Euler (Basel problem): pi = sqrt(6 * sum_{k>=1} 1 / k^2)

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::metrics::pi_error;
use crate::PiError;

/// Pi approximation from the first `terms` terms of the Leibniz series.
///
/// Terms are accumulated in ascending order of `k`; `leibniz(0)` is 0.
pub fn leibniz(terms: u64) -> f64 {
    let mut sum = 0.0;
    for k in 0..terms {
        let k = k as f64;
        sum += 1.0 / ((4.0 * k + 1.0) * (4.0 * k + 3.0));
    }
    8.0 * sum
}

/// Pi approximation from the first `terms` terms of the Euler series.
///
/// `euler(0)` is `sqrt(0) = 0`.
pub fn euler(terms: u64) -> f64 {
    let mut sum = 0.0;
    for k in 1..=terms {
        let k = k as f64;
        sum += 1.0 / (k * k);
    }
    (6.0 * sum).sqrt()
}

/// Series selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Series {
    Leibniz,
    Euler,
}

impl Series {
    pub const ALL: [Series; 2] = [Series::Leibniz, Series::Euler];

    pub fn approximate(self, terms: u64) -> f64 {
        match self {
            Series::Leibniz => leibniz(terms),
            Series::Euler => euler(terms),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Series::Leibniz => "leibniz",
            Series::Euler => "euler",
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Series {
    type Err = PiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "leibniz" => Ok(Series::Leibniz),
            "euler" => Ok(Series::Euler),
            _ => Err(PiError::InvalidValue {
                field: "series",
                reason: "must be leibniz or euler",
            }),
        }
    }
}

/// One row of the convergence table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesRow {
    pub terms: u64,
    pub leibniz: f64,
    pub euler: f64,
    pub leibniz_error: f64,
    pub euler_error: f64,
}

impl SeriesRow {
    pub fn at(terms: u64) -> Self {
        let leibniz = leibniz(terms);
        let euler = euler(terms);
        Self {
            terms,
            leibniz,
            euler,
            leibniz_error: pi_error(leibniz),
            euler_error: pi_error(euler),
        }
    }
}

/// Rows of the convergence table for term counts `1..=max_terms`, in order.
///
/// Partial sums are carried forward, so each row costs one extra term
/// instead of a fresh summation. The accumulation order matches
/// [`leibniz`] and [`euler`], so row `n` agrees with them exactly.
#[derive(Debug, Clone)]
pub struct ConvergenceRows {
    next_terms: u64,
    max_terms: u64,
    leibniz_sum: f64,
    euler_sum: f64,
}

impl ConvergenceRows {
    pub fn new(max_terms: u64) -> Self {
        Self {
            next_terms: 1,
            max_terms,
            leibniz_sum: 0.0,
            euler_sum: 0.0,
        }
    }
}

impl Iterator for ConvergenceRows {
    type Item = SeriesRow;

    fn next(&mut self) -> Option<SeriesRow> {
        if self.next_terms == 0 || self.next_terms > self.max_terms {
            return None;
        }
        let terms = self.next_terms;
        // wraps to 0 after u64::MAX, which ends the iteration
        self.next_terms = terms.wrapping_add(1);

        let k = (terms - 1) as f64;
        self.leibniz_sum += 1.0 / ((4.0 * k + 1.0) * (4.0 * k + 3.0));
        let n = terms as f64;
        self.euler_sum += 1.0 / (n * n);

        let leibniz = 8.0 * self.leibniz_sum;
        let euler = (6.0 * self.euler_sum).sqrt();
        Some(SeriesRow {
            terms,
            leibniz,
            euler,
            leibniz_error: pi_error(leibniz),
            euler_error: pi_error(euler),
        })
    }
}

impl std::iter::FusedIterator for ConvergenceRows {}

/// Approximations and relative errors for every term count in `1..=max_terms`.
pub fn convergence_table(max_terms: u64) -> Vec<SeriesRow> {
    ConvergenceRows::new(max_terms).collect()
}
