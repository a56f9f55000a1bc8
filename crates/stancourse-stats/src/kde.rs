//! One-dimensional Gaussian kernel density estimation
//!
//! The estimate at `x` is the average of normal densities centred at each
//! sample point:
//!
//! ```text
//! f(x) = 1/n * sum_i N(x; x_i, h^2)
//! ```
//!
//! where the kernel standard deviation `h` is the sample standard deviation
//! scaled by a bandwidth factor.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::summary::SummaryStats;

/// 1 / sqrt(2 * pi)
const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Errors raised while building a density estimate
#[derive(Debug, Error, Clone, PartialEq)]
pub enum KdeError {
    /// No samples at all
    #[error("Cannot estimate a density from an empty sample")]
    Empty,

    /// A single point has no spread to estimate
    #[error("Density estimation needs at least 2 samples, got {n}")]
    TooFewSamples { n: usize },

    /// NaN or infinite value in the sample
    #[error("Sample contains {count} non-finite values")]
    NonFinite { count: usize },

    /// All samples are identical, the kernel covariance is singular
    #[error("Sample covariance is singular (zero variance)")]
    SingularCovariance,

    /// Bandwidth factor must be positive and finite
    #[error("Invalid bandwidth factor: {factor}")]
    InvalidBandwidth { factor: f64 },
}

/// Rule used to pick the bandwidth factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Bandwidth {
    /// Scott's rule: `n^(-1/5)`
    #[default]
    Scott,
    /// Silverman's rule: `(3n/4)^(-1/5)`
    Silverman,
    /// Fixed factor applied to the sample standard deviation
    Factor(f64),
}

impl Bandwidth {
    /// Factor for a sample of size `n`
    pub fn factor(&self, n: usize) -> f64 {
        let n = n as f64;
        match self {
            Bandwidth::Scott => n.powf(-0.2),
            Bandwidth::Silverman => (n * 3.0 / 4.0).powf(-0.2),
            Bandwidth::Factor(f) => *f,
        }
    }
}

/// Gaussian kernel density estimate over a 1-D sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaussianKde {
    dataset: Vec<f64>,
    factor: f64,
    /// Kernel standard deviation
    bandwidth: f64,
}

impl GaussianKde {
    /// Build an estimate with Scott's rule
    pub fn new(samples: &[f64]) -> Result<Self, KdeError> {
        Self::with_bandwidth(samples, Bandwidth::Scott)
    }

    /// Build an estimate with an explicit bandwidth rule
    pub fn with_bandwidth(samples: &[f64], rule: Bandwidth) -> Result<Self, KdeError> {
        if samples.is_empty() {
            return Err(KdeError::Empty);
        }

        let stats = SummaryStats::from_data(samples);
        if !stats.is_complete() {
            return Err(KdeError::NonFinite {
                count: stats.missing,
            });
        }
        if stats.count < 2 {
            return Err(KdeError::TooFewSamples { n: stats.count });
        }
        // Identical values can leave round-off variance behind
        if stats.range() == 0.0 || stats.sample_std_dev() <= f64::EPSILON * stats.mean.abs() {
            return Err(KdeError::SingularCovariance);
        }

        let factor = rule.factor(stats.count);
        if !factor.is_finite() || factor <= 0.0 {
            return Err(KdeError::InvalidBandwidth { factor });
        }

        let bandwidth = stats.sample_std_dev() * factor;
        tracing::debug!(
            n = stats.count,
            factor,
            bandwidth,
            "built gaussian kde"
        );

        Ok(Self {
            dataset: samples.to_vec(),
            factor,
            bandwidth,
        })
    }

    /// Evaluate the density at a point
    pub fn evaluate(&self, x: f64) -> f64 {
        let h = self.bandwidth;
        let sum: f64 = self
            .dataset
            .iter()
            .map(|&xi| {
                let u = (x - xi) / h;
                (-0.5 * u * u).exp()
            })
            .sum();
        sum * INV_SQRT_2PI / (h * self.dataset.len() as f64)
    }

    /// Evaluate the density at every point of `xs`
    pub fn evaluate_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Bandwidth factor chosen by the rule
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Kernel standard deviation
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Number of samples in the estimate
    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::linspace;

    #[test]
    fn test_scott_factor() {
        assert!((Bandwidth::Scott.factor(32) - 0.5).abs() < 1e-12);
        assert_eq!(Bandwidth::Factor(0.3).factor(1000), 0.3);
    }

    #[test]
    fn test_bandwidth_matches_scott_rule() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let kde = GaussianKde::new(&data).unwrap();
        let expected = 2.5f64.sqrt() * 5f64.powf(-0.2);
        assert!((kde.bandwidth() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_two_points_known_value() {
        // std = sqrt(2), factor = 2^(-1/5)
        let kde = GaussianKde::new(&[-1.0, 1.0]).unwrap();
        let h = 2f64.sqrt() * 2f64.powf(-0.2);
        let expected = (-0.5 / (h * h)).exp() * INV_SQRT_2PI / h;
        assert!((kde.evaluate(0.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_density_integrates_to_one() {
        let data = vec![0.1, 0.5, 0.7, 1.3, 2.2, 2.4, 3.9];
        let kde = GaussianKde::new(&data).unwrap();
        let xs = linspace(-10.0, 14.0, 4001);
        let dx = xs[1] - xs[0];
        let total: f64 = kde.evaluate_many(&xs).iter().sum::<f64>() * dx;
        assert!((total - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_errors() {
        assert_eq!(GaussianKde::new(&[]).unwrap_err(), KdeError::Empty);
        assert_eq!(
            GaussianKde::new(&[1.0]).unwrap_err(),
            KdeError::TooFewSamples { n: 1 }
        );
        assert_eq!(
            GaussianKde::new(&[2.0, 2.0, 2.0]).unwrap_err(),
            KdeError::SingularCovariance
        );
        assert_eq!(
            GaussianKde::new(&[1.0, f64::NAN]).unwrap_err(),
            KdeError::NonFinite { count: 1 }
        );
        assert!(matches!(
            GaussianKde::with_bandwidth(&[1.0, 2.0], Bandwidth::Factor(0.0)),
            Err(KdeError::InvalidBandwidth { .. })
        ));
    }

    #[test]
    fn test_symmetric_sample_gives_symmetric_density() {
        let kde = GaussianKde::new(&[-2.0, -1.0, 1.0, 2.0]).unwrap();
        for x in [0.3, 1.1, 2.7] {
            assert!((kde.evaluate(x) - kde.evaluate(-x)).abs() < 1e-14);
        }
    }
}
