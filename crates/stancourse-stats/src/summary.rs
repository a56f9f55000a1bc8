//! Summary statistics for samples
//!
//! Provides the moments and extents the density estimator needs:
//! - Count and number of non-finite values
//! - Min, max, range
//! - Mean, population variance and unbiased sample variance

use serde::{Deserialize, Serialize};

/// Summary statistics for a numeric sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of finite values
    pub count: usize,
    /// Number of NaN/infinite values
    pub missing: usize,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Mean (average)
    pub mean: f64,
    /// Population variance (divides by n)
    pub variance: f64,
    /// Unbiased sample variance (divides by n - 1)
    pub sample_variance: f64,
}

impl SummaryStats {
    /// Compute summary statistics from data
    ///
    /// Non-finite values are counted in `missing` and otherwise ignored.
    pub fn from_data(data: &[f64]) -> Self {
        let finite: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
        let missing = data.len() - finite.len();

        if finite.is_empty() {
            return Self::empty(missing);
        }

        let count = finite.len();
        let mean = finite.iter().sum::<f64>() / count as f64;

        let sum_sq: f64 = finite.iter().map(|x| (x - mean).powi(2)).sum();
        let variance = sum_sq / count as f64;
        let sample_variance = if count > 1 {
            sum_sq / (count - 1) as f64
        } else {
            f64::NAN
        };

        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            count,
            missing,
            min,
            max,
            mean,
            variance,
            sample_variance,
        }
    }

    /// Create empty statistics (all NaN)
    fn empty(missing: usize) -> Self {
        Self {
            count: 0,
            missing,
            min: f64::NAN,
            max: f64::NAN,
            mean: f64::NAN,
            variance: f64::NAN,
            sample_variance: f64::NAN,
        }
    }

    /// Get the range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Population standard deviation
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }

    /// Unbiased sample standard deviation
    pub fn sample_std_dev(&self) -> f64 {
        self.sample_variance.sqrt()
    }

    /// True when every value was finite
    pub fn is_complete(&self) -> bool {
        self.missing == 0
    }
}
