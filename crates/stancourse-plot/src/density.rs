//! Kernel density plots
//!
//! Evaluates a Gaussian KDE on an evenly spaced grid spanning exactly
//! `[min(samples), max(samples)]` and fills the area under the curve.

use serde::{Deserialize, Serialize};
use stancourse_stats::{linspace, GaussianKde};

use crate::config::DensityConfig;
use crate::error::PlotResult;
use crate::patch::FillBetween;
use crate::style::Style;
use crate::surface::{ArtistId, Surface};

/// A density curve sampled on a grid
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DensityCurve {
    /// Grid, first == min(samples), last == max(samples)
    pub xs: Vec<f64>,
    /// Density at each grid point
    pub ys: Vec<f64>,
    /// Kernel standard deviation used
    pub bandwidth: f64,
}

impl DensityCurve {
    /// Indices of strict interior local maxima
    pub fn local_maxima(&self) -> Vec<usize> {
        (1..self.ys.len().saturating_sub(1))
            .filter(|&i| self.ys[i] > self.ys[i - 1] && self.ys[i] >= self.ys[i + 1])
            .collect()
    }

    /// Grid point with the highest density
    pub fn mode(&self) -> Option<f64> {
        self.ys
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| self.xs[i])
    }
}

/// Estimate the density of `samples` without drawing it
pub fn density_curve(samples: &[f64], config: &DensityConfig) -> PlotResult<DensityCurve> {
    config.validate()?;
    let kde = GaussianKde::with_bandwidth(samples, config.bandwidth)?;

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let xs = linspace(min, max, config.grid_points);
    let ys = kde.evaluate_many(&xs);

    Ok(DensityCurve {
        xs,
        ys,
        bandwidth: kde.bandwidth(),
    })
}

/// Fill the estimated density of `samples` on `surface`
pub fn density<S>(surface: &mut S, samples: &[f64], style: Style) -> PlotResult<()>
where
    S: Surface + ?Sized,
{
    density_with(surface, samples, style, &DensityConfig::default())?;
    Ok(())
}

/// [`density`] with an explicit grid size and bandwidth rule
pub fn density_with<S>(
    surface: &mut S,
    samples: &[f64],
    style: Style,
    config: &DensityConfig,
) -> PlotResult<ArtistId>
where
    S: Surface + ?Sized,
{
    let curve = density_curve(samples, config)?;
    tracing::debug!(
        n = samples.len(),
        grid_points = curve.xs.len(),
        bandwidth = curve.bandwidth,
        "filling density"
    );

    surface.fill_between(FillBetween::to_zero(curve.xs, curve.ys), style)
}
