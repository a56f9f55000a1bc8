//! Covariance ellipses
//!
//! A bivariate normal's `nstd`-sigma confidence region is an ellipse whose
//! axes follow the eigenvectors of the covariance and whose semi-axes are
//! `nstd * sqrt(eigenvalue)`.
//!
//! The rotation angle is `atan2(v.y, v.x)` of the largest-eigenvalue
//! eigenvector, i.e. the bearing of the major axis from the x axis.

use nalgebra::{Matrix2, SymmetricEigen, Vector2};
use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};

use crate::config::EllipseConfig;
use crate::error::{validation, EllipseError, EllipseResult, PlotResult};
use crate::patch::{Ellipse, Patch, Point2};
use crate::style::Style;
use crate::surface::{ArtistId, Surface};

/// Default number of standard deviations
pub const DEFAULT_NSTD: f64 = 2.0;

/// Relative tolerance for eigenvalues that are negative only by round-off
const PSD_TOLERANCE: f64 = 1e-12;

/// A 2x2 covariance matrix
///
/// Only the lower triangle is read when decomposing, so an asymmetric input
/// behaves as its lower-triangle symmetrisation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Covariance2(Matrix2<f64>);

impl Covariance2 {
    pub fn new(xx: f64, xy: f64, yx: f64, yy: f64) -> Self {
        Self(Matrix2::new(xx, xy, yx, yy))
    }

    /// Diagonal covariance
    pub fn diagonal(var_x: f64, var_y: f64) -> Self {
        Self::new(var_x, 0.0, 0.0, var_y)
    }

    pub fn matrix(&self) -> &Matrix2<f64> {
        &self.0
    }

    /// Eigenvalues and eigenvectors sorted by descending eigenvalue
    ///
    /// Eigenvectors are the columns of the returned matrix.
    pub fn eigsorted(&self) -> EllipseResult<(Vector2<f64>, Matrix2<f64>)> {
        if self.0.iter().any(|v| !v.is_finite()) {
            return Err(EllipseError::NonFinite);
        }

        let lower = Matrix2::new(self.0[(0, 0)], self.0[(1, 0)], self.0[(1, 0)], self.0[(1, 1)]);
        let eig = SymmetricEigen::new(lower);

        let (first, second) = if eig.eigenvalues[0] >= eig.eigenvalues[1] {
            (0, 1)
        } else {
            (1, 0)
        };

        let vals = Vector2::new(eig.eigenvalues[first], eig.eigenvalues[second]);
        let vecs = Matrix2::from_columns(&[
            eig.eigenvectors.column(first).into_owned(),
            eig.eigenvectors.column(second).into_owned(),
        ]);
        Ok((vals, vecs))
    }
}

impl From<[[f64; 2]; 2]> for Covariance2 {
    fn from(rows: [[f64; 2]; 2]) -> Self {
        Self::new(rows[0][0], rows[0][1], rows[1][0], rows[1][1])
    }
}

impl From<Matrix2<f64>> for Covariance2 {
    fn from(m: Matrix2<f64>) -> Self {
        Self(m)
    }
}

impl TryFrom<ArrayView2<'_, f64>> for Covariance2 {
    type Error = EllipseError;

    fn try_from(a: ArrayView2<'_, f64>) -> Result<Self, Self::Error> {
        match a.dim() {
            (2, 2) => Ok(Self::new(a[[0, 0]], a[[0, 1]], a[[1, 0]], a[[1, 1]])),
            (rows, cols) => Err(EllipseError::Shape { rows, cols }),
        }
    }
}

impl TryFrom<&ndarray::Array2<f64>> for Covariance2 {
    type Error = EllipseError;

    fn try_from(a: &ndarray::Array2<f64>) -> Result<Self, Self::Error> {
        Self::try_from(a.view())
    }
}

/// Geometry of a covariance ellipse before it is placed on a surface
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CovEllipse {
    /// Full width along the major axis
    pub width: f64,
    /// Full height along the minor axis
    pub height: f64,
    /// Major-axis angle in degrees
    pub angle: f64,
}

impl CovEllipse {
    /// Size and orient the `nstd`-sigma ellipse of `cov`
    pub fn from_covariance(cov: &Covariance2, nstd: f64) -> EllipseResult<Self> {
        validation::validate_nstd(nstd)?;
        let (vals, vecs) = cov.eigsorted()?;

        let scale = vals[0].abs().max(1.0);
        if vals[1] < -PSD_TOLERANCE * scale {
            return Err(EllipseError::NotPositiveSemiDefinite { eigenvalue: vals[1] });
        }

        let major = vecs.column(0);
        let angle = major[1].atan2(major[0]).to_degrees();

        // Width and height are full extents, not radii
        let width = 2.0 * nstd * vals[0].max(0.0).sqrt();
        let height = 2.0 * nstd * vals[1].max(0.0).sqrt();

        Ok(Self {
            width,
            height,
            angle,
        })
    }

    /// Place the ellipse at `center`
    pub fn at(&self, center: Point2) -> Ellipse {
        Ellipse::new(center, self.width, self.height, self.angle)
    }
}

/// An ellipse that has been added to a surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipseHandle {
    /// Id on the surface, for later restyling or removal
    pub id: ArtistId,
    /// Geometry as drawn
    pub ellipse: Ellipse,
}

/// Draw the `nstd`-sigma covariance ellipse of `cov` centred at `pos`
///
/// Nothing is added to the surface when the covariance is rejected.
pub fn plot_cov_ellipse<S>(
    surface: &mut S,
    cov: impl Into<Covariance2>,
    pos: Point2,
    nstd: f64,
    style: Style,
) -> PlotResult<EllipseHandle>
where
    S: Surface + ?Sized,
{
    let geometry = CovEllipse::from_covariance(&cov.into(), nstd)?;
    let ellipse = geometry.at(pos);

    tracing::debug!(
        width = ellipse.width,
        height = ellipse.height,
        angle = ellipse.angle,
        nstd,
        "adding covariance ellipse"
    );

    let id = surface.add_patch(Patch::Ellipse(ellipse), style)?;
    Ok(EllipseHandle { id, ellipse })
}

/// [`plot_cov_ellipse`] at two standard deviations
pub fn plot_cov_ellipse_default<S>(
    surface: &mut S,
    cov: impl Into<Covariance2>,
    pos: Point2,
    style: Style,
) -> PlotResult<EllipseHandle>
where
    S: Surface + ?Sized,
{
    plot_cov_ellipse(surface, cov, pos, DEFAULT_NSTD, style)
}

/// [`plot_cov_ellipse`] sized by `config.nstd`
pub fn plot_cov_ellipse_with<S>(
    surface: &mut S,
    cov: impl Into<Covariance2>,
    pos: Point2,
    style: Style,
    config: &EllipseConfig,
) -> PlotResult<EllipseHandle>
where
    S: Surface + ?Sized,
{
    config.validate()?;
    plot_cov_ellipse(surface, cov, pos, config.nstd, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlotError;
    use crate::surface::Axes;
    use ndarray::array;

    fn angle_mod_180(a: f64) -> f64 {
        a.rem_euclid(180.0)
    }

    #[test]
    fn test_circular_covariance() {
        let e = CovEllipse::from_covariance(&Covariance2::diagonal(4.0, 4.0), 2.0).unwrap();
        assert!((e.width - 8.0).abs() < 1e-12);
        assert!((e.height - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_axis_aligned_major_axis() {
        let e = CovEllipse::from_covariance(&Covariance2::diagonal(9.0, 1.0), 1.0).unwrap();
        assert!((e.width - 6.0).abs() < 1e-12);
        assert!((e.height - 2.0).abs() < 1e-12);
        assert!(angle_mod_180(e.angle).min(180.0 - angle_mod_180(e.angle)) < 1e-9);

        let e = CovEllipse::from_covariance(&Covariance2::diagonal(1.0, 9.0), 1.0).unwrap();
        assert!((angle_mod_180(e.angle) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_correlated_covariance_is_diagonal() {
        // Eigenvectors (1,1) and (1,-1), eigenvalues 3 and 1
        let e = CovEllipse::from_covariance(&[[2.0, 1.0], [1.0, 2.0]].into(), 1.0).unwrap();
        assert!((e.width - 2.0 * 3f64.sqrt()).abs() < 1e-12);
        assert!((e.height - 2.0).abs() < 1e-12);
        assert!((angle_mod_180(e.angle) - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_correlation_angle() {
        let e = CovEllipse::from_covariance(&[[2.0, -1.0], [-1.0, 2.0]].into(), 1.0).unwrap();
        assert!((angle_mod_180(e.angle) - 135.0).abs() < 1e-9);
    }

    #[test]
    fn test_singular_covariance_gives_flat_ellipse() {
        let e = CovEllipse::from_covariance(&[[1.0, 1.0], [1.0, 1.0]].into(), 2.0).unwrap();
        assert!((e.width - 4.0 * 2f64.sqrt()).abs() < 1e-12);
        assert!(e.height.abs() < 1e-6);
    }

    #[test]
    fn test_rejects_invalid_covariance() {
        assert_eq!(
            CovEllipse::from_covariance(&[[f64::NAN, 0.0], [0.0, 1.0]].into(), 2.0),
            Err(EllipseError::NonFinite)
        );
        assert!(matches!(
            CovEllipse::from_covariance(&[[1.0, 0.0], [0.0, -1.0]].into(), 2.0),
            Err(EllipseError::NotPositiveSemiDefinite { .. })
        ));
        assert!(matches!(
            CovEllipse::from_covariance(&Covariance2::diagonal(1.0, 1.0), 0.0),
            Err(EllipseError::InvalidNstd { .. })
        ));
    }

    #[test]
    fn test_from_ndarray() {
        let a = array![[2.0, 0.5], [0.5, 1.0]];
        let cov = Covariance2::try_from(&a).unwrap();
        assert_eq!(cov.matrix()[(0, 1)], 0.5);

        let wrong = array![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        assert_eq!(
            Covariance2::try_from(&wrong),
            Err(EllipseError::Shape { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn test_plot_adds_one_artist() {
        let mut ax = Axes::new();
        let handle = plot_cov_ellipse(
            &mut ax,
            [[2.0, 1.0], [1.0, 2.0]],
            [1.0, -1.0],
            2.0,
            Style::new().alpha(0.5),
        )
        .unwrap();

        assert_eq!(ax.len(), 1);
        let drawn = ax.artist(handle.id).unwrap();
        assert_eq!(drawn.as_ellipse(), Some(&handle.ellipse));
        assert_eq!(handle.ellipse.center, [1.0, -1.0]);
        assert_eq!(drawn.style.alpha, Some(0.5));
    }

    #[test]
    fn test_plot_with_config() {
        let config = EllipseConfig {
            nstd: 3.0,
            ..EllipseConfig::default()
        };
        let mut ax = Axes::new();
        let handle = plot_cov_ellipse_with(
            &mut ax,
            Covariance2::diagonal(4.0, 1.0),
            [0.0, 0.0],
            Style::new(),
            &config,
        )
        .unwrap();
        assert!((handle.ellipse.width - 12.0).abs() < 1e-12);
        assert!((handle.ellipse.height - 6.0).abs() < 1e-12);

        let bad = EllipseConfig {
            nstd: -1.0,
            ..EllipseConfig::default()
        };
        assert!(matches!(
            plot_cov_ellipse_with(&mut ax, Covariance2::diagonal(1.0, 1.0), [0.0, 0.0], Style::new(), &bad),
            Err(PlotError::InvalidConfig(_))
        ));
        assert_eq!(ax.len(), 1);
    }

    #[test]
    fn test_plot_failure_leaves_surface_untouched() {
        let mut ax = Axes::new();
        let err = plot_cov_ellipse_default(
            &mut ax,
            [[f64::INFINITY, 0.0], [0.0, 1.0]],
            [0.0, 0.0],
            Style::new(),
        )
        .unwrap_err();
        assert!(matches!(err, PlotError::Ellipse(EllipseError::NonFinite)));
        assert!(ax.is_empty());
    }
}
