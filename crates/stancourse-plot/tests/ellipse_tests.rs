//! Covariance ellipse integration tests

mod common;

use common::{axis_angle_distance, init_tracing, rotated_covariance};
use proptest::prelude::*;
use rstest::rstest;
use stancourse_plot::{
    plot_cov_ellipse, Axes, CovEllipse, Covariance2, EllipseError, PlotError, Style, BL1, BL2, BL3,
};

// === Geometry ===

#[rstest]
#[case(1.0, 0.5)]
#[case(4.0, 1.0)]
#[case(0.25, 2.0)]
#[case(9.0, 3.0)]
fn test_circular_width_equals_height(#[case] s: f64, #[case] nstd: f64) {
    let e = CovEllipse::from_covariance(&Covariance2::diagonal(s, s), nstd).unwrap();
    let expected = 2.0 * nstd * s.sqrt();
    assert!((e.width - expected).abs() < 1e-12);
    assert!((e.height - expected).abs() < 1e-12);
}

#[rstest]
#[case(0.0)]
#[case(30.0)]
#[case(60.0)]
#[case(-45.0)]
#[case(120.0)]
fn test_angle_follows_major_axis(#[case] theta: f64) {
    let cov = rotated_covariance(5.0, 1.0, theta);
    let e = CovEllipse::from_covariance(&cov.into(), 1.0).unwrap();
    assert!(axis_angle_distance(e.angle, theta) < 1e-8);
    assert!((e.width - 2.0 * 5f64.sqrt()).abs() < 1e-10);
    assert!((e.height - 2.0).abs() < 1e-10);
}

// === Surface Interaction ===

#[test]
fn test_nested_ellipses_with_course_palette() {
    init_tracing();
    let mut ax = Axes::new();
    let cov = [[1.0, 0.6], [0.6, 2.0]];

    let handles: Vec<_> = [(3.0, BL3), (2.0, BL2), (1.0, BL1)]
        .into_iter()
        .map(|(nstd, color)| {
            plot_cov_ellipse(&mut ax, cov, [0.5, 0.5], nstd, Style::new().color(color)).unwrap()
        })
        .collect();

    assert_eq!(ax.len(), 3);
    assert!(handles[0].ellipse.width > handles[1].ellipse.width);
    assert!(handles[1].ellipse.width > handles[2].ellipse.width);
    assert!(handles
        .iter()
        .all(|h| (h.ellipse.angle - handles[0].ellipse.angle).abs() < 1e-12));
}

#[test]
fn test_handle_allows_removal() {
    let mut ax = Axes::new();
    let handle = plot_cov_ellipse(&mut ax, [[1.0, 0.0], [0.0, 1.0]], [0.0, 0.0], 2.0, Style::new())
        .unwrap();
    let removed = ax.remove(handle.id).unwrap();
    assert_eq!(removed.as_ellipse(), Some(&handle.ellipse));
    assert!(ax.is_empty());
}

#[test]
fn test_indefinite_covariance_is_rejected() {
    let mut ax = Axes::new();
    let err = plot_cov_ellipse(&mut ax, [[1.0, 2.0], [2.0, 1.0]], [0.0, 0.0], 2.0, Style::new())
        .unwrap_err();
    assert!(matches!(
        err,
        PlotError::Ellipse(EllipseError::NotPositiveSemiDefinite { .. })
    ));
    assert!(ax.is_empty());
}

#[test]
fn test_singular_covariance_draws_flat_ellipse() {
    let mut ax = Axes::new();
    let handle = plot_cov_ellipse(&mut ax, [[1.0, 1.0], [1.0, 1.0]], [0.0, 0.0], 2.0, Style::new())
        .unwrap();
    assert_eq!(ax.len(), 1);
    assert!((handle.ellipse.width - 4.0 * 2f64.sqrt()).abs() < 1e-12);
    assert!(handle.ellipse.height.abs() < 1e-6);
    assert!(axis_angle_distance(handle.ellipse.angle, 45.0) < 1e-9);
}

// === Property-Based Tests ===

proptest! {
    #[test]
    fn test_size_scales_linearly_with_nstd(
        l1 in 0.1f64..10.0,
        l2 in 0.1f64..10.0,
        theta in -180.0f64..180.0,
        nstd in 0.1f64..5.0,
    ) {
        let cov: Covariance2 = rotated_covariance(l1, l2, theta).into();
        let one = CovEllipse::from_covariance(&cov, nstd).unwrap();
        let two = CovEllipse::from_covariance(&cov, 2.0 * nstd).unwrap();
        prop_assert!((two.width - 2.0 * one.width).abs() < 1e-9 * (1.0 + one.width));
        prop_assert!((two.height - 2.0 * one.height).abs() < 1e-9 * (1.0 + one.height));
    }

    #[test]
    fn test_rotation_rotates_angle(
        l1 in 0.5f64..10.0,
        ratio in 1.5f64..10.0,
        theta in -180.0f64..180.0,
        phi in -180.0f64..180.0,
    ) {
        // Distinct eigenvalues so the major axis is well defined
        let l2 = l1 / ratio;
        let base = CovEllipse::from_covariance(&rotated_covariance(l1, l2, theta).into(), 2.0).unwrap();
        let turned = CovEllipse::from_covariance(&rotated_covariance(l1, l2, theta + phi).into(), 2.0).unwrap();
        prop_assert!(axis_angle_distance(turned.angle, base.angle + phi) < 1e-6);
    }

    #[test]
    fn test_width_is_major_axis(
        l1 in 0.1f64..10.0,
        l2 in 0.1f64..10.0,
        theta in -180.0f64..180.0,
    ) {
        let e = CovEllipse::from_covariance(&rotated_covariance(l1, l2, theta).into(), 2.0).unwrap();
        prop_assert!(e.width >= e.height - 1e-12);
    }
}
