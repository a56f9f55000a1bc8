//! Density estimation integration tests

use proptest::prelude::*;
use rstest::rstest;
use stancourse_stats::{linspace, Bandwidth, GaussianKde, KdeError};

// === Bandwidth Rules ===

#[rstest]
#[case(Bandwidth::Scott, 100, 100f64.powf(-0.2))]
#[case(Bandwidth::Silverman, 100, 75f64.powf(-0.2))]
#[case(Bandwidth::Factor(0.25), 100, 0.25)]
fn test_bandwidth_factor(#[case] rule: Bandwidth, #[case] n: usize, #[case] expected: f64) {
    assert!((rule.factor(n) - expected).abs() < 1e-12);
}

#[test]
fn test_silverman_is_wider_than_scott() {
    let data: Vec<f64> = (0..50).map(|i| (i as f64 * 0.37).sin()).collect();
    let scott = GaussianKde::with_bandwidth(&data, Bandwidth::Scott).unwrap();
    let silverman = GaussianKde::with_bandwidth(&data, Bandwidth::Silverman).unwrap();
    assert!(silverman.bandwidth() > scott.bandwidth());
}

// === Degenerate Samples ===

#[rstest]
#[case(vec![], KdeError::Empty)]
#[case(vec![7.0], KdeError::TooFewSamples { n: 1 })]
#[case(vec![0.0; 10], KdeError::SingularCovariance)]
#[case(vec![0.1; 3], KdeError::SingularCovariance)]
#[case(vec![0.3; 7], KdeError::SingularCovariance)]
fn test_degenerate_samples(#[case] data: Vec<f64>, #[case] expected: KdeError) {
    assert_eq!(GaussianKde::new(&data).unwrap_err(), expected);
}

// === Bimodal Sample ===

#[test]
fn test_bimodal_has_two_peaks() {
    let mut data = vec![0.0; 10];
    data.extend(vec![100.0; 10]);
    let kde = GaussianKde::new(&data).unwrap();

    let xs = linspace(0.0, 100.0, 1000);
    let ys = kde.evaluate_many(&xs);
    let mid = ys[500];
    assert!(ys[0] > mid);
    assert!(ys[999] > mid);
}

// === Property-Based Tests ===

proptest! {
    #[test]
    fn test_density_is_non_negative(
        data in prop::collection::vec(-100.0f64..100.0, 2..40),
        x in -200.0f64..200.0,
    ) {
        prop_assume!(data.iter().any(|&v| (v - data[0]).abs() > 0.1));
        let kde = GaussianKde::new(&data).unwrap();
        prop_assert!(kde.evaluate(x) >= 0.0);
    }

    #[test]
    fn test_density_is_translation_equivariant(
        data in prop::collection::vec(-10.0f64..10.0, 2..20),
        shift in -50.0f64..50.0,
        x in -20.0f64..20.0,
    ) {
        prop_assume!(data.iter().any(|&v| (v - data[0]).abs() > 0.1));
        let shifted: Vec<f64> = data.iter().map(|v| v + shift).collect();
        let a = GaussianKde::new(&data).unwrap().evaluate(x);
        let b = GaussianKde::new(&shifted).unwrap().evaluate(x + shift);
        prop_assert!((a - b).abs() < 1e-9 * (1.0 + a.abs()));
    }
}
