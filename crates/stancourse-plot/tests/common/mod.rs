//! Shared test helpers

#![allow(dead_code)]

use std::sync::Once;

static INIT: Once = Once::new();

/// Route `tracing` output through the test harness (RUST_LOG filters it)
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Covariance `R(theta) * diag(l1, l2) * R(theta)^T`
pub fn rotated_covariance(l1: f64, l2: f64, theta_deg: f64) -> [[f64; 2]; 2] {
    let (s, c) = theta_deg.to_radians().sin_cos();
    [
        [l1 * c * c + l2 * s * s, (l1 - l2) * s * c],
        [(l1 - l2) * s * c, l1 * s * s + l2 * c * c],
    ]
}

/// Distance between two axis angles, modulo 180 degrees
pub fn axis_angle_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(180.0);
    d.min(180.0 - d)
}
