//! Drawable primitives
//!
//! Geometry only: styling travels separately in [`crate::style::Style`].

use serde::{Deserialize, Serialize};

/// An (x, y) position in data coordinates
pub type Point2 = [f64; 2];

/// A rotated ellipse in data coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    /// Center (x, y)
    pub center: Point2,
    /// Full extent along the rotated x axis
    pub width: f64,
    /// Full extent along the rotated y axis
    pub height: f64,
    /// Counter-clockwise rotation in degrees
    pub angle: f64,
}

impl Ellipse {
    pub fn new(center: Point2, width: f64, height: f64, angle: f64) -> Self {
        Self {
            center,
            width,
            height,
            angle,
        }
    }

    /// Sample the outline at `segments` evenly spaced parameter values
    ///
    /// The first point is repeated at the end so the path closes.
    pub fn boundary(&self, segments: usize) -> Vec<Point2> {
        let segments = segments.max(3);
        let (sin, cos) = self.angle.to_radians().sin_cos();
        let (a, b) = (self.width / 2.0, self.height / 2.0);

        (0..=segments)
            .map(|i| {
                let t = std::f64::consts::TAU * (i % segments) as f64 / segments as f64;
                let (x, y) = (a * t.cos(), b * t.sin());
                [
                    self.center[0] + x * cos - y * sin,
                    self.center[1] + x * sin + y * cos,
                ]
            })
            .collect()
    }

    /// Whether a point lies inside or on the ellipse
    pub fn contains(&self, point: Point2) -> bool {
        let (a, b) = (self.width / 2.0, self.height / 2.0);
        if a <= 0.0 || b <= 0.0 {
            return false;
        }
        let (sin, cos) = self.angle.to_radians().sin_cos();
        let dx = point[0] - self.center[0];
        let dy = point[1] - self.center[1];
        // Rotate into the ellipse frame
        let u = dx * cos + dy * sin;
        let v = -dx * sin + dy * cos;
        (u / a).powi(2) + (v / b).powi(2) <= 1.0 + 1e-12
    }

    /// Area (pi * a * b)
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.width * self.height / 4.0
    }
}

/// Closed shapes a surface can draw
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Patch {
    Ellipse(Ellipse),
}

/// Area between two curves sharing x values
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FillBetween {
    pub xs: Vec<f64>,
    pub y_lower: Vec<f64>,
    pub y_upper: Vec<f64>,
}

impl FillBetween {
    /// Fill between the x-axis and `ys`
    pub fn to_zero(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        let y_lower = vec![0.0; xs.len()];
        Self {
            xs,
            y_lower,
            y_upper: ys,
        }
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}
