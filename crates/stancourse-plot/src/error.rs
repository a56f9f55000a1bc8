//! Error types for stancourse-plot
//!
//! Covers:
//! - Covariance/ellipse geometry failures
//! - Density estimation failures (wrapped from stancourse-stats)
//! - Style attribute parsing
//! - Surface and configuration errors

use stancourse_stats::KdeError;
use thiserror::Error;

/// Main error type for plotting operations
#[derive(Error, Debug)]
pub enum PlotError {
    /// Covariance ellipse errors
    #[error("Ellipse failed: {0}")]
    Ellipse(#[from] EllipseError),

    /// Density estimation errors
    #[error("Density estimate failed: {0}")]
    Kde(#[from] KdeError),

    /// Style errors
    #[error("Style error: {0}")]
    Style(#[from] StyleError),

    /// Surface rejected an artist
    #[error("Surface error: {0}")]
    Surface(#[from] SurfaceError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Errors computing a covariance ellipse
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EllipseError {
    /// Input is not a 2x2 matrix
    #[error("Covariance must be 2x2, got {rows}x{cols}")]
    Shape { rows: usize, cols: usize },

    /// NaN or infinite entry
    #[error("Covariance contains non-finite entries")]
    NonFinite,

    /// Negative eigenvalue beyond round-off
    #[error("Covariance is not positive semi-definite (eigenvalue {eigenvalue})")]
    NotPositiveSemiDefinite { eigenvalue: f64 },

    /// Number of standard deviations must be positive and finite
    #[error("Invalid number of standard deviations: {nstd}")]
    InvalidNstd { nstd: f64 },
}

/// Errors parsing passthrough style attributes
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    /// Attribute name not recognised
    #[error("Unknown style attribute '{name}'")]
    UnknownAttribute { name: String },

    /// Attribute value could not be parsed
    #[error("Invalid value '{value}' for style attribute '{name}'")]
    InvalidValue { name: String, value: String },
}

/// Errors raised by a plotting surface
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    /// Fill curves of different lengths
    #[error("Fill curves differ in length: {xs} x values, {lower} lower, {upper} upper")]
    LengthMismatch {
        xs: usize,
        lower: usize,
        upper: usize,
    },

    /// Artist id not present on the surface
    #[error("No artist with id {id}")]
    UnknownArtist { id: usize },
}

/// Result type alias for plotting operations
pub type PlotResult<T> = Result<T, PlotError>;

/// Result type alias for ellipse geometry
pub type EllipseResult<T> = Result<T, EllipseError>;

/// Result type alias for style parsing
pub type StyleResult<T> = Result<T, StyleError>;

/// Validation utilities
pub mod validation {
    use super::*;

    /// Validate the number of standard deviations
    pub fn validate_nstd(nstd: f64) -> EllipseResult<()> {
        if !nstd.is_finite() || nstd <= 0.0 {
            return Err(EllipseError::InvalidNstd { nstd });
        }
        Ok(())
    }

    /// Validate that fill curves line up
    pub fn validate_fill_lengths(xs: usize, lower: usize, upper: usize) -> Result<(), SurfaceError> {
        if xs != lower || xs != upper {
            return Err(SurfaceError::LengthMismatch { xs, lower, upper });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_error_display() {
        let err = PlotError::InvalidConfig("grid too small".to_string());
        assert!(err.to_string().contains("grid too small"));
    }

    #[test]
    fn test_kde_error_wraps() {
        let err: PlotError = KdeError::Empty.into();
        assert!(matches!(err, PlotError::Kde(KdeError::Empty)));
    }

    #[test]
    fn test_ellipse_error_display() {
        let err = EllipseError::Shape { rows: 3, cols: 2 };
        assert!(err.to_string().contains("3x2"));
    }

    #[test]
    fn test_style_error_display() {
        let err = StyleError::UnknownAttribute {
            name: "colour".to_string(),
        };
        assert!(err.to_string().contains("colour"));
    }

    #[test]
    fn test_validate_nstd() {
        assert!(validation::validate_nstd(2.0).is_ok());
        assert!(validation::validate_nstd(0.0).is_err());
        assert!(validation::validate_nstd(-1.0).is_err());
        assert!(validation::validate_nstd(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_fill_lengths() {
        assert!(validation::validate_fill_lengths(3, 3, 3).is_ok());
        assert!(validation::validate_fill_lengths(3, 2, 3).is_err());
    }
}
