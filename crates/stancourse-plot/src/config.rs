//! Configuration for stancourse-plot
//!
//! Defaults for the plot helpers: ellipse size and outline resolution,
//! density grid size and bandwidth rule.

use serde::{Deserialize, Serialize};
use stancourse_stats::Bandwidth;

use crate::error::{PlotError, PlotResult};

/// Plot helper configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Covariance ellipse settings
    pub ellipse: EllipseConfig,
    /// Density plot settings
    pub density: DensityConfig,
}

/// Covariance ellipse configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EllipseConfig {
    /// Number of standard deviations
    pub nstd: f64,
    /// Outline segments for backends that draw paths
    pub boundary_segments: usize,
}

impl Default for EllipseConfig {
    fn default() -> Self {
        Self {
            nstd: crate::ellipse::DEFAULT_NSTD,
            boundary_segments: 100,
        }
    }
}

/// Density plot configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DensityConfig {
    /// Number of grid points between min and max
    pub grid_points: usize,
    /// Bandwidth rule
    pub bandwidth: Bandwidth,
}

impl Default for DensityConfig {
    fn default() -> Self {
        Self {
            grid_points: 1000,
            bandwidth: Bandwidth::Scott,
        }
    }
}

impl PlotConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Validate configuration values
    pub fn validate(&self) -> PlotResult<()> {
        self.ellipse.validate()?;
        self.density.validate()
    }
}

impl EllipseConfig {
    /// Check `nstd` and the outline resolution
    pub fn validate(&self) -> PlotResult<()> {
        if !self.nstd.is_finite() || self.nstd <= 0.0 {
            return Err(PlotError::InvalidConfig(
                "ellipse.nstd must be positive".to_string(),
            ));
        }

        if self.boundary_segments < 3 {
            return Err(PlotError::InvalidConfig(
                "ellipse.boundary_segments must be at least 3".to_string(),
            ));
        }

        Ok(())
    }
}

impl DensityConfig {
    /// Check the grid size and bandwidth factor
    pub fn validate(&self) -> PlotResult<()> {
        if self.grid_points < 2 {
            return Err(PlotError::InvalidConfig(
                "density.grid_points must be at least 2".to_string(),
            ));
        }

        if let Bandwidth::Factor(f) = self.bandwidth {
            if !f.is_finite() || f <= 0.0 {
                return Err(PlotError::InvalidConfig(
                    "density.bandwidth factor must be positive".to_string(),
                ));
            }
        }

        Ok(())
    }
}
