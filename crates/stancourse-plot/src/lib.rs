//! stancourse-plot - Notebook plot helpers
//!
//! Draws statistical overlays onto a caller-supplied plotting surface:
//!
//! - **Covariance ellipses**: `nstd`-sigma confidence regions of a 2x2
//!   covariance, sized and oriented from its eigen-decomposition
//! - **Density plots**: a Gaussian KDE evaluated on a 1000-point grid over
//!   the sample range, filled down to the x-axis
//!
//! # Surfaces
//!
//! Helpers are generic over [`Surface`]. [`Axes`] records artists in memory;
//! with the `plotly` feature, `PlotlySurface` builds a plotly figure.
//!
//! # Examples
//!
//! ```ignore
//! use stancourse_plot::{density, plot_cov_ellipse, Axes, Style, BL2};
//!
//! let mut ax = Axes::new();
//! let handle = plot_cov_ellipse(&mut ax, [[2.0, 0.8], [0.8, 1.0]], [0.0, 0.0], 2.0,
//!     Style::new().color(BL2).alpha(0.5))?;
//! density(&mut ax, &draws, Style::from_pairs([("color", "bl3")])?)?;
//! ```

pub mod color;
pub mod config;
pub mod density;
pub mod ellipse;
pub mod error;
pub mod patch;
#[cfg(feature = "plotly")]
pub mod plotly_surface;
pub mod style;
pub mod surface;

pub use color::*;
pub use config::*;
pub use density::*;
pub use ellipse::*;
pub use error::{EllipseError, PlotError, PlotResult, StyleError, SurfaceError};
pub use patch::*;
#[cfg(feature = "plotly")]
pub use plotly_surface::PlotlySurface;
pub use style::*;
pub use surface::*;
