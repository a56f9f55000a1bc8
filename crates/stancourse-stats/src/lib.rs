//! stancourse-stats - Statistical primitives for the notebook plot helpers
//!
//! This crate provides the numeric pieces behind the density plots:
//!
//! - **Summary**: count, range, mean and (sample) variance of a dataset
//! - **Grid**: evenly spaced evaluation grids with exact endpoints
//! - **KDE**: one-dimensional Gaussian kernel density estimation
//!
//! # Bandwidth
//!
//! The default bandwidth follows Scott's rule: the kernel standard deviation
//! is the unbiased sample standard deviation scaled by `n^(-1/5)`.

pub mod grid;
pub mod kde;
pub mod summary;

pub use grid::*;
pub use kde::*;
pub use summary::*;
