//! Filter operations
//!
//! This module provides the neighborhood filters: a 3x3 box blur and the
//! 3x3 sobel edge detector, both built on the same clipped neighbor sums.

/// Filter kernels
pub mod kernels;

/// Clipped neighbor aggregation shared by the filters
mod neighbor;
pub use neighbor::*;

/// Filter operations
mod ops;
pub use ops::*;
