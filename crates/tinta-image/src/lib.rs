#![deny(missing_docs)]
//! Image types for holding decoded pixel grids

/// image representation for pixel filtering.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize, Rgb8Image};
