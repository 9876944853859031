use std::collections::TryReserveError;

/// An error type for the image module.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// Error when the pixel buffer for an image cannot be reserved.
    #[error("Failed to allocate image data")]
    AllocationFailed(#[from] TryReserveError),

    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when a row handed in does not have the expected number of pixels.
    #[error("Row {row} has {actual} pixels, expected {expected}")]
    JaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Width shared by the preceding rows.
        expected: usize,
        /// Width of the offending row.
        actual: usize,
    },

    /// Error when the source and destination images have different sizes.
    #[error("Image size ({0}x{1}) does not match the destination size ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the pixel coordinates are out of bounds.
    #[error("Pixel coordinates ({0}, {1}) are out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index ({0}) is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),
}
