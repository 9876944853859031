use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use tinta_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Number of pixels covered by this size.
    pub fn num_pixels(&self) -> usize {
        self.width.saturating_mul(self.height)
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents an image with pixel data.
///
/// The pixels are stored row-major in a single contiguous buffer with shape
/// (H, W, C): row 0 is the top of the image and the `CHANNELS` values of a
/// pixel are adjacent. Since the buffer length is validated against the size
/// on construction, every row has exactly `width` pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image<T, const CHANNELS: usize> {
    size: ImageSize,
    data: Vec<T>,
}

/// A 24-bit RGB image, the pixel grid handed in by the bitmap decoder.
pub type Rgb8Image = Image<u8, 3>;

impl<T, const CHANNELS: usize> Image<T, CHANNELS> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image, row-major with interleaved channels.
    ///
    /// # Returns
    ///
    /// A new image with the given pixel data.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinta_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    vec![0u8; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        let expected = size.num_pixels().saturating_mul(CHANNELS);
        if data.len() != expected {
            return Err(ImageError::InvalidChannelShape(data.len(), expected));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and default pixel data.
    ///
    /// The buffer is reserved up front so that an allocation failure is
    /// reported as [`ImageError::AllocationFailed`] instead of aborting.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `val` - The default value of the pixel data.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinta_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::from_size_val(
    ///   ImageSize {
    ///     width: 10,
    ///     height: 20,
    ///   }, 0u8).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.as_slice().len(), 10 * 20 * 3);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let len = size.num_pixels().saturating_mul(CHANNELS);
        let mut data = Vec::new();
        data.try_reserve_exact(len)?;
        data.resize(len, val);

        Ok(Self { size, data })
    }

    /// Create a new image from a flat list of pixels.
    ///
    /// # Errors
    ///
    /// If the number of pixels does not match the image size, an error is returned.
    pub fn from_pixels(size: ImageSize, pixels: Vec<[T; CHANNELS]>) -> Result<Self, ImageError> {
        if pixels.len() != size.num_pixels() {
            return Err(ImageError::InvalidChannelShape(
                pixels.len() * CHANNELS,
                size.num_pixels().saturating_mul(CHANNELS),
            ));
        }

        let data = pixels.into_iter().flatten().collect();
        Ok(Self { size, data })
    }

    /// Create a new image from a list of rows, top row first.
    ///
    /// The width is taken from the first row and every other row must match it.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::JaggedRow`] for the first row whose length differs.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinta_image::Image;
    ///
    /// let image = Image::<u8, 3>::from_rows(vec![
    ///     vec![[0, 0, 0], [255, 255, 255]],
    ///     vec![[10, 20, 30], [40, 50, 60]],
    /// ]).unwrap();
    ///
    /// assert_eq!(image.width(), 2);
    /// assert_eq!(image.height(), 2);
    /// assert_eq!(image.get_pixel(0, 1).unwrap(), [10, 20, 30]);
    ///
    /// assert!(Image::<u8, 3>::from_rows(vec![vec![[0, 0, 0]], vec![]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<[T; CHANNELS]>>) -> Result<Self, ImageError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if let Some((row, actual)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(ImageError::JaggedRow {
                row,
                expected: width,
                actual,
            });
        }

        let data = rows.into_iter().flatten().flatten().collect();
        Ok(Self {
            size: ImageSize { width, height },
            data,
        })
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Get the pixel data as a flat slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data as a flat mutable slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Get the values of a row, `width * CHANNELS` long.
    ///
    /// Returns `None` if the row index is out of bounds.
    pub fn row(&self, y: usize) -> Option<&[T]> {
        if y >= self.height() {
            return None;
        }
        let stride = self.width() * CHANNELS;
        Some(&self.data[y * stride..(y + 1) * stride])
    }

    /// Get a reference to a single value addressed by `[y, x, ch]`.
    ///
    /// Returns `None` if any index is out of bounds.
    pub fn get(&self, index: [usize; 3]) -> Option<&T> {
        let [y, x, ch] = index;
        if y >= self.height() || x >= self.width() || ch >= CHANNELS {
            return None;
        }
        self.data.get((y * self.width() + x) * CHANNELS + ch)
    }

    /// Get the channel values of the pixel at column `x` and row `y`.
    ///
    /// # Errors
    ///
    /// If the coordinates are out of bounds, an error is returned.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<[T; CHANNELS], ImageError>
    where
        T: Copy,
    {
        let offset = self.pixel_offset(x, y)?;
        Ok(std::array::from_fn(|ch| self.data[offset + ch]))
    }

    /// Set the channel values of the pixel at column `x` and row `y`.
    ///
    /// # Errors
    ///
    /// If the coordinates are out of bounds, an error is returned.
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: [T; CHANNELS]) -> Result<(), ImageError>
    where
        T: Copy,
    {
        let offset = self.pixel_offset(x, y)?;
        self.data[offset..offset + CHANNELS].copy_from_slice(&pixel);
        Ok(())
    }

    /// Get a channel of the image.
    ///
    /// # Arguments
    ///
    /// * `channel` - The channel to get.
    ///
    /// # Returns
    ///
    /// A new single channel image holding the values of the given channel.
    ///
    /// # Errors
    ///
    /// If the channel index is out of bounds, an error is returned.
    pub fn channel(&self, channel: usize) -> Result<Image<T, 1>, ImageError>
    where
        T: Clone,
    {
        if channel >= CHANNELS {
            return Err(ImageError::ChannelIndexOutOfBounds(channel, CHANNELS));
        }

        let channel_data = self
            .data
            .iter()
            .skip(channel)
            .step_by(CHANNELS)
            .cloned()
            .collect();

        Image::new(self.size, channel_data)
    }

    fn pixel_offset(&self, x: usize, y: usize) -> Result<usize, ImageError> {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }
        Ok((y * self.width() + x) * CHANNELS)
    }
}

#[cfg(test)]
mod tests {
    use crate::image::{Image, ImageError, ImageSize};

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert_eq!(image_size.num_pixels(), 200);
        assert_eq!(ImageSize::from([10, 20]), image_size);
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20 * 3],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.num_channels(), 3);

        Ok(())
    }

    #[test]
    fn image_invalid_shape() {
        let res = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0u8; 11],
        );
        assert!(matches!(res, Err(ImageError::InvalidChannelShape(11, 12))));
    }

    #[test]
    fn image_from_pixels() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_pixels(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![[1, 2, 3], [4, 5, 6]],
        )?;
        assert_eq!(image.as_slice(), &[1, 2, 3, 4, 5, 6]);

        let res = Image::<u8, 3>::from_pixels(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![[1, 2, 3]],
        );
        assert!(matches!(res, Err(ImageError::InvalidChannelShape(3, 12))));

        Ok(())
    }

    #[test]
    fn image_from_rows() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_rows(vec![
            vec![[0, 1, 2], [3, 4, 5], [6, 7, 8]],
            vec![[9, 10, 11], [12, 13, 14], [15, 16, 17]],
        ])?;
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(image.row(1), Some(&[9, 10, 11, 12, 13, 14, 15, 16, 17][..]));
        assert_eq!(image.row(2), None);

        Ok(())
    }

    #[test]
    fn image_from_jagged_rows() {
        let res = Image::<u8, 3>::from_rows(vec![
            vec![[0, 0, 0], [0, 0, 0]],
            vec![[0, 0, 0], [0, 0, 0]],
            vec![[0, 0, 0]],
        ]);
        assert!(matches!(
            res,
            Err(ImageError::JaggedRow {
                row: 2,
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn image_from_no_rows() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_rows(vec![])?;
        assert_eq!(image.size(), ImageSize { width: 0, height: 0 });
        assert!(image.as_slice().is_empty());

        Ok(())
    }

    #[test]
    fn image_get_set_pixel() -> Result<(), ImageError> {
        let mut image = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 3,
                height: 2,
            },
            0,
        )?;
        image.set_pixel(2, 1, [7, 8, 9])?;
        assert_eq!(image.get_pixel(2, 1)?, [7, 8, 9]);
        assert_eq!(image.get([1, 2, 1]), Some(&8));
        assert_eq!(image.get([1, 3, 0]), None);
        assert_eq!(image.get([0, 0, 3]), None);

        assert!(matches!(
            image.get_pixel(3, 0),
            Err(ImageError::PixelIndexOutOfBounds(3, 0, 3, 2))
        ));
        assert!(image.set_pixel(0, 2, [0, 0, 0]).is_err());

        Ok(())
    }

    #[test]
    fn image_channel() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                height: 2,
                width: 1,
            },
            vec![0, 1, 2, 3, 4, 5],
        )?;

        let channel = image.channel(2)?;
        assert_eq!(channel.as_slice(), &[2, 5]);
        assert!(matches!(
            image.channel(3),
            Err(ImageError::ChannelIndexOutOfBounds(3, 3))
        ));

        Ok(())
    }

    #[test]
    fn image_from_size_val_too_large() {
        let res = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: usize::MAX / 4,
                height: 1,
            },
            0,
        );
        assert!(matches!(res, Err(ImageError::AllocationFailed(_))));
    }
}
