use tinta_image::{Image, ImageError};

/// Reflect the image horizontally in place.
///
/// For every row, column `w` is swapped with column `width - 1 - w` for
/// `w < width / 2`. The middle column of an odd width image stays put and
/// images with a width of 0 or 1 are left unchanged.
///
/// # Arguments
///
/// * `image` - The image with shape (H, W, C) to mirror.
///
/// # Example
///
/// ```
/// use tinta_image::Image;
/// use tinta_imgproc::flip::reflect;
///
/// let mut image = Image::<u8, 3>::from_rows(vec![vec![
///     [1, 1, 1],
///     [2, 2, 2],
///     [3, 3, 3],
/// ]])
/// .unwrap();
///
/// reflect(&mut image);
///
/// assert_eq!(image.as_slice(), &[3, 3, 3, 2, 2, 2, 1, 1, 1]);
/// ```
pub fn reflect<T, const C: usize>(image: &mut Image<T, C>) {
    log::debug!("reflect: {}", image.size());

    let cols = image.cols();
    if cols < 2 {
        return;
    }

    image
        .as_slice_mut()
        .chunks_exact_mut(cols * C)
        .for_each(|row| {
            let mut i = 0;
            let mut j = cols - 1;
            while i < j {
                for c in 0..C {
                    row.swap(i * C + c, j * C + c);
                }
                i += 1;
                j -= 1;
            }
        });
}

/// Flip the input image horizontally.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
///
/// # Returns
///
/// The flipped image.
///
/// # Example
///
/// ```
/// use tinta_image::{Image, ImageSize};
/// use tinta_imgproc::flip::horizontal_flip;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     vec![0u8; 2 * 3 * 3],
/// )
/// .unwrap();
///
/// let flipped = horizontal_flip(&image).unwrap();
///
/// assert_eq!(flipped.size().width, 2);
/// assert_eq!(flipped.size().height, 3);
/// ```
pub fn horizontal_flip<T, const C: usize>(src: &Image<T, C>) -> Result<Image<T, C>, ImageError>
where
    T: Clone,
{
    let mut dst = Image::new(src.size(), src.as_slice().to_vec())?;
    reflect(&mut dst);
    Ok(dst)
}
