use std::time::Instant;

use tinta_image::{Image, ImageError};

use super::kernels::{self, BOX_WEIGHTS};
use super::neighbor::aggregate_window;

/// Largest value a channel can hold.
const MAX_CHANNEL_VALUE: u32 = u8::MAX as u32;

fn check_same_size<const C: usize>(
    src: &Image<u8, C>,
    dst: &Image<u8, C>,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }
    Ok(())
}

/// Blur an image with a 3x3 box filter clipped at the image border.
///
/// Every output channel is the truncated integer average of the pixels in
/// the 3x3 neighborhood that lie inside the image, so the denominator ranges
/// from 4 at a corner (1 for a single pixel image) to 9 for an interior pixel.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if `src` and `dst` differ in size.
pub fn box_blur3_into<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
) -> Result<(), ImageError> {
    check_same_size(src, dst)?;

    let weights = [[BOX_WEIGHTS]; 3];
    let cols = src.cols();
    if cols == 0 {
        return Ok(());
    }

    dst.as_slice_mut()
        .chunks_exact_mut(cols * C)
        .enumerate()
        .for_each(|(r, dst_row)| {
            dst_row
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(c, dst_pixel)| {
                    let window = aggregate_window(src, r, c, &weights);
                    for (dst_val, &sum) in dst_pixel.iter_mut().zip(window.sums[0].iter()) {
                        *dst_val = (sum / window.count) as u8;
                    }
                });
        });

    Ok(())
}

/// Blur an image in place with a 3x3 box filter.
///
/// The blurred pixels are computed into a temporary image that reads only
/// from the untouched source; the source is replaced once the whole image is
/// done. See [`box_blur3_into`] for the averaging rule.
///
/// # Errors
///
/// Returns [`ImageError::AllocationFailed`] if the temporary image cannot be
/// allocated, in which case `image` is left unmodified.
///
/// # Example
///
/// ```
/// use tinta_image::Image;
/// use tinta_imgproc::filter::box_blur3;
///
/// let mut image = Image::<u8, 3>::from_rows(vec![vec![
///     [0, 0, 0],
///     [255, 255, 255],
///     [0, 0, 0],
/// ]])
/// .unwrap();
///
/// box_blur3(&mut image).unwrap();
///
/// assert_eq!(image.get_pixel(1, 0).unwrap(), [85, 85, 85]);
/// ```
pub fn box_blur3<const C: usize>(image: &mut Image<u8, C>) -> Result<(), ImageError> {
    log::debug!("box_blur3: {}", image.size());
    let now = Instant::now();

    let mut blurred = Image::from_size_val(image.size(), 0u8)?;
    box_blur3_into(image, &mut blurred)?;
    *image = blurred;

    log::debug!("box_blur3 elapsed: {:?}", now.elapsed());
    Ok(())
}

/// Compute the sobel gradient magnitude of one channel.
///
/// The square root is truncated toward zero and the result is clamped to
/// the channel range afterwards.
///
/// # Arguments
///
/// * `gx` - The horizontal gradient accumulator.
/// * `gy` - The vertical gradient accumulator.
///
/// # Example
///
/// ```
/// use tinta_imgproc::filter::gradient_magnitude;
///
/// assert_eq!(gradient_magnitude(3, 4), 5);
/// assert_eq!(gradient_magnitude(-1020, 0), 255);
/// ```
pub fn gradient_magnitude(gx: i32, gy: i32) -> u8 {
    let squared = gx as i64 * gx as i64 + gy as i64 * gy as i64;
    let magnitude = (squared as f64).sqrt() as u32;
    magnitude.min(MAX_CHANNEL_VALUE) as u8
}

/// Detect edges with the 3x3 sobel operator, channel by channel.
///
/// For each pixel and channel the horizontal and vertical sobel responses
/// are accumulated over the neighbors inside the image (pixels beyond the
/// border count as zero) and combined with [`gradient_magnitude`].
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if `src` and `dst` differ in size.
pub fn sobel_edges_into<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
) -> Result<(), ImageError> {
    check_same_size(src, dst)?;

    let (sobel_x, sobel_y) = kernels::sobel_kernel3();
    let weights = [
        [sobel_x[0], sobel_y[0]],
        [sobel_x[1], sobel_y[1]],
        [sobel_x[2], sobel_y[2]],
    ];

    let cols = src.cols();
    if cols == 0 {
        return Ok(());
    }

    dst.as_slice_mut()
        .chunks_exact_mut(cols * C)
        .enumerate()
        .for_each(|(r, dst_row)| {
            dst_row
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(c, dst_pixel)| {
                    let [grad_x, grad_y] = aggregate_window(src, r, c, &weights).sums;
                    for ((dst_val, &gx), &gy) in
                        dst_pixel.iter_mut().zip(grad_x.iter()).zip(grad_y.iter())
                    {
                        *dst_val = gradient_magnitude(gx, gy);
                    }
                });
        });

    Ok(())
}

/// Detect edges in place with the 3x3 sobel operator.
///
/// Edge values depend on the original neighbors, so they are computed into a
/// temporary image first and moved over `image` at the end.
///
/// # Errors
///
/// Returns [`ImageError::AllocationFailed`] if the temporary image cannot be
/// allocated, in which case `image` is left unmodified.
///
/// # Example
///
/// ```
/// use tinta_image::{Image, ImageSize};
/// use tinta_imgproc::filter::sobel_edges;
///
/// let mut image = Image::<u8, 3>::from_size_val(
///     ImageSize {
///         width: 4,
///         height: 4,
///     },
///     128,
/// )
/// .unwrap();
///
/// sobel_edges(&mut image).unwrap();
///
/// // interior pixels of a flat image have no gradient
/// assert_eq!(image.get_pixel(1, 1).unwrap(), [0, 0, 0]);
/// ```
pub fn sobel_edges<const C: usize>(image: &mut Image<u8, C>) -> Result<(), ImageError> {
    log::debug!("sobel_edges: {}", image.size());
    let now = Instant::now();

    let mut edges = Image::from_size_val(image.size(), 0u8)?;
    sobel_edges_into(image, &mut edges)?;
    *image = edges;

    log::debug!("sobel_edges elapsed: {:?}", now.elapsed());
    Ok(())
}
