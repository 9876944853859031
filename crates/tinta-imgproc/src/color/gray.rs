use tinta_image::Image;

/// Average the three channels of an RGB8 pixel with truncating division.
#[inline]
fn average_rgb(pixel: &[u8]) -> u8 {
    let r = pixel[0] as u16;
    let g = pixel[1] as u16;
    let b = pixel[2] as u16;
    ((r + g + b) / 3) as u8
}

/// Convert an RGB8 image to grayscale in place.
///
/// Each channel of every pixel is replaced with the truncated mean of the
/// three channels:
///
/// Y = (R + G + B) / 3
///
/// Applying it twice gives the same result as applying it once.
///
/// # Example
///
/// ```
/// use tinta_image::Image;
/// use tinta_imgproc::color::grayscale;
///
/// let mut image = Image::<u8, 3>::from_rows(vec![vec![[10, 20, 31]]]).unwrap();
///
/// grayscale(&mut image);
///
/// assert_eq!(image.as_slice(), &[20, 20, 20]);
/// ```
pub fn grayscale(image: &mut Image<u8, 3>) {
    log::debug!("grayscale: {}", image.size());

    image.as_slice_mut().chunks_exact_mut(3).for_each(|pixel| {
        let avg = average_rgb(pixel);
        pixel.fill(avg);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinta_image::ImageError;

    #[test]
    fn test_grayscale() -> Result<(), ImageError> {
        let mut image = Image::<u8, 3>::from_rows(vec![
            vec![[0, 0, 0], [255, 255, 255]],
            vec![[1, 1, 0], [255, 0, 1]],
        ])?;

        grayscale(&mut image);

        #[rustfmt::skip]
        assert_eq!(
            image.as_slice(),
            &[
                0, 0, 0, 255, 255, 255,
                0, 0, 0, 85, 85, 85,
            ]
        );

        Ok(())
    }

    #[test]
    fn test_grayscale_idempotent() -> Result<(), ImageError> {
        let mut image = Image::<u8, 3>::from_rows(vec![vec![[12, 200, 99], [3, 4, 5]]])?;

        grayscale(&mut image);
        let once = image.clone();
        grayscale(&mut image);

        assert_eq!(image, once);

        Ok(())
    }
}
