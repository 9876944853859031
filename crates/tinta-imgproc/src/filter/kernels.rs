/// Weights of a 3x3 kernel indexed as `[kernel_row][kernel_col]`.
///
/// Kernel row 0 applies to the row above the target pixel, row 1 to the
/// target's own row and row 2 to the row below. Within a row, column 0 is
/// the left neighbor, 1 the center and 2 the right neighbor.
pub type Kernel3 = [[i32; 3]; 3];

/// Unit weights for a single row of the 3x3 box blur.
pub const BOX_WEIGHTS: [i32; 3] = [1, 1, 1];

/// Horizontal Sobel kernel (Gx).
pub const SOBEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];

/// Vertical Sobel kernel (Gy).
pub const SOBEL_Y: Kernel3 = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Create the horizontal and vertical 3x3 sobel kernels.
///
/// # Returns
///
/// The `(gx, gy)` kernel pair.
pub fn sobel_kernel3() -> (Kernel3, Kernel3) {
    (SOBEL_X, SOBEL_Y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sobel_kernel3() {
        let (kernel_x, kernel_y) = sobel_kernel3();

        // gy is the transpose of gx
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(kernel_x[r][c], kernel_y[c][r]);
            }
        }

        // both kernels sum to zero so flat regions have no gradient
        assert_eq!(kernel_x.iter().flatten().sum::<i32>(), 0);
        assert_eq!(kernel_y.iter().flatten().sum::<i32>(), 0);
    }
}
