use std::ops::AddAssign;

use tinta_image::Image;

/// Weighted channel sums over the clipped neighborhood of a pixel.
///
/// `K` accumulators are computed side by side, one per weight row, so a
/// single pass can feed both gradients of the sobel operator. The box blur
/// uses a single accumulator and reads `count` as its denominator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeighborSum<const C: usize, const K: usize> {
    /// Weighted sums, indexed as `[accumulator][channel]`.
    pub sums: [[i32; C]; K],
    /// Number of in-bounds positions that contributed.
    pub count: i32,
}

impl<const C: usize, const K: usize> NeighborSum<C, K> {
    /// An empty aggregate with no contributing positions.
    pub fn zero() -> Self {
        Self {
            sums: [[0; C]; K],
            count: 0,
        }
    }
}

impl<const C: usize, const K: usize> AddAssign for NeighborSum<C, K> {
    fn add_assign(&mut self, rhs: Self) {
        for (lhs_sums, rhs_sums) in self.sums.iter_mut().zip(rhs.sums.iter()) {
            for (lhs, rhs) in lhs_sums.iter_mut().zip(rhs_sums.iter()) {
                *lhs += rhs;
            }
        }
        self.count += rhs.count;
    }
}

/// Aggregate the left, center and right neighbors of a pixel within one row.
///
/// Positions outside `[0, width)` are skipped: they add nothing to the sums
/// and are not counted. The center always contributes, so a 1 pixel wide row
/// yields a count of 1.
///
/// # Arguments
///
/// * `row` - The interleaved channel values of one image row.
/// * `col` - The column of the target pixel.
/// * `weights` - One `[left, center, right]` weight triple per accumulator.
///
/// PRECONDITION: `col` must be smaller than the row width; otherwise the
/// empty aggregate is returned.
///
/// # Example
///
/// ```
/// use tinta_imgproc::filter::{aggregate_row, kernels::BOX_WEIGHTS};
///
/// let row = [0u8, 0, 0, 255, 255, 255, 0, 0, 0];
/// let sum = aggregate_row::<3, 1>(&row, 0, &[BOX_WEIGHTS]);
///
/// assert_eq!(sum.sums, [[255, 255, 255]]);
/// assert_eq!(sum.count, 2);
/// ```
pub fn aggregate_row<const C: usize, const K: usize>(
    row: &[u8],
    col: usize,
    weights: &[[i32; 3]; K],
) -> NeighborSum<C, K> {
    let mut acc = NeighborSum::zero();

    let width = row.len() / C;
    if col >= width {
        return acc;
    }

    let first = col.saturating_sub(1);
    let last = (col + 1).min(width - 1);

    for x in first..=last {
        // position within the kernel row: 0 left, 1 center, 2 right
        let k = x + 1 - col;
        let pixel = &row[x * C..(x + 1) * C];
        for (sums, w) in acc.sums.iter_mut().zip(weights.iter()) {
            for (sum, &val) in sums.iter_mut().zip(pixel.iter()) {
                *sum += w[k] * val as i32;
            }
        }
        acc.count += 1;
    }

    acc
}

/// Aggregate the 3x3 neighborhood of a pixel, clipped at the image border.
///
/// The rows above and below the target are only visited when they exist;
/// a missing row contributes neither sums nor count. Each visited row is
/// aggregated with [`aggregate_row`] using the weights of its kernel row.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `row` - The row of the target pixel.
/// * `col` - The column of the target pixel.
/// * `weights` - The weights per kernel row (above, own, below).
pub fn aggregate_window<const C: usize, const K: usize>(
    src: &Image<u8, C>,
    row: usize,
    col: usize,
    weights: &[[[i32; 3]; K]; 3],
) -> NeighborSum<C, K> {
    let mut acc = NeighborSum::zero();

    let first = row.saturating_sub(1);
    let last = (row + 1).min(src.rows().saturating_sub(1));

    for y in first..=last {
        let Some(src_row) = src.row(y) else {
            break;
        };
        acc += aggregate_row(src_row, col, &weights[y + 1 - row]);
    }

    acc
}
