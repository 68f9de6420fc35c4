//! 3x3 sharpen convolution with per-channel clamping.

use crate::error::Error;
use crate::grid::PixelGrid;

/// Fixed sharpen kernel: center-heavy Laplacian.
pub const SHARPEN_KERNEL: [[i32; 3]; 3] = [[0, -1, 0], [-1, 5, -1], [0, -1, 0]];

/// Sharpen by convolving each RGB channel with `SHARPEN_KERNEL`.
///
/// The 1-pixel border has no full neighborhood and is copied from the
/// source unchanged. Grids smaller than 3x3 have no interior at all and
/// come back as a plain copy; an empty grid is an error.
pub fn sharpen(grid: &PixelGrid) -> Result<PixelGrid, Error> {
    if grid.is_empty() {
        return Err(Error::EmptyInput);
    }
    let width = grid.width();
    let height = grid.height();

    let mut out = grid.clone();
    if width < 3 || height < 3 {
        return Ok(out);
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            out.set_pixel(x, y, convolve_at(grid, x, y));
        }
    }
    Ok(out)
}

/// Weighted sum of the 3x3 neighborhood around (x, y), clamped to [0, 255].
/// Reads only the immutable source grid, never partially written output.
fn convolve_at(grid: &PixelGrid, x: usize, y: usize) -> [u8; 3] {
    let mut acc = [0i32; 3];
    for (j, row) in SHARPEN_KERNEL.iter().enumerate() {
        for (i, &weight) in row.iter().enumerate() {
            let pixel = grid.pixel(x + i - 1, y + j - 1);
            for c in 0..3 {
                acc[c] += pixel[c] as i32 * weight;
            }
        }
    }
    [
        acc[0].clamp(0, 255) as u8,
        acc[1].clamp(0, 255) as u8,
        acc[2].clamp(0, 255) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_is_rejected() {
        let empty = PixelGrid::filled(3, 0, [0, 0, 0]);
        assert_eq!(sharpen(&empty), Err(Error::EmptyInput));
    }

    #[test]
    fn uniform_grid_is_a_fixed_point() {
        // Neighbors match the center, so 5c - 4c = c everywhere; the border
        // is a copy by policy.
        let grid = PixelGrid::filled(5, 5, [90, 90, 90]);
        assert_eq!(sharpen(&grid).unwrap(), grid);
    }

    #[test]
    fn border_pixels_are_copied_from_the_source() {
        let mut grid = PixelGrid::filled(5, 5, [50, 50, 50]);
        for x in 1..4 {
            for y in 1..4 {
                grid.set_pixel(x, y, [(x * 40) as u8, (y * 40) as u8, 200]);
            }
        }
        let out = sharpen(&grid).unwrap();
        for i in 0..5 {
            assert_eq!(out.pixel(i, 0), grid.pixel(i, 0));
            assert_eq!(out.pixel(i, 4), grid.pixel(i, 4));
            assert_eq!(out.pixel(0, i), grid.pixel(0, i));
            assert_eq!(out.pixel(4, i), grid.pixel(4, i));
        }
    }

    #[test]
    fn oversized_sums_clamp_to_white() {
        // Center 100 over neighbors 25: 500 - 100 = 400 per channel.
        let mut grid = PixelGrid::filled(3, 3, [25, 25, 25]);
        grid.set_pixel(1, 1, [100, 100, 100]);
        let out = sharpen(&grid).unwrap();
        assert_eq!(out.pixel(1, 1), [255, 255, 255]);
    }

    #[test]
    fn negative_sums_clamp_to_black() {
        // Center 10 over neighbors 25: 50 - 100 = -50 per channel.
        let mut grid = PixelGrid::filled(3, 3, [25, 25, 25]);
        grid.set_pixel(1, 1, [10, 10, 10]);
        let out = sharpen(&grid).unwrap();
        assert_eq!(out.pixel(1, 1), [0, 0, 0]);
    }

    #[test]
    fn channels_convolve_independently() {
        let mut grid = PixelGrid::filled(3, 3, [0, 100, 25]);
        grid.set_pixel(1, 1, [0, 100, 10]);
        let out = sharpen(&grid).unwrap();
        // r: all zero stays zero; g: uniform stays put; b: 50 - 100 clamps.
        assert_eq!(out.pixel(1, 1), [0, 100, 0]);
    }

    #[test]
    fn grids_without_an_interior_pass_through() {
        for (w, h) in [(1, 1), (2, 2), (2, 5), (5, 2)] {
            let grid = PixelGrid::filled(w, h, [33, 66, 99]);
            assert_eq!(sharpen(&grid).unwrap(), grid);
        }
    }
}
