//! Binarization: fixed-level thresholding and Otsu automatic level selection.
//!
//! Both operate on the grid's grayscale proxy, which is the red channel.
//! That is the algorithm's defined behavior, not a shortcut; swapping in a
//! luminance formula would change every output value.

use crate::error::Error;
use crate::grid::PixelGrid;

const WHITE: [u8; 3] = [255, 255, 255];
const BLACK: [u8; 3] = [0, 0, 0];

/// Binarize: white where the grayscale proxy is >= `threshold`, else black.
pub fn fixed_threshold(grid: &PixelGrid, threshold: u8) -> Result<PixelGrid, Error> {
    if grid.is_empty() {
        return Err(Error::EmptyInput);
    }
    let pixels = grid
        .pixels()
        .iter()
        .map(|p| if p[0] >= threshold { WHITE } else { BLACK })
        .collect();
    Ok(PixelGrid::from_pixels(grid.width(), grid.height(), pixels))
}

/// 256-bucket histogram of the grayscale proxy over all pixels.
pub fn histogram(grid: &PixelGrid) -> [u64; 256] {
    let mut hist = [0u64; 256];
    for p in grid.pixels() {
        hist[p[0] as usize] += 1;
    }
    hist
}

/// Select the threshold maximizing between-class variance (Otsu's method).
///
/// Class means use integer division; the between-class quantity is the
/// unnormalized proxy `w_b * w_f * (m_b - m_f)^2` in 64-bit. Ties keep the
/// smallest candidate, since the scan only updates on a strict maximum.
pub fn otsu_level(grid: &PixelGrid) -> Result<u8, Error> {
    if grid.is_empty() {
        return Err(Error::EmptyInput);
    }
    let hist = histogram(grid);
    let total = (grid.width() * grid.height()) as u64;
    let sum: u64 = hist.iter().enumerate().map(|(i, &n)| i as u64 * n).sum();

    let mut w_b: u64 = 0;
    let mut sum_b: u64 = 0;
    let mut best = 0u8;
    let mut max_between: u64 = 0;

    for t in 0..=255usize {
        w_b += hist[t];
        if w_b == 0 {
            continue;
        }
        let w_f = total - w_b;
        if w_f == 0 {
            // No foreground left; later candidates cannot split the pixels.
            break;
        }
        sum_b += t as u64 * hist[t];

        let m_b = (sum_b / w_b) as i64;
        let m_f = ((sum - sum_b) / w_f) as i64;
        let diff = m_b - m_f;
        let between = w_b * w_f * (diff * diff) as u64;

        if between > max_between {
            max_between = between;
            best = t as u8;
        }
    }
    Ok(best)
}

/// Compute the Otsu level and binarize with it.
/// Returns the chosen level alongside the binarized grid.
pub fn otsu_threshold(grid: &PixelGrid) -> Result<(u8, PixelGrid), Error> {
    let level = otsu_level(grid)?;
    let binarized = fixed_threshold(grid, level)?;
    Ok((level, binarized))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_of(width: usize, height: usize, proxies: &[u8]) -> PixelGrid {
        let pixels = proxies.iter().map(|&v| [v, v, v]).collect();
        PixelGrid::from_pixels(width, height, pixels)
    }

    #[test]
    fn empty_grid_is_rejected() {
        let empty = PixelGrid::filled(0, 4, [0, 0, 0]);
        assert_eq!(fixed_threshold(&empty, 128), Err(Error::EmptyInput));
        assert_eq!(otsu_level(&empty), Err(Error::EmptyInput));
        assert!(otsu_threshold(&empty).is_err());
    }

    #[test]
    fn threshold_splits_on_the_red_channel_only() {
        let grid = PixelGrid::from_pixels(
            2,
            1,
            vec![
                [200, 0, 0],   // bright proxy despite dark g/b
                [0, 255, 255], // dark proxy despite bright g/b
            ],
        );
        let out = fixed_threshold(&grid, 100).unwrap();
        assert_eq!(out.pixel(0, 0), [255, 255, 255]);
        assert_eq!(out.pixel(1, 0), [0, 0, 0]);
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        let grid = grid_of(2, 1, &[128, 127]);
        let out = fixed_threshold(&grid, 128).unwrap();
        assert_eq!(out.pixel(0, 0), [255, 255, 255]);
        assert_eq!(out.pixel(1, 0), [0, 0, 0]);
    }

    #[test]
    fn threshold_is_idempotent() {
        let proxies: Vec<u8> = (0..=255).collect();
        let grid = grid_of(16, 16, &proxies);
        let once = fixed_threshold(&grid, 77).unwrap();
        let twice = fixed_threshold(&once, 77).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn histogram_counts_every_pixel() {
        let grid = grid_of(3, 2, &[0, 0, 10, 10, 10, 255]);
        let hist = histogram(&grid);
        assert_eq!(hist[0], 2);
        assert_eq!(hist[10], 3);
        assert_eq!(hist[255], 1);
        assert_eq!(hist.iter().sum::<u64>(), 6);
    }

    #[test]
    fn otsu_separates_a_bimodal_grid() {
        // 499 pixels at 10, 500 at 200, one mid-gray outlier to break the
        // plateau between the modes.
        let mut proxies = vec![10u8; 499];
        proxies.extend(std::iter::repeat_n(200u8, 500));
        proxies.push(100);
        let grid = grid_of(50, 20, &proxies);

        let (level, binarized) = otsu_threshold(&grid).unwrap();
        assert!(level > 10 && level < 200, "level = {level}");

        for (p, &proxy) in binarized.pixels().iter().zip(&proxies) {
            match proxy {
                10 => assert_eq!(*p, [0, 0, 0]),
                200 => assert_eq!(*p, [255, 255, 255]),
                _ => {}
            }
        }
    }

    #[test]
    fn otsu_ties_break_to_the_smallest_candidate() {
        // Two equal spikes: the between-class quantity is flat between
        // them, so the first maximum wins.
        let grid = grid_of(4, 2, &[10, 10, 10, 10, 200, 200, 200, 200]);
        assert_eq!(otsu_level(&grid).unwrap(), 10);
    }

    #[test]
    fn otsu_on_a_uniform_grid_finds_no_split() {
        let grid = grid_of(4, 4, &[7; 16]);
        assert_eq!(otsu_level(&grid).unwrap(), 0);
    }
}
