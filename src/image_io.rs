use image::{DynamicImage, GenericImageView, ImageBuffer, Rgb, RgbImage};
use std::path::Path;

use crate::grid::PixelGrid;

pub fn load_image(path: &Path) -> Result<DynamicImage, String> {
    image::open(path).map_err(|e| format!("Failed to load image: {e}"))
}

pub fn save_image(img: &RgbImage, path: &Path) -> Result<(), String> {
    img.save(path).map_err(|e| format!("Failed to save image: {e}"))
}

/// Downscale to fit within the given bounds, preserving aspect ratio.
/// Images already inside the bounds are returned unchanged.
pub fn resize_to_fit(img: &DynamicImage, max_w: u32, max_h: u32) -> DynamicImage {
    let (iw, ih) = img.dimensions();
    if iw <= max_w && ih <= max_h {
        return img.clone();
    }
    let scale = f64::min(max_w as f64 / iw as f64, max_h as f64 / ih as f64);
    let new_w = (iw as f64 * scale).round().max(1.0) as u32;
    let new_h = (ih as f64 * scale).round().max(1.0) as u32;
    img.resize_exact(new_w, new_h, image::imageops::FilterType::Triangle)
}

/// Decode into the filter engine's pixel grid.
pub fn grid_from_image(img: &DynamicImage) -> PixelGrid {
    let rgb = img.to_rgb8();
    let (w, h) = rgb.dimensions();
    let pixels = rgb.pixels().map(|p| p.0).collect();
    PixelGrid::from_pixels(w as usize, h as usize, pixels)
}

/// Encode a pixel grid back into an image buffer for display or saving.
pub fn image_from_grid(grid: &PixelGrid) -> RgbImage {
    ImageBuffer::from_fn(grid.width() as u32, grid.height() as u32, |x, y| {
        Rgb(grid.pixel(x as usize, y as usize))
    })
}
