/// A width x height grid of 8-bit RGB pixels, row-major.
///
/// Filter operations take a grid by reference and return a new, independently
/// owned grid; the source is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<[u8; 3]>,
}

impl PixelGrid {
    /// Create a grid filled with a single color.
    pub fn filled(width: usize, height: usize, pixel: [u8; 3]) -> Self {
        Self {
            width,
            height,
            pixels: vec![pixel; width * height],
        }
    }

    /// Create a grid from row-major pixel data.
    /// `pixels.len()` must equal `width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<[u8; 3]>) -> Self {
        assert_eq!(
            pixels.len(),
            width * height,
            "pixel buffer does not match grid dimensions"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// True when the grid has no pixels (zero width or height).
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        self.pixels[y * self.width + x]
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: [u8; 3]) {
        self.pixels[y * self.width + x] = pixel;
    }

    /// Row-major view of the raw pixel data.
    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }
}
