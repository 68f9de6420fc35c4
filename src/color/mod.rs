pub mod convert;
pub mod coordinator;

/// The three color models a frontend can edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorModel {
    Rgb,
    Cmyk,
    Hsv,
}

impl ColorModel {
    pub const ALL: &[ColorModel] = &[ColorModel::Rgb, ColorModel::Cmyk, ColorModel::Hsv];

    pub fn name(self) -> &'static str {
        match self {
            ColorModel::Rgb => "RGB",
            ColorModel::Cmyk => "CMYK",
            ColorModel::Hsv => "HSV",
        }
    }

    /// Number of editable channels in this model.
    pub fn channels(self) -> usize {
        match self {
            ColorModel::Rgb => 3,
            ColorModel::Cmyk => 4,
            ColorModel::Hsv => 3,
        }
    }
}
