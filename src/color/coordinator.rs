//! Keeps the RGB, CMYK, and HSV views of one logical color consistent.
//!
//! A frontend edits exactly one model at a time; the coordinator recomputes
//! the other two and suppresses the echo updates that refreshing those views
//! would otherwise feed back into it.

use super::ColorModel;
use super::convert::{self, Cmyk, Hsv, Rgb};
use crate::error::Error;

/// A fully specified value in one color model, as produced by a slider
/// commit or an external color picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorEdit {
    Rgb(Rgb),
    Cmyk(Cmyk),
    Hsv(Hsv),
}

impl ColorEdit {
    pub fn model(self) -> ColorModel {
        match self {
            ColorEdit::Rgb(_) => ColorModel::Rgb,
            ColorEdit::Cmyk(_) => ColorModel::Cmyk,
            ColorEdit::Hsv(_) => ColorModel::Hsv,
        }
    }
}

/// A settled color: all three models describing the same visible color
/// within integer-quantization tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorState {
    pub rgb: Rgb,
    pub cmyk: Cmyk,
    pub hsv: Hsv,
}

impl ColorState {
    fn from_rgb(rgb: Rgb) -> Self {
        Self {
            rgb,
            cmyk: convert::rgb_to_cmyk(rgb),
            hsv: convert::rgb_to_hsv(rgb),
        }
    }
}

/// Coordinates updates between the three color models.
///
/// The `updating` flag serializes one logical update against the echoes its
/// own propagation triggers; it is checked and cleared within a single
/// synchronous call, never across threads.
#[derive(Debug)]
pub struct ColorCoordinator {
    state: ColorState,
    updating: bool,
    applied: u64,
}

impl Default for ColorCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorCoordinator {
    /// Start settled on white.
    pub fn new() -> Self {
        Self {
            state: ColorState::from_rgb(Rgb {
                r: 255,
                g: 255,
                b: 255,
            }),
            updating: false,
            applied: 0,
        }
    }

    pub fn state(&self) -> &ColorState {
        &self.state
    }

    /// Number of updates that made it past the re-entrancy guard.
    pub fn updates_applied(&self) -> u64 {
        self.applied
    }

    /// Apply an edit from one model and re-derive the others.
    ///
    /// Returns `None` without touching any model if a previous update is
    /// still propagating. The edited model keeps the values as entered; the
    /// remaining models are derived from the recomputed RGB.
    pub fn apply_update(&mut self, edit: ColorEdit) -> Option<ColorState> {
        if self.updating {
            return None;
        }
        self.updating = true;
        self.applied += 1;

        let rgb = match edit {
            ColorEdit::Rgb(rgb) => rgb,
            ColorEdit::Cmyk(cmyk) => convert::cmyk_to_rgb(cmyk),
            ColorEdit::Hsv(hsv) => convert::hsv_to_rgb(hsv),
        };
        let mut state = ColorState::from_rgb(rgb);
        match edit {
            ColorEdit::Rgb(_) => {}
            ColorEdit::Cmyk(cmyk) => state.cmyk = cmyk,
            ColorEdit::Hsv(hsv) => state.hsv = hsv,
        }
        self.state = state;

        // Refreshing the derived views in a frontend fires their change
        // handlers; replay those echoes here so they hit the guard.
        for model in ColorModel::ALL {
            if *model != edit.model() {
                let echo = self.edit_for(*model);
                let suppressed = self.apply_update(echo);
                debug_assert!(suppressed.is_none());
            }
        }

        self.updating = false;
        Some(self.state)
    }

    /// Apply a text-field commit for one channel of one model.
    ///
    /// Malformed or out-of-range text fails with `InvalidInput` and leaves
    /// all three models untouched.
    pub fn apply_field_edit(
        &mut self,
        model: ColorModel,
        channel: usize,
        text: &str,
    ) -> Result<Option<ColorState>, Error> {
        let value: i64 = text
            .trim()
            .parse()
            .map_err(|_| Error::InvalidInput(format!("not an integer: {text:?}")))?;
        let edit = self.channel_edit(model, channel, value)?;
        Ok(self.apply_update(edit))
    }

    fn edit_for(&self, model: ColorModel) -> ColorEdit {
        match model {
            ColorModel::Rgb => ColorEdit::Rgb(self.state.rgb),
            ColorModel::Cmyk => ColorEdit::Cmyk(self.state.cmyk),
            ColorModel::Hsv => ColorEdit::Hsv(self.state.hsv),
        }
    }

    fn channel_edit(
        &self,
        model: ColorModel,
        channel: usize,
        value: i64,
    ) -> Result<ColorEdit, Error> {
        if channel >= model.channels() {
            return Err(Error::InvalidInput(format!(
                "{} has no channel {channel}",
                model.name()
            )));
        }
        let max: i64 = match (model, channel) {
            (ColorModel::Rgb, _) => 255,
            (ColorModel::Cmyk, _) => 100,
            (ColorModel::Hsv, 0) => 360,
            (ColorModel::Hsv, _) => 100,
        };
        if value < 0 || value > max {
            return Err(Error::InvalidInput(format!(
                "{} channel {channel} out of range 0..={max}: {value}",
                model.name()
            )));
        }

        Ok(match model {
            ColorModel::Rgb => {
                let mut rgb = self.state.rgb;
                match channel {
                    0 => rgb.r = value as u8,
                    1 => rgb.g = value as u8,
                    _ => rgb.b = value as u8,
                }
                ColorEdit::Rgb(rgb)
            }
            ColorModel::Cmyk => {
                let mut cmyk = self.state.cmyk;
                match channel {
                    0 => cmyk.c = value as u8,
                    1 => cmyk.m = value as u8,
                    2 => cmyk.y = value as u8,
                    _ => cmyk.k = value as u8,
                }
                ColorEdit::Cmyk(cmyk)
            }
            ColorModel::Hsv => {
                let mut hsv = self.state.hsv;
                match channel {
                    0 => hsv.h = value as u16,
                    1 => hsv.s = value as u8,
                    _ => hsv.v = value as u8,
                }
                ColorEdit::Hsv(hsv)
            }
        })
    }
}
