//! Pure conversions between the RGB, CMYK, and HSV color models.
//!
//! RGB is the canonical representation; CMYK and HSV are integer-quantized
//! views derived from it. Derived percentages and degrees are truncated
//! toward zero, not rounded, so a round trip through a derived model can
//! move a channel by a few 8-bit steps (the derived models only resolve
//! 100 or 360 levels).

/// 8-bit RGB color, the canonical representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// CMYK view: each channel a percentage in 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

/// HSV view: hue in integer degrees 0..=360, saturation and value in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: u16,
    pub s: u8,
    pub v: u8,
}

/// Convert RGB to CMYK percentages, truncated toward zero.
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let k = 1.0 - r.max(g).max(b);
    if k >= 1.0 {
        // Pure black: the c/m/y formulas divide by (1 - k).
        return Cmyk {
            c: 0,
            m: 0,
            y: 0,
            k: 100,
        };
    }

    let c = (1.0 - r - k) / (1.0 - k);
    let m = (1.0 - g - k) / (1.0 - k);
    let y = (1.0 - b - k) / (1.0 - k);

    Cmyk {
        c: (c * 100.0) as u8,
        m: (m * 100.0) as u8,
        y: (y * 100.0) as u8,
        k: (k * 100.0) as u8,
    }
}

/// Convert CMYK percentages back to RGB, truncated and clamped to [0, 255].
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    let c = cmyk.c as f64 / 100.0;
    let m = cmyk.m as f64 / 100.0;
    let y = cmyk.y as f64 / 100.0;
    let k = cmyk.k as f64 / 100.0;

    let r = 255.0 * (1.0 - c) * (1.0 - k);
    let g = 255.0 * (1.0 - m) * (1.0 - k);
    let b = 255.0 * (1.0 - y) * (1.0 - k);

    Rgb {
        r: r.clamp(0.0, 255.0) as u8,
        g: g.clamp(0.0, 255.0) as u8,
        b: b.clamp(0.0, 255.0) as u8,
    }
}

/// Convert RGB to HSV via max/min channel decomposition.
/// Hue is truncated to integer degrees in [0, 360), s and v to [0, 100].
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let r = rgb.r as f64;
    let g = rgb.g as f64;
    let b = rgb.b as f64;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max / 255.0;
    let s = if max > 0.0 { delta / max } else { 0.0 };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        let h = 60.0 * (g - b) / delta;
        if h < 0.0 { h + 360.0 } else { h }
    } else if max == g {
        120.0 + 60.0 * (b - r) / delta
    } else {
        240.0 + 60.0 * (r - g) / delta
    };

    Hsv {
        h: h as u16,
        s: (s * 100.0) as u8,
        v: (v * 100.0) as u8,
    }
}

/// Convert HSV back to RGB by hexagonal sector decomposition.
/// A hue of 360 wraps to 0; 8-bit channels are rounded to nearest.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let s = (hsv.s.min(100)) as f64 / 100.0;
    let v = (hsv.v.min(100)) as f64 / 100.0;

    if s <= 0.0 {
        let c = (v * 255.0 + 0.5) as u8;
        return Rgb { r: c, g: c, b: c };
    }

    let h6 = (hsv.h % 360) as f64 / 60.0;
    let sector = h6.floor();
    let f = h6 - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector as u32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb {
        r: (r * 255.0 + 0.5) as u8,
        g: (g * 255.0 + 0.5) as u8,
        b: (b * 255.0 + 0.5) as u8,
    }
}
