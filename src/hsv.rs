use palette::Srgb;

/// Channel spread below which a color is treated as achromatic.
pub const ACHROMATIC_EPSILON: f64 = 0.00001;

/// Hue/saturation/value triple.
///
/// `hue` is in degrees, `[0, 360)`. It is `None` when the hue is undefined,
/// which happens for colors whose maximum channel is not positive but whose
/// channels still differ (only reachable with out-of-gamut input).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsv {
    pub hue: Option<f64>,
    pub saturation: f64,
    pub value: f64,
}

impl Hsv {
    pub fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self { hue: Some(hue), saturation, value }
    }
}

/// One of the six 60° slices of the hue circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Sector {
    RedYellow,
    YellowGreen,
    GreenCyan,
    CyanBlue,
    BlueMagenta,
    MagentaRed,
}

impl Sector {
    /// Anything outside `0..=5` lands in the last sector.
    fn from_index(i: i64) -> Self {
        match i {
            0 => Sector::RedYellow,
            1 => Sector::YellowGreen,
            2 => Sector::GreenCyan,
            3 => Sector::CyanBlue,
            4 => Sector::BlueMagenta,
            _ => Sector::MagentaRed,
        }
    }
}

/// Convert RGB to HSV.
///
/// Achromatic colors (channel spread below [`ACHROMATIC_EPSILON`]) get hue
/// `Some(0.0)` and zero saturation. The hue is `None` only when the channels
/// differ but the maximum is not positive. Equal maxima pick red, then green.
pub fn rgb_to_hsv(rgb: Srgb<f64>) -> Hsv {
    let (r, g, b) = (rgb.red, rgb.green, rgb.blue);
    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let delta = max - min;

    if delta < ACHROMATIC_EPSILON {
        return Hsv { hue: Some(0.0), saturation: 0.0, value: max };
    }
    if max <= 0.0 {
        return Hsv { hue: None, saturation: 0.0, value: max };
    }

    // Ties resolve to red first, then green.
    let sector = if r >= max {
        (g - b) / delta
    } else if g >= max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    let mut hue = sector * 60.0;
    if hue < 0.0 {
        hue += 360.0;
    }

    Hsv { hue: Some(hue), saturation: delta / max, value: max }
}

/// Convert HSV back to RGB. Zero saturation yields gray, and `None` hue is read as 0.
pub fn hsv_to_rgb(hsv: Hsv) -> Srgb<f64> {
    let Hsv { hue, saturation: s, value: v } = hsv;

    if s <= 0.0 {
        return Srgb::new(v, v, v);
    }

    let mut hh = hue.unwrap_or(0.0);
    if hh >= 360.0 {
        hh = 0.0;
    }
    hh /= 60.0;
    let i = hh.floor();
    let ff = hh - i;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * ff);
    let t = v * (1.0 - s * (1.0 - ff));

    let (r, g, b) = match Sector::from_index(i as i64) {
        Sector::RedYellow => (v, t, p),
        Sector::YellowGreen => (q, v, p),
        Sector::GreenCyan => (p, v, t),
        Sector::CyanBlue => (p, q, v),
        Sector::BlueMagenta => (t, p, v),
        Sector::MagentaRed => (v, p, q),
    };
    Srgb::new(r, g, b)
}
