//! Floating point HSV to RGB conversion
//!
//! Hue is an angle in degrees, saturation and value are unit-interval
//! intensities. The conversion uses the six-sector decomposition: each
//! 60 degree slice of the color wheel assigns chroma, the intermediate
//! component and zero to the channels in a fixed order.

use libm::{fabsf, fmodf, roundf};

use crate::color::Rgb;

/// Width of one hue sector in degrees
const SECTOR_DEGREES: f32 = 60.0;

/// HSV color with hue in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in `[0, 360)`
    pub hue: f32,
    /// Saturation in `[0, 1]`
    pub sat: f32,
    /// Value in `[0, 1]`
    pub val: f32,
}

impl Hsv {
    pub const fn new(hue: f32, sat: f32, val: f32) -> Self {
        Self { hue, sat, val }
    }

    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(self.hue, self.sat, self.val)
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        hsv.to_rgb()
    }
}

/// Convert an HSV triple to 8-bit RGB
///
/// `hue` must already be reduced to `[0, 360)`. A hue sitting exactly on a
/// sector boundary belongs to the upper sector, so 60 is yellow and 120 is
/// green.
pub fn hsv_to_rgb(hue: f32, sat: f32, val: f32) -> Rgb {
    let chroma = val * sat;
    let x = chroma * (1.0 - fabsf(fmodf(hue / SECTOR_DEGREES, 2.0) - 1.0));
    let m = val - chroma;

    let (r, g, b) = if hue < 60.0 {
        (chroma, x, 0.0)
    } else if hue < 120.0 {
        (x, chroma, 0.0)
    } else if hue < 180.0 {
        (0.0, chroma, x)
    } else if hue < 240.0 {
        (0.0, x, chroma)
    } else if hue < 300.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };

    Rgb {
        r: channel(r + m),
        g: channel(g + m),
        b: channel(b + m),
    }
}

/// Scale a unit-interval component to a rounded 8-bit channel
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(component: f32) -> u8 {
    roundf(component * 255.0).clamp(0.0, 255.0) as u8
}
