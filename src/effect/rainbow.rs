//! Rainbow cycle effect
//!
//! Spreads the full hue circle evenly along the strip and slowly rotates
//! it. Every pixel is overwritten each frame so the strip is never cleared.

use libm::fmodf;

use super::Effect;
use crate::{LedStrip, color::hsv_to_rgb};

const FULL_CIRCLE: f32 = 360.0;
/// Hue rotation per frame, in degrees
const HUE_STEP: f32 = 3.0;
const SATURATION: f32 = 1.0;
/// Kept dim so a bare strip does not blind anyone
const VALUE: f32 = 0.3;

#[derive(Debug, Clone, PartialEq)]
pub struct RainbowEffect {
    len: usize,
    /// Rotation of the rainbow in `[0, 360)` degrees
    hue_offset: f32,
}

impl RainbowEffect {
    pub const fn new(len: usize) -> Self {
        Self {
            len,
            hue_offset: 0.0,
        }
    }

    pub const fn hue_offset(&self) -> f32 {
        self.hue_offset
    }

    /// Hue shown by pixel `index` for the current offset
    #[allow(clippy::cast_precision_loss)]
    pub fn hue_at(&self, index: usize) -> f32 {
        let spacing = FULL_CIRCLE / self.len as f32;
        fmodf(index as f32 * spacing + self.hue_offset, FULL_CIRCLE)
    }
}

impl Effect for RainbowEffect {
    const PERIOD_DIVISOR: u32 = 2;

    fn render<S: LedStrip>(&self, strip: &mut S) -> Result<(), S::Error> {
        for index in 0..self.len {
            let color = hsv_to_rgb(self.hue_at(index), SATURATION, VALUE);
            strip.set_pixel(index, color)?;
        }
        Ok(())
    }

    fn advance(&mut self) {
        self.hue_offset = fmodf(self.hue_offset + HUE_STEP, FULL_CIRCLE);
    }

    fn reset(&mut self) {
        self.hue_offset = 0.0;
    }
}
