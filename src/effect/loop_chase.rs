//! Loop chase effect
//!
//! A bright dot with two dim neighbours runs around the strip and wraps
//! from the last pixel back to the first.

use super::Effect;
use crate::{LedStrip, color::Rgb};

/// Color of the leading pixel
const HEAD_COLOR: Rgb = Rgb { r: 0, g: 0, b: 50 };
/// Color of the pixels on both sides of the head
const TAIL_COLOR: Rgb = Rgb { r: 0, g: 0, b: 15 };

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopChaseEffect {
    /// Number of pixels the chase wraps around
    len: usize,
    /// Current head position, always in `[0, len)`
    index: usize,
}

impl LoopChaseEffect {
    pub const fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    /// Current head position
    pub const fn index(&self) -> usize {
        self.index
    }

    const fn previous(&self) -> usize {
        (self.index + self.len - 1) % self.len
    }

    const fn next(&self) -> usize {
        (self.index + 1) % self.len
    }
}

impl Effect for LoopChaseEffect {
    const PERIOD_DIVISOR: u32 = 2;

    fn render<S: LedStrip>(&self, strip: &mut S) -> Result<(), S::Error> {
        strip.clear();
        if self.len == 0 {
            return Ok(());
        }

        strip.set_pixel(self.previous(), TAIL_COLOR)?;
        strip.set_pixel(self.next(), TAIL_COLOR)?;
        // Head goes last so it wins on strips of one or two pixels
        strip.set_pixel(self.index, HEAD_COLOR)
    }

    fn advance(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = self.next();
    }

    fn reset(&mut self) {
        self.index = 0;
    }
}
