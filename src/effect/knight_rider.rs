//! Knight rider sweep
//!
//! A red dot bounces between both ends of the strip, trailed by a medium
//! pixel and a dim pixel on each side.

use super::Effect;
use crate::{LedStrip, color::Rgb};

const FULL: Rgb = Rgb { r: 50, g: 0, b: 0 };
const MEDIUM: Rgb = Rgb { r: 20, g: 0, b: 0 };
const LOW: Rgb = Rgb { r: 5, g: 0, b: 0 };

/// Direction the sweep is moving in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepDirection {
    /// Towards the last pixel
    Forward,
    /// Towards the first pixel
    Backward,
}

impl SweepDirection {
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnightRiderEffect {
    len: usize,
    index: usize,
    direction: SweepDirection,
}

impl KnightRiderEffect {
    pub const fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            direction: SweepDirection::Forward,
        }
    }

    /// Current position of the bright pixel
    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn direction(&self) -> SweepDirection {
        self.direction
    }

    /// Stage `color` at `offset` pixels from the head if it lands on the strip
    fn stage_neighbour<S: LedStrip>(
        &self,
        strip: &mut S,
        offset: isize,
        color: Rgb,
    ) -> Result<(), S::Error> {
        match self.index.checked_add_signed(offset) {
            Some(index) if index < self.len => strip.set_pixel(index, color),
            _ => Ok(()),
        }
    }
}

impl Effect for KnightRiderEffect {
    const PERIOD_DIVISOR: u32 = 4;

    fn render<S: LedStrip>(&self, strip: &mut S) -> Result<(), S::Error> {
        strip.clear();
        if self.len == 0 {
            return Ok(());
        }

        strip.set_pixel(self.index, FULL)?;
        self.stage_neighbour(strip, -1, MEDIUM)?;
        self.stage_neighbour(strip, -2, LOW)?;
        self.stage_neighbour(strip, 1, MEDIUM)?;
        self.stage_neighbour(strip, 2, LOW)
    }

    fn advance(&mut self) {
        // Nowhere to sweep on a single pixel
        if self.len < 2 {
            return;
        }

        self.index = match self.direction {
            SweepDirection::Forward => self.index + 1,
            SweepDirection::Backward => self.index - 1,
        };
        if self.index == 0 || self.index == self.len - 1 {
            self.direction = self.direction.reversed();
        }
    }

    fn reset(&mut self) {
        self.index = 0;
        self.direction = SweepDirection::Forward;
    }
}
