//! Effect system with compile-time known effect variants
//!
//! All strip effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait and keeps its animation state
//! in its own fields, so a frame is `render` followed by `advance`.

mod blink;
mod knight_rider;
mod loop_chase;
mod rainbow;

use embassy_time::Duration;

pub use blink::BlinkEffect;
pub use knight_rider::{KnightRiderEffect, SweepDirection};
pub use loop_chase::LoopChaseEffect;
pub use rainbow::RainbowEffect;

use crate::LedStrip;

const EFFECT_NAME_LOOP_CHASE: &str = "loop_chase";
const EFFECT_NAME_KNIGHT_RIDER: &str = "knight_rider";
const EFFECT_NAME_RAINBOW: &str = "rainbow";

const EFFECT_ID_LOOP_CHASE: u8 = 0;
const EFFECT_ID_KNIGHT_RIDER: u8 = 1;
const EFFECT_ID_RAINBOW: u8 = 2;

pub trait Effect {
    /// Divides the configured base period into the delay between frames
    const PERIOD_DIVISOR: u32;

    /// Stage the current frame on the strip
    ///
    /// The caller is responsible for refreshing the strip afterwards.
    fn render<S: LedStrip>(&self, strip: &mut S) -> Result<(), S::Error>;

    /// Move the animation one frame forward
    fn advance(&mut self);

    /// Reset effect state
    fn reset(&mut self) {}
}

/// Delay between frames for a base period split by `divisor`
pub fn frame_period(base: Duration, divisor: u32) -> Duration {
    base / divisor.max(1)
}

/// Effect slot - enum containing all possible strip effects
#[derive(Debug, Clone, PartialEq)]
pub enum EffectSlot {
    /// Dot running around the strip
    LoopChase(LoopChaseEffect),
    /// Dot bouncing between both ends
    KnightRider(KnightRiderEffect),
    /// Rotating rainbow
    Rainbow(RainbowEffect),
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    LoopChase = EFFECT_ID_LOOP_CHASE,
    KnightRider = EFFECT_ID_KNIGHT_RIDER,
    Rainbow = EFFECT_ID_RAINBOW,
}

impl Default for EffectId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl EffectId {
    pub const DEFAULT: Self = Self::Rainbow;

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_LOOP_CHASE => Self::LoopChase,
            EFFECT_ID_KNIGHT_RIDER => Self::KnightRider,
            EFFECT_ID_RAINBOW => Self::Rainbow,
            _ => return None,
        })
    }

    pub fn to_slot(self, led_count: usize) -> EffectSlot {
        match self {
            Self::LoopChase => EffectSlot::LoopChase(LoopChaseEffect::new(led_count)),
            Self::KnightRider => {
                EffectSlot::KnightRider(KnightRiderEffect::new(led_count))
            }
            Self::Rainbow => EffectSlot::Rainbow(RainbowEffect::new(led_count)),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoopChase => EFFECT_NAME_LOOP_CHASE,
            Self::KnightRider => EFFECT_NAME_KNIGHT_RIDER,
            Self::Rainbow => EFFECT_NAME_RAINBOW,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_LOOP_CHASE => Some(Self::LoopChase),
            EFFECT_NAME_KNIGHT_RIDER => Some(Self::KnightRider),
            EFFECT_NAME_RAINBOW => Some(Self::Rainbow),
            _ => None,
        }
    }
}

impl EffectSlot {
    /// Stage the current frame of the effect
    pub fn render<S: LedStrip>(&self, strip: &mut S) -> Result<(), S::Error> {
        match self {
            Self::LoopChase(effect) => effect.render(strip),
            Self::KnightRider(effect) => effect.render(strip),
            Self::Rainbow(effect) => effect.render(strip),
        }
    }

    /// Advance the effect by one frame
    pub fn advance(&mut self) {
        match self {
            Self::LoopChase(effect) => effect.advance(),
            Self::KnightRider(effect) => effect.advance(),
            Self::Rainbow(effect) => effect.advance(),
        }
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        match self {
            Self::LoopChase(effect) => Effect::reset(effect),
            Self::KnightRider(effect) => Effect::reset(effect),
            Self::Rainbow(effect) => Effect::reset(effect),
        }
    }

    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::LoopChase(_) => EffectId::LoopChase,
            Self::KnightRider(_) => EffectId::KnightRider,
            Self::Rainbow(_) => EffectId::Rainbow,
        }
    }

    /// Delay between two frames of this effect
    ///
    /// Derived from each effect's `Effect::PERIOD_DIVISOR` constant.
    pub fn frame_period(&self, base: Duration) -> Duration {
        let divisor = match self {
            Self::LoopChase(_) => LoopChaseEffect::PERIOD_DIVISOR,
            Self::KnightRider(_) => KnightRiderEffect::PERIOD_DIVISOR,
            Self::Rainbow(_) => RainbowEffect::PERIOD_DIVISOR,
        };
        frame_period(base, divisor)
    }
}
