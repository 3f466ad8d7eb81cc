#![no_std]

pub mod color;
pub mod config;
pub mod effect;
pub mod frame_scheduler;
pub mod strip;

pub use color::{Hsv, Rgb, hsv_to_rgb};
pub use config::{DEFAULT_BASE_PERIOD, DEFAULT_LED_COUNT, DemoConfig};
pub use effect::{Effect, EffectId, EffectSlot};
pub use embassy_time::Duration;
pub use frame_scheduler::{FrameError, FrameScheduler};
pub use strip::{BufferedStrip, StripError};

/// Addressable LED strip driver
///
/// Implement this trait to support different hardware platforms.
/// Effects stage pixels through it and the frame scheduler commits them
/// with [`LedStrip::refresh`].
pub trait LedStrip {
    type Error;

    /// Number of pixels the strip holds
    fn len(&self) -> usize;

    /// Check if the strip has no pixels
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Turn every staged pixel off
    fn clear(&mut self);

    /// Stage one pixel color
    fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), Self::Error>;

    /// Send the staged pixels to the LEDs
    fn refresh(&mut self) -> Result<(), Self::Error>;
}

/// Kind of LED the demo drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedKind {
    /// Addressable strip
    Strip,
    /// Single LED on a GPIO pin
    Gpio,
}

/// LED output picked at startup
///
/// `P` is any `embedded_hal` output pin. Boards with only one kind of LED
/// fill the other parameter with [`NoPin`] or [`NoStrip`].
pub enum LedOutput<S, P> {
    Strip(S),
    Gpio(P),
}

impl<S, P> LedOutput<S, P> {
    pub const fn kind(&self) -> LedKind {
        match self {
            Self::Strip(_) => LedKind::Strip,
            Self::Gpio(_) => LedKind::Gpio,
        }
    }
}

/// Placeholder pin for boards that only drive a strip
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPin;

impl embedded_hal::digital::ErrorType for NoPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Placeholder strip for boards that only blink a GPIO LED
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStrip;

impl LedStrip for NoStrip {
    type Error = core::convert::Infallible;

    fn len(&self) -> usize {
        0
    }

    fn clear(&mut self) {}

    fn set_pixel(&mut self, _index: usize, _color: Rgb) -> Result<(), Self::Error> {
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
