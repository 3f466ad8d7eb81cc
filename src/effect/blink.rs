//! Single LED blink
//!
//! Used when the board has a plain GPIO LED instead of an addressable
//! strip. Each frame drives the pin to the current state and then flips it.

use embedded_hal::digital::{OutputPin, PinState};

#[cfg(feature = "esp32-log")]
use esp_println::println;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlinkEffect {
    on: bool,
}

impl BlinkEffect {
    /// The LED toggles once per base period
    pub const PERIOD_DIVISOR: u32 = 1;

    pub const fn new() -> Self {
        Self { on: false }
    }

    /// Level the next frame drives the pin to
    pub const fn is_on(&self) -> bool {
        self.on
    }

    /// Drive the pin to the current level
    pub fn render<P: OutputPin>(&self, pin: &mut P) -> Result<(), P::Error> {
        #[cfg(feature = "esp32-log")]
        println!("blink: turning the LED {}", if self.on { "ON" } else { "OFF" });

        pin.set_state(PinState::from(self.on))
    }

    pub fn advance(&mut self) {
        self.on = !self.on;
    }

    pub fn reset(&mut self) {
        self.on = false;
    }
}
