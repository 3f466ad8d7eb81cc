//! Frame loop
//!
//! Runs the configured effect forever: stage a frame, push it to the LEDs,
//! advance the effect state and block until the next frame is due.
//! Pacing is best effort, a late frame only shows up as a visual hiccup.

use core::fmt;

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::config::DemoConfig;
use crate::effect::{BlinkEffect, EffectSlot, frame_period};
use crate::{LedKind, LedOutput, LedStrip};

/// Error raised while pushing a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError<S, P> {
    /// The strip rejected a pixel or failed to refresh
    Strip(S),
    /// The GPIO pin could not be driven
    Pin(P),
}

impl<S: fmt::Debug, P: fmt::Debug> fmt::Display for FrameError<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strip(err) => write!(f, "strip error: {err:?}"),
            Self::Pin(err) => write!(f, "pin error: {err:?}"),
        }
    }
}

/// Output together with the animation that drives it
enum Target<S, P> {
    Strip { strip: S, effect: EffectSlot },
    Gpio { pin: P, blink: BlinkEffect },
}

/// Blocking frame scheduler for a single effect
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(&DemoConfig::DEFAULT, LedOutput::Strip(strip));
/// scheduler.configure()?;
/// scheduler.run(&mut delay);
/// ```
pub struct FrameScheduler<S, P> {
    target: Target<S, P>,
    base_period: Duration,
}

impl<S: LedStrip, P: OutputPin> FrameScheduler<S, P> {
    /// Create a new frame scheduler
    ///
    /// A strip output plays `config.effect` sized to the strip, a GPIO
    /// output blinks.
    pub fn new(config: &DemoConfig, output: LedOutput<S, P>) -> Self {
        let target = match output {
            LedOutput::Strip(strip) => {
                let effect = config.effect.to_slot(strip.len());
                Target::Strip { strip, effect }
            }
            LedOutput::Gpio(pin) => Target::Gpio {
                pin,
                blink: BlinkEffect::new(),
            },
        };
        Self {
            target,
            base_period: config.base_period,
        }
    }

    /// Turn the LEDs off and rewind the animation before the first frame
    pub fn configure(&mut self) -> Result<(), FrameError<S::Error, P::Error>> {
        match &mut self.target {
            Target::Strip { strip, effect } => {
                effect.reset();
                #[cfg(feature = "esp32-log")]
                println!(
                    "frame_scheduler: configured to drive addressable LED strip ({} LEDs)",
                    strip.len()
                );
                strip.clear();
                strip.refresh().map_err(FrameError::Strip)?;
            }
            Target::Gpio { pin, blink } => {
                blink.reset();
                #[cfg(feature = "esp32-log")]
                println!("frame_scheduler: configured to blink GPIO LED");
                pin.set_low().map_err(FrameError::Pin)?;
            }
        }

        #[cfg(feature = "esp32-log")]
        if let Some(effect) = self.effect() {
            println!("frame_scheduler: starting effect {}", effect.id().as_str());
        }
        Ok(())
    }

    /// Process one frame
    ///
    /// Returns how long the caller should wait before the next frame.
    pub fn tick(&mut self) -> Result<Duration, FrameError<S::Error, P::Error>> {
        match &mut self.target {
            Target::Strip { strip, effect } => {
                effect.render(strip).map_err(FrameError::Strip)?;
                strip.refresh().map_err(FrameError::Strip)?;
                effect.advance();
            }
            Target::Gpio { pin, blink } => {
                blink.render(pin).map_err(FrameError::Pin)?;
                blink.advance();
            }
        }
        Ok(self.frame_period())
    }

    /// Run frames forever, blocking on `delay` between them
    ///
    /// A failed frame is dropped without advancing the animation. Frame
    /// delays are rounded down to whole milliseconds and capped at
    /// `u32::MAX` milliseconds.
    pub fn run<D: DelayNs>(mut self, delay: &mut D) -> !
    where
        S::Error: fmt::Debug,
    {
        loop {
            let period = match self.tick() {
                Ok(period) => period,
                Err(err) => {
                    #[cfg(feature = "esp32-log")]
                    println!("frame_scheduler: frame dropped: {}", err);
                    #[cfg(not(feature = "esp32-log"))]
                    let _ = err;
                    self.frame_period()
                }
            };
            delay.delay_ms(u32::try_from(period.as_millis()).unwrap_or(u32::MAX));
        }
    }

    /// Delay between two frames of the active animation
    pub fn frame_period(&self) -> Duration {
        match &self.target {
            Target::Strip { effect, .. } => effect.frame_period(self.base_period),
            Target::Gpio { .. } => frame_period(self.base_period, BlinkEffect::PERIOD_DIVISOR),
        }
    }

    pub fn kind(&self) -> LedKind {
        match self.target {
            Target::Strip { .. } => LedKind::Strip,
            Target::Gpio { .. } => LedKind::Gpio,
        }
    }

    /// Strip effect, `None` when blinking a GPIO LED
    pub fn effect(&self) -> Option<&EffectSlot> {
        match &self.target {
            Target::Strip { effect, .. } => Some(effect),
            Target::Gpio { .. } => None,
        }
    }

    /// Blink state, `None` when driving a strip
    pub fn blink(&self) -> Option<&BlinkEffect> {
        match &self.target {
            Target::Gpio { blink, .. } => Some(blink),
            Target::Strip { .. } => None,
        }
    }

    /// Get a reference to the strip driver
    pub fn strip(&self) -> Option<&S> {
        match &self.target {
            Target::Strip { strip, .. } => Some(strip),
            Target::Gpio { .. } => None,
        }
    }

    /// Get a reference to the GPIO pin
    pub fn pin(&self) -> Option<&P> {
        match &self.target {
            Target::Gpio { pin, .. } => Some(pin),
            Target::Strip { .. } => None,
        }
    }
}
