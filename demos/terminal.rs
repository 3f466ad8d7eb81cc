//! Terminal preview for the strip effects
//!
//! Draws the strip as a row of 24-bit colored dots and redraws it in place
//! every frame.
//!
//! ```text
//! cargo run --example terminal -- knight_rider 500
//! cargo run --example terminal -- gpio
//! ```

#![allow(clippy::print_stderr)]

use std::convert::Infallible;
use std::io::{self, Write};

use embassy_time::Delay;
use embedded_hal::digital::{ErrorType, OutputPin};
use smart_leds::SmartLedsWrite;
use strip_effects::{
    BufferedStrip, DEFAULT_LED_COUNT, DemoConfig, Duration, EffectId, FrameScheduler,
    LedOutput, NoPin, NoStrip, Rgb,
};

/// The effects keep the LEDs dim; stretch the channels so they show up on screen
const TERMINAL_GAIN: u8 = 4;

/// Writes frames to stdout as colored dots
struct TerminalWriter;

impl SmartLedsWrite for TerminalWriter {
    type Error = io::Error;
    type Color = Rgb;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        let mut out = io::stdout().lock();
        write!(out, "\r")?;
        for color in iterator {
            let color: Rgb = color.into();
            write!(
                out,
                "\x1b[38;2;{};{};{}m\u{25cf} ",
                color.r.saturating_mul(TERMINAL_GAIN),
                color.g.saturating_mul(TERMINAL_GAIN),
                color.b.saturating_mul(TERMINAL_GAIN),
            )?;
        }
        write!(out, "\x1b[0m")?;
        out.flush()
    }
}

/// Single LED drawn as a lamp symbol
struct TerminalPin;

impl TerminalPin {
    fn draw(on: bool) {
        let mut out = io::stdout().lock();
        let lamp = if on { "\x1b[33m\u{25cf} ON \x1b[0m" } else { "\u{25cb} OFF" };
        // Nothing sensible to do if the terminal is gone
        let _ = write!(out, "\r{lamp}").and_then(|()| out.flush());
    }
}

impl ErrorType for TerminalPin {
    type Error = Infallible;
}

impl OutputPin for TerminalPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Self::draw(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Self::draw(true);
        Ok(())
    }
}

fn main() {
    let mut args = std::env::args().skip(1);
    let mode = args.next().unwrap_or_else(|| EffectId::DEFAULT.as_str().into());
    let base_period = args
        .next()
        .and_then(|ms| ms.parse().ok())
        .map(Duration::from_millis)
        .unwrap_or(DemoConfig::DEFAULT.base_period);

    let mut delay = Delay;

    if mode == "gpio" {
        let config = DemoConfig::DEFAULT.with_base_period(base_period);
        let mut scheduler: FrameScheduler<NoStrip, TerminalPin> =
            FrameScheduler::new(&config, LedOutput::Gpio(TerminalPin));
        if let Err(err) = scheduler.configure() {
            eprintln!("failed to configure LED: {err}");
            return;
        }
        scheduler.run(&mut delay);
    }

    let Some(effect) = EffectId::parse_from_str(&mode) else {
        eprintln!("unknown effect {mode:?}, expected loop_chase, knight_rider, rainbow or gpio");
        return;
    };
    let config = DemoConfig::DEFAULT
        .with_effect(effect)
        .with_base_period(base_period);

    let strip: BufferedStrip<TerminalWriter, DEFAULT_LED_COUNT> =
        BufferedStrip::new(TerminalWriter);
    let mut scheduler = FrameScheduler::new(&config, LedOutput::<_, NoPin>::Strip(strip));
    if let Err(err) = scheduler.configure() {
        eprintln!("failed to configure LED strip: {err}");
        return;
    }
    scheduler.run(&mut delay);
}
