//! Frame buffer backed strip driver
//!
//! Owns the pixel buffer between refreshes and pushes it through any
//! [`SmartLedsWrite`] writer (RMT, SPI or PWM based WS2812 adapters).

use core::fmt;

use smart_leds::SmartLedsWrite;

use crate::LedStrip;
use crate::color::{BLACK, Rgb};

/// Error returned by [`BufferedStrip`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripError<E> {
    /// Pixel index past the end of the buffer
    IndexOutOfRange { index: usize, len: usize },
    /// The underlying writer failed to send the frame
    Write(E),
}

impl<E: fmt::Debug> fmt::Display for StripError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "pixel {index} is out of range for {len} LEDs")
            }
            Self::Write(err) => write!(f, "failed to write frame: {err:?}"),
        }
    }
}

/// LED strip with an owned frame buffer of `N` pixels
pub struct BufferedStrip<W, const N: usize> {
    writer: W,
    pixels: [Rgb; N],
}

impl<W, const N: usize> BufferedStrip<W, N>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    /// Create a new strip with every pixel off
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            pixels: [BLACK; N],
        }
    }

    /// Currently staged pixels
    pub const fn pixels(&self) -> &[Rgb; N] {
        &self.pixels
    }

    /// Get a reference to the writer
    pub const fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W, const N: usize> LedStrip for BufferedStrip<W, N>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    type Error = StripError<W::Error>;

    fn len(&self) -> usize {
        N
    }

    fn clear(&mut self) {
        self.pixels = [BLACK; N];
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), Self::Error> {
        let pixel = self
            .pixels
            .get_mut(index)
            .ok_or(StripError::IndexOutOfRange { index, len: N })?;
        *pixel = color;
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), Self::Error> {
        self.writer
            .write(self.pixels.iter().copied())
            .map_err(StripError::Write)
    }
}
