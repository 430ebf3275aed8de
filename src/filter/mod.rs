//! Output stage between the frame buffer and the LED driver
//!
//! The frame keeps full 8-bit colors; brightness, gamma and dithering are
//! applied on 16-bit channels right before the pixels are written out.

mod brightness;
mod gamma;

pub use brightness::{BRIGHTNESS_LEVEL_COUNT, Brightness, level_luminance};
pub use gamma::{Dither, GammaTable};

use crate::color::Rgb;

/// Default gamma of WS2812 style pixels
pub const DEFAULT_GAMMA: f32 = 2.2;

/// Default number of dithered frames, as a power of two
pub const DEFAULT_DITHER_BITS: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputFilterConfig {
    /// Gamma exponent, 1.0 disables the correction
    pub gamma: f32,
    /// Temporal dithering depth, 0 disables dithering
    pub dither_bits: u8,
}

impl Default for OutputFilterConfig {
    fn default() -> Self {
        Self {
            gamma: DEFAULT_GAMMA,
            dither_bits: DEFAULT_DITHER_BITS,
        }
    }
}

/// Output filter - turns rendered frames into driver colors
#[derive(Debug, Clone)]
pub struct OutputFilter {
    brightness: Brightness,
    gamma: GammaTable,
    dither: Dither,
}

impl OutputFilter {
    pub fn new(config: &OutputFilterConfig, brightness_level: u8) -> Self {
        Self {
            brightness: Brightness::new(brightness_level),
            gamma: GammaTable::new(config.gamma),
            dither: Dither::new(config.dither_bits),
        }
    }

    pub const fn brightness(&self) -> Brightness {
        self.brightness
    }

    /// See [`Brightness::set_level`]
    pub fn set_brightness_level(&mut self, level: u8) -> bool {
        self.brightness.set_level(level)
    }

    /// Write `input` with brightness, gamma and dithering applied to `output`
    ///
    /// Steps the dithering once per call.
    pub fn apply(&mut self, input: &[Rgb], output: &mut [Rgb]) {
        self.dither.step();
        for (source, target) in input.iter().zip(output.iter_mut()) {
            *target = Rgb {
                r: self.channel(source.r),
                g: self.channel(source.g),
                b: self.channel(source.b),
            };
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn channel(&self, value: u8) -> u8 {
        let wide = u32::from(value) * 257;
        let dimmed = (wide * (u32::from(self.brightness.luminance()) + 1)) >> 8;
        let corrected = self.gamma.correct(dimmed as u16);
        (self.dither.apply(corrected) >> 8) as u8
    }
}
