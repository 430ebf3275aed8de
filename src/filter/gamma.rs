//! Gamma correction and temporal dithering on 16-bit channels

/// Number of table segments, the table has one more entry
const SEGMENTS: usize = 256;

/// Gamma correction table for 16-bit channel values
///
/// Holds `SEGMENTS + 1` samples of the curve, values in between are
/// interpolated linearly.
#[derive(Debug, Clone)]
pub struct GammaTable {
    lut: [u16; SEGMENTS + 1],
}

impl GammaTable {
    /// Build the table for `gamma` (1.0 is linear)
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn new(gamma: f32) -> Self {
        let mut lut = [0u16; SEGMENTS + 1];
        for (index, entry) in lut.iter_mut().enumerate() {
            let x = index as f32 / SEGMENTS as f32;
            let y = libm::roundf(libm::powf(x, gamma) * 65536.0);
            *entry = y.clamp(0.0, 65535.0) as u16;
        }
        Self { lut }
    }

    /// Correct a 16-bit channel value
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn correct(&self, value: u16) -> u16 {
        let index = usize::from(value >> 8);
        let fraction = i32::from(value & 0xFF);
        let low = i32::from(self.lut[index]);
        let high = i32::from(self.lut[index + 1]);
        (low + (((high - low) * fraction) >> 8)) as u16
    }
}

/// Temporal dithering
///
/// Every output step moves a bit-reversed counter on, so the rounding error
/// of dim channels is spread over `2^bits` consecutive frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dither {
    bits: u8,
    step: u8,
    signal: u8,
}

impl Dither {
    /// Create a dither over `bits` frames, 0 disables dithering
    pub const fn new(bits: u8) -> Self {
        Self {
            bits: if bits > 8 { 8 } else { bits },
            step: 0,
            signal: 0,
        }
    }

    pub const fn is_enabled(self) -> bool {
        self.bits != 0
    }

    pub const fn signal(self) -> u8 {
        self.signal
    }

    /// Move to the next dither step
    #[allow(clippy::cast_possible_truncation)]
    pub fn step(&mut self) {
        if !self.is_enabled() {
            return;
        }
        let mask = ((1u16 << self.bits) - 1) as u8;
        self.step = self.step.wrapping_add(1) & mask;
        self.signal = self.step.reverse_bits();
        // center the signal, e.g. 0, 128, 64, 192 -> 31, 159, 95, 223
        if self.bits < 8 {
            self.signal += 1 << (7 - self.bits);
        }
    }

    /// Round a 16-bit value up for this step if its low byte is small enough
    #[allow(clippy::cast_possible_truncation)]
    pub const fn apply(self, value: u16) -> u16 {
        if !self.is_enabled() || value == 0 {
            return value;
        }
        if (value & 0xFF) as u8 <= self.signal {
            value.saturating_add(256)
        } else {
            value
        }
    }
}
