//! Global brightness levels
//!
//! Brightness is chosen as a discrete level and applied at the output as a
//! luminance scale, effects always render at full brightness.

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Number of brightness levels
pub const BRIGHTNESS_LEVEL_COUNT: u8 = 8;

const LEVEL_LUMINANCE: [u8; BRIGHTNESS_LEVEL_COUNT as usize] = [16, 32, 48, 64, 96, 128, 192, 255];

/// Get the luminance of a brightness level (1-8)
pub const fn level_luminance(level: u8) -> Option<u8> {
    if level == 0 || level > BRIGHTNESS_LEVEL_COUNT {
        return None;
    }
    Some(LEVEL_LUMINANCE[(level - 1) as usize])
}

/// Brightness level and its luminance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brightness {
    level: u8,
    luminance: u8,
}

impl Brightness {
    /// Create a brightness, invalid levels fall back to the highest one
    pub const fn new(level: u8) -> Self {
        match level_luminance(level) {
            Some(luminance) => Self { level, luminance },
            None => Self {
                level: BRIGHTNESS_LEVEL_COUNT,
                luminance: 255,
            },
        }
    }

    pub const fn level(self) -> u8 {
        self.level
    }

    pub const fn luminance(self) -> u8 {
        self.luminance
    }

    /// Change the level
    ///
    /// Returns `false` and keeps the current level if `level` is out of range.
    pub fn set_level(&mut self, level: u8) -> bool {
        let Some(luminance) = level_luminance(level) else {
            return false;
        };
        #[cfg(feature = "esp32-log")]
        println!(
            "[Brightness.set_level] level {} -> {} (luminance {})",
            self.level, level, luminance
        );
        self.level = level;
        self.luminance = luminance;
        true
    }
}
