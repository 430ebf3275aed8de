//! Physical layout of the tree
//!
//! ```text
//!       USB
//!        0
//!    7   8   1
//! 6   11 12 9   2
//!    5   10   3
//!        4
//! ```
//!
//! The pixels form three logical rings: the bottom ring (0-7), the middle
//! ring (8-11) and a single apex pixel (12).

use crate::Rgb;

/// Number of pixels on the tree
pub const LED_COUNT: usize = 13;

/// Bottom ring, eight pixels
pub const BOTTOM_RING: RingBounds = RingBounds::new(0, 8);
/// Middle ring, four pixels
pub const MIDDLE_RING: RingBounds = RingBounds::new(8, 12);
/// Single apex pixel
pub const APEX: RingBounds = RingBounds::new(12, 13);

/// Pixel range of one ring (`end` is exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingBounds {
    pub start: u8,
    pub end: u8,
}

impl RingBounds {
    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    /// Get the number of pixels in the ring
    pub const fn count(self) -> u8 {
        self.end - self.start
    }

    /// Check if the pixel index belongs to the ring
    pub const fn contains(self, index: usize) -> bool {
        index >= self.start as usize && index < self.end as usize
    }

    /// Get the ring pixels out of a full frame
    pub fn slice_mut(self, leds: &mut [Rgb]) -> &mut [Rgb] {
        let end = (self.end as usize).min(leds.len());
        let start = (self.start as usize).min(end);
        &mut leds[start..end]
    }

    /// Fill the whole ring with one color
    pub fn fill(self, leds: &mut [Rgb], color: Rgb) {
        self.slice_mut(leds).fill(color);
    }
}
