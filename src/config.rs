//! Stored light configuration
//!
//! The controller has no storage of its own. The surrounding firmware reads
//! a [`PersistedConfig`] at startup, applies it with
//! [`AnimationController::apply_config`](crate::AnimationController::apply_config)
//! and writes it back when asked to save.

use crate::controller::DEFAULT_BRIGHTNESS_LEVEL;

/// Raw configuration values as they are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistedConfig {
    /// Speed multiplier: 0, 1, 2 or 4
    pub speed: u8,
    /// Brightness level, 1-8
    pub brightness_level: u8,
    pub effect_index: u8,
    pub color_selection: u8,
}

impl Default for PersistedConfig {
    fn default() -> Self {
        Self {
            speed: 2,
            brightness_level: DEFAULT_BRIGHTNESS_LEVEL,
            effect_index: 0,
            color_selection: 0,
        }
    }
}

impl PersistedConfig {
    /// Take over the values of `current`
    ///
    /// Returns `true` if anything changed and the config needs to be
    /// written.
    pub fn update_from(&mut self, current: &Self) -> bool {
        let changed = self != current;
        *self = *current;
        changed
    }
}
