use crate::color::COLOR_SELECTION_COUNT;
use crate::controller::Speed;
use crate::effect::{EFFECT_COUNT, EffectId};

/// Read-only view of the light state for status reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub brightness_level: u8,
    pub speed: Speed,
    pub effect: EffectId,
    /// Names of all effects, indexed by effect id
    pub effects: [&'static str; EFFECT_COUNT],
    pub color_selection: u8,
    /// Names of all color selections
    pub color_selections: [&'static str; COLOR_SELECTION_COUNT],
}

impl StatusSnapshot {
    pub const fn effect_name(&self) -> &'static str {
        self.effect.as_str()
    }

    pub const fn effect_index(&self) -> u8 {
        self.effect.as_raw()
    }

    /// Name of the active color selection
    pub fn color_selection_name(&self) -> Option<&'static str> {
        self.color_selections
            .get(usize::from(self.color_selection))
            .copied()
    }
}
