//! Cycling meta-effect
//!
//! Plays every other effect except `off` in registry order. An effect stays
//! active for a configured number of color changes, or until its effect time
//! reaches [`MAX_EFFECT_TIME`] for effects that never change color by
//! themselves.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{
    Effect, EffectContext, EffectControl, EffectId, EffectSlot, GradientEffect, RainbowEffect,
    RunningLightEffect, SolidEffect, TwinkleFoxEffect, TwoColorChangeEffect,
};
use crate::color::Rgb;

/// Number of effects the cycle goes through
pub const CYCLED_EFFECT_COUNT: usize = 8;

/// Effect time after which the active effect is replaced
pub const MAX_EFFECT_TIME: u32 = 60_000;

/// Color changes the gradients stay active for
const GRADIENT_CYCLES: u8 = 4;

#[derive(Debug, Clone)]
pub struct CyclingEffect {
    effects: [EffectSlot; CYCLED_EFFECT_COUNT],
    /// Color changes per effect before moving on
    cycles: [u8; CYCLED_EFFECT_COUNT],
    /// Color changes seen on the active effect
    color_changes: u8,
    index: usize,
    /// The active effect ran into the time cap
    cap_reached: bool,
}

impl Default for CyclingEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl CyclingEffect {
    pub fn new() -> Self {
        Self {
            effects: [
                EffectSlot::Solid(SolidEffect),
                EffectSlot::TwoColorChange(TwoColorChangeEffect::new()),
                EffectSlot::GradientHorizontal(GradientEffect::horizontal()),
                EffectSlot::GradientVertical(GradientEffect::vertical()),
                EffectSlot::RainbowHorizontal(RainbowEffect::horizontal()),
                EffectSlot::RainbowVertical(RainbowEffect::vertical()),
                EffectSlot::RunningLight(RunningLightEffect::new()),
                EffectSlot::TwinkleFox(TwinkleFoxEffect::new()),
            ],
            cycles: [1, 1, GRADIENT_CYCLES, GRADIENT_CYCLES, 1, 1, 1, 1],
            color_changes: 0,
            index: 0,
            cap_reached: false,
        }
    }

    /// Set the number of color changes for one effect
    ///
    /// Effects that are not part of the cycle are ignored.
    #[must_use]
    pub fn with_cycles(mut self, id: EffectId, cycles: u8) -> Self {
        if let Some(index) = self.position_of(id) {
            self.cycles[index] = cycles;
        }
        self
    }

    /// Effect currently shown
    pub fn active_effect(&self) -> EffectId {
        self.effects[self.index].id()
    }

    /// Color changes seen on the active effect
    pub const fn color_changes(&self) -> u8 {
        self.color_changes
    }

    pub fn cycles_of(&self, id: EffectId) -> Option<u8> {
        self.position_of(id).map(|index| self.cycles[index])
    }

    fn position_of(&self, id: EffectId) -> Option<usize> {
        self.effects.iter().position(|effect| effect.id() == id)
    }

    fn advance(&mut self) {
        self.color_changes = 0;
        self.cap_reached = false;
        self.index = (self.index + 1) % CYCLED_EFFECT_COUNT;
        self.effects[self.index].reset(false);

        #[cfg(feature = "esp32-log")]
        println!("[CyclingEffect.advance] now {}", self.active_effect().as_str());
    }
}

impl Effect for CyclingEffect {
    fn render(
        &mut self,
        ctx: &mut EffectContext<'_>,
        leds: &mut [Rgb],
        time: u32,
    ) -> EffectControl {
        let control = self.effects[self.index].render(ctx, leds, time);
        if time >= MAX_EFFECT_TIME {
            self.cap_reached = true;
            ctx.request_reset(true);
        }
        control
    }

    fn reset(&mut self, timer_only: bool) {
        if !timer_only {
            self.index = 0;
            self.color_changes = 0;
            self.cap_reached = false;
            self.effects[self.index].reset(false);
            return;
        }

        self.color_changes = self.color_changes.saturating_add(1);
        if self.cap_reached || self.color_changes >= self.cycles[self.index] {
            self.advance();
        } else {
            self.effects[self.index].reset(true);
        }
    }
}
