//! Static fill effects
//!
//! `OffEffect` clears the tree, `SolidEffect` fills it with the current
//! color and lets the controller change that color over time.

use super::{Effect, EffectContext, EffectControl};
use crate::color::{BLACK, Rgb};

/// Turns every pixel off
#[derive(Debug, Clone, Copy, Default)]
pub struct OffEffect;

impl Effect for OffEffect {
    fn render(
        &mut self,
        _ctx: &mut EffectContext<'_>,
        leds: &mut [Rgb],
        _time: u32,
    ) -> EffectControl {
        leds.fill(BLACK);
        EffectControl::new()
    }
}

/// Fills all pixels with the current color
#[derive(Debug, Clone, Copy, Default)]
pub struct SolidEffect;

impl Effect for SolidEffect {
    fn render(
        &mut self,
        ctx: &mut EffectContext<'_>,
        leds: &mut [Rgb],
        _time: u32,
    ) -> EffectControl {
        leds.fill(ctx.current());
        EffectControl::new().with_auto_color_change()
    }
}
