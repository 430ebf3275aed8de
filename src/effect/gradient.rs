//! Color gradient effects
//!
//! Both variants walk a triangular blend window from the current color to
//! the next one. Once the window has passed the next color the generator
//! advances and the effect restarts without a cross-fade.

use super::{Effect, EffectContext, EffectControl};
use crate::{
    bounds::{APEX, BOTTOM_RING, MIDDLE_RING},
    color::{Rgb, blend_colors, fill_gradient_rgb},
};

/// Blend value at which the gradient has fully moved to the next color
const BLEND_WRAP: u32 = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientOrientation {
    /// Gradient around each ring, apex at the start color
    Horizontal,
    /// Solid rings from bottom (start) to apex (end)
    Vertical,
}

#[derive(Debug, Clone)]
pub struct GradientEffect {
    orientation: GradientOrientation,
}

impl GradientEffect {
    pub const fn horizontal() -> Self {
        Self {
            orientation: GradientOrientation::Horizontal,
        }
    }

    pub const fn vertical() -> Self {
        Self {
            orientation: GradientOrientation::Vertical,
        }
    }
}

impl Effect for GradientEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render(
        &mut self,
        ctx: &mut EffectContext<'_>,
        leds: &mut [Rgb],
        time: u32,
    ) -> EffectControl {
        let mut control = EffectControl::new();
        let mut blend = time >> 5;
        if blend >= BLEND_WRAP {
            ctx.update_color();
            ctx.request_reset(true);
            control = control.without_fade();
            blend = 0;
        }

        let start = blend.saturating_sub(256) as u8;
        let end = blend.min(255) as u8;
        let middle = ((u16::from(start) + u16::from(end)) / 2) as u8;

        let (current, next) = (ctx.current(), ctx.next());
        let start_color = blend_colors(current, next, start);
        let end_color = blend_colors(current, next, end);

        match self.orientation {
            GradientOrientation::Horizontal => {
                fill_gradient_rgb(BOTTOM_RING.slice_mut(leds), start_color, end_color);
                fill_gradient_rgb(MIDDLE_RING.slice_mut(leds), start_color, end_color);
                APEX.fill(leds, start_color);
            }
            GradientOrientation::Vertical => {
                BOTTOM_RING.fill(leds, start_color);
                MIDDLE_RING.fill(leds, blend_colors(current, next, middle));
                APEX.fill(leds, end_color);
            }
        }

        control
    }
}
