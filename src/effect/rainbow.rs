//! Rainbow cycling effects
//!
//! Provides two rainbow variants:
//! - Horizontal: hue ramps around the bottom and middle ring
//! - Vertical: one hue per ring, stepping up towards the apex
//!
//! Palette selections replace the hue wheel with palette samples.

use super::{Effect, EffectContext, EffectControl};
use crate::{
    bounds::{APEX, BOTTOM_RING, MIDDLE_RING},
    color::{Rgb, fill_rainbow, rainbow_color},
};

/// Hue step between neighbouring bottom ring pixels
const HUE_STEP: u8 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainbowOrientation {
    Horizontal,
    Vertical,
}

/// Rainbow effect, a full hue turn takes about 8 s of effect time
#[derive(Debug, Clone)]
pub struct RainbowEffect {
    orientation: RainbowOrientation,
}

impl RainbowEffect {
    pub const fn horizontal() -> Self {
        Self {
            orientation: RainbowOrientation::Horizontal,
        }
    }

    pub const fn vertical() -> Self {
        Self {
            orientation: RainbowOrientation::Vertical,
        }
    }

    fn render_horizontal(ctx: &EffectContext<'_>, leds: &mut [Rgb], hue: u8) {
        let bottom_step = HUE_STEP;
        let middle_step = HUE_STEP * 2;

        if ctx.is_color_palette() {
            let fill_palette = |ring: &mut [Rgb], step: u8| {
                let mut index = hue;
                for led in ring {
                    *led = ctx.palette_color(index, true);
                    index = index.wrapping_add(step);
                }
            };
            fill_palette(BOTTOM_RING.slice_mut(leds), bottom_step);
            fill_palette(MIDDLE_RING.slice_mut(leds), middle_step);
            APEX.fill(leds, ctx.palette_color(hue, true));
        } else {
            fill_rainbow(BOTTOM_RING.slice_mut(leds), hue, bottom_step);
            fill_rainbow(MIDDLE_RING.slice_mut(leds), hue, middle_step);
            APEX.fill(leds, rainbow_color(hue));
        }
    }

    fn render_vertical(ctx: &EffectContext<'_>, leds: &mut [Rgb], hue: u8) {
        let mut colors = [Rgb::default(); 3];
        if ctx.is_color_palette() {
            let mut index = hue;
            for color in &mut colors {
                *color = ctx.palette_color(index, true);
                index = index.wrapping_add(HUE_STEP);
            }
        } else {
            fill_rainbow(&mut colors, hue, HUE_STEP);
        }

        BOTTOM_RING.fill(leds, colors[0]);
        MIDDLE_RING.fill(leds, colors[1]);
        APEX.fill(leds, colors[2]);
    }
}

impl Effect for RainbowEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render(
        &mut self,
        ctx: &mut EffectContext<'_>,
        leds: &mut [Rgb],
        time: u32,
    ) -> EffectControl {
        let hue = (time >> 5) as u8;

        match self.orientation {
            RainbowOrientation::Horizontal => Self::render_horizontal(ctx, leds, hue),
            RainbowOrientation::Vertical => Self::render_vertical(ctx, leds, hue),
        }

        EffectControl::new()
    }
}
