//! Two color change effect
//!
//! Even pixels show one color, odd pixels the other. The roles swap every
//! [`SWAP_TIME`] ms, cross-fading during the last [`FADE_TIME`] ms before
//! each swap.

use super::{Effect, EffectContext, EffectControl};
use crate::{
    color::{Rgb, blend_colors},
    math8::ease8_in_out_cubic,
};

/// Time between two role swaps
pub const SWAP_TIME: u32 = 2000;

/// Length of the cross-fade before a swap
pub const FADE_TIME: u32 = 512;

#[derive(Debug, Clone, Default)]
pub struct TwoColorChangeEffect {
    /// Effect time of the last swap
    swap_time: u32,
    swapped: bool,
}

impl TwoColorChangeEffect {
    pub const fn new() -> Self {
        Self {
            swap_time: 0,
            swapped: false,
        }
    }

    /// Check if the roles are currently swapped
    pub const fn is_swapped(&self) -> bool {
        self.swapped
    }

    fn role_color(&self, ctx: &EffectContext<'_>, second: bool) -> Rgb {
        if self.swapped == second {
            ctx.current()
        } else {
            ctx.next()
        }
    }
}

impl Effect for TwoColorChangeEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render(
        &mut self,
        ctx: &mut EffectContext<'_>,
        leds: &mut [Rgb],
        time: u32,
    ) -> EffectControl {
        let dt = time.saturating_sub(self.swap_time);
        let first = self.role_color(ctx, false);
        let second = self.role_color(ctx, true);

        let (even, odd) = if dt >= SWAP_TIME {
            self.swapped = !self.swapped;
            self.swap_time += SWAP_TIME;
            (second, first)
        } else if dt >= SWAP_TIME - FADE_TIME {
            // 512 ms map onto 0-255
            let fade = ease8_in_out_cubic(((dt - (SWAP_TIME - FADE_TIME)) >> 1) as u8);
            (
                blend_colors(first, second, fade),
                blend_colors(second, first, fade),
            )
        } else {
            (first, second)
        };

        for (index, led) in leds.iter_mut().enumerate() {
            *led = if index & 1 == 0 { even } else { odd };
        }

        EffectControl::new().with_auto_color_change()
    }

    fn reset(&mut self, _timer_only: bool) {
        self.swap_time = 0;
        self.swapped = false;
    }
}
