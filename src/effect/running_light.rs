//! Running light effect
//!
//! A short lit segment runs through the pixel chain, one pixel every
//! 512 ms of effect time. The leading pixel fades in and the trailing pixel
//! fades out. After the segment left the chain there is one dark step, the
//! only moment the color may change.

use super::{Effect, EffectContext, EffectControl};
use crate::{
    color::{BLACK, Rgb, scale_video},
    math8::ease8_in_out_cubic,
};

/// Maximum number of lit pixels
pub const LIGHT_COUNT: usize = 4;

/// Effect time per step, as a shift
const STEP_SHIFT: u32 = 9;

const STEP_MASK: u32 = (1 << STEP_SHIFT) - 1;

#[derive(Debug, Clone, Default)]
pub struct RunningLightEffect {
    /// Effect time the current run started at
    run_start: u32,
}

impl RunningLightEffect {
    pub const fn new() -> Self {
        Self { run_start: 0 }
    }
}

impl Effect for RunningLightEffect {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss
    )]
    fn render(
        &mut self,
        ctx: &mut EffectContext<'_>,
        leds: &mut [Rgb],
        time: u32,
    ) -> EffectControl {
        let count = leds.len() as i32;
        let run_length = (leds.len() + LIGHT_COUNT) as u32;
        let elapsed = time.saturating_sub(self.run_start);
        let mut step = elapsed >> STEP_SHIFT;
        let fade = elapsed & STEP_MASK;

        leds.fill(BLACK);

        if step >= run_length {
            step = 0;
            self.run_start += run_length << STEP_SHIFT;
        }
        if step == 0 {
            return EffectControl::new().with_auto_color_change();
        }

        let step = step as i32;
        let color = ctx.current();

        let mut end = (count - step + LIGHT_COUNT as i32 - 1).min(count);
        if end != count {
            // second half of the step
            let fade_out = 255 - fade.saturating_sub(256).min(255) as u8;
            leds[end as usize] = scale_video(color, ease8_in_out_cubic(fade_out));
        }
        end -= 1;

        let mut start = (count - step).max(-1);
        if start != -1 {
            // first half of the step
            let fade_in = fade.min(255) as u8;
            leds[start as usize] = scale_video(color, ease8_in_out_cubic(fade_in));
        }
        start += 1;

        if end >= 0 && start < count && start <= end {
            leds[start as usize..=end as usize].fill(color);
        }

        EffectControl::new()
    }

    fn reset(&mut self, _timer_only: bool) {
        self.run_start = 0;
    }
}
