//! Twinkle effect (`FastLED` `TwinkleFox` by Mark Kriegsman)
//!
//! Each pixel gets its own clock offset and speed from a small LCG that is
//! reseeded with the same value every frame, so pixel phases stay stable
//! without keeping per-pixel state.

use super::{Effect, EffectContext, EffectControl};
use crate::{
    color::{BLACK, Rgb, scale_video},
    math8::sin8,
};

const PRNG_SEED: u16 = 11337;

/// Twinkle speed, 0-8
const DEFAULT_SPEED: u8 = 4;
/// Twinkle density, 0-8
const DEFAULT_DENSITY: u8 = 5;

const COOL_LIKE_INCANDESCENT: bool = true;

#[inline]
const fn next_random(prng: u16) -> u16 {
    prng.wrapping_mul(2053).wrapping_add(1384)
}

/// Fast linear attack followed by a slower decay
#[allow(clippy::cast_possible_truncation)]
const fn attack_decay_wave8(i: u8) -> u8 {
    if i < 86 {
        i * 3
    } else {
        let i = i - 86;
        255 - (i + i / 2)
    }
}

/// Let fading pixels turn red like cooling filaments
const fn cool_like_incandescent(color: Rgb, phase: u8) -> Rgb {
    if phase < 128 {
        return color;
    }
    let cooling = (phase - 128) >> 4;
    Rgb {
        r: color.r,
        g: color.g.saturating_sub(cooling),
        b: color.b.saturating_sub(cooling * 2),
    }
}

/// Twinkles over a dark background, fading pixels cool down like
/// incandescent bulbs
#[derive(Debug, Clone)]
pub struct TwinkleFoxEffect {
    speed: u8,
    density: u8,
}

impl Default for TwinkleFoxEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl TwinkleFoxEffect {
    pub const fn new() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            density: DEFAULT_DENSITY,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn compute_twinkle(&self, ctx: &EffectContext<'_>, clock: u32, salt: u8) -> Rgb {
        let ticks = (clock >> (8 - self.speed)) as u16;
        let fast_cycle = ticks as u8;
        let mut slow_cycle = (ticks >> 8).wrapping_add(u16::from(salt));
        slow_cycle = slow_cycle.wrapping_add(u16::from(sin8(slow_cycle as u8)));
        slow_cycle = next_random(slow_cycle);
        let slow_cycle8 = (slow_cycle as u8).wrapping_add((slow_cycle >> 8) as u8);

        let bright = if (slow_cycle8 & 0x0E) / 2 < self.density {
            attack_decay_wave8(fast_cycle)
        } else {
            0
        };
        if bright == 0 {
            return BLACK;
        }

        let hue = slow_cycle8.wrapping_sub(salt);
        let color = scale_video(ctx.palette_color(hue, false), bright);
        if COOL_LIKE_INCANDESCENT {
            cool_like_incandescent(color, fast_cycle)
        } else {
            color
        }
    }
}

impl Effect for TwinkleFoxEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render(
        &mut self,
        ctx: &mut EffectContext<'_>,
        leds: &mut [Rgb],
        time: u32,
    ) -> EffectControl {
        let mut prng = PRNG_SEED;

        for led in leds.iter_mut() {
            prng = next_random(prng);
            let clock_offset = u32::from(prng);
            prng = next_random(prng);
            let speed_multiplier = u32::from((((prng & 0xFF) >> 4) + (prng & 0x0F)) & 0x0F) + 8;
            let clock = (time.wrapping_mul(speed_multiplier) >> 3).wrapping_add(clock_offset);
            let salt = (prng >> 8) as u8;

            *led = self.compute_twinkle(ctx, clock, salt);
        }

        EffectControl::new().with_auto_color_change()
    }
}
