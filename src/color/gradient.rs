use crate::color::{Hsv, Rgb, hsv2rgb};

/// Saturation used for rainbow fills
const RAINBOW_SATURATION: u8 = 240;

/// Fill a linear RGB gradient from the first to the last pixel
///
/// Uses 8.8 fixed-point accumulators (ported from `FastLED`), so the last
/// pixel may land one step short of `end`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
pub fn fill_gradient_rgb(leds: &mut [Rgb], start: Rgb, end: Rgb) {
    if leds.is_empty() {
        return;
    }

    let distance87 = |from: u8, to: u8| (i16::from(to) - i16::from(from)) << 7;
    let divisor = match leds.len() - 1 {
        0 => 1,
        distance => distance as i16,
    };

    // 8.8 deltas from 8.7 distances
    let r_delta = (distance87(start.r, end.r) / divisor).wrapping_mul(2);
    let g_delta = (distance87(start.g, end.g) / divisor).wrapping_mul(2);
    let b_delta = (distance87(start.b, end.b) / divisor).wrapping_mul(2);

    let mut r88 = u16::from(start.r) << 8;
    let mut g88 = u16::from(start.g) << 8;
    let mut b88 = u16::from(start.b) << 8;

    for led in leds.iter_mut() {
        *led = Rgb {
            r: (r88 >> 8) as u8,
            g: (g88 >> 8) as u8,
            b: (b88 >> 8) as u8,
        };
        r88 = r88.wrapping_add(r_delta as u16);
        g88 = g88.wrapping_add(g_delta as u16);
        b88 = b88.wrapping_add(b_delta as u16);
    }
}

/// Fill a hue ramp starting at `initial_hue`, advancing `delta_hue` per pixel
pub fn fill_rainbow(leds: &mut [Rgb], initial_hue: u8, delta_hue: u8) {
    let mut hue = initial_hue;
    for led in leds.iter_mut() {
        *led = hsv2rgb(Hsv {
            hue,
            sat: RAINBOW_SATURATION,
            val: 255,
        });
        hue = hue.wrapping_add(delta_hue);
    }
}

/// Single rainbow color with the fill saturation
pub(crate) fn rainbow_color(hue: u8) -> Rgb {
    hsv2rgb(Hsv {
        hue,
        sat: RAINBOW_SATURATION,
        val: 255,
    })
}
