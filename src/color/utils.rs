pub use smart_leds::hsv::hsv2rgb;

use crate::{
    color::{Hsv, Rgb},
    math8::{blend8, scale8_video},
};

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Dim a color without letting lit channels drop to zero
#[inline]
pub fn scale_video(color: Rgb, scale: u8) -> Rgb {
    Rgb {
        r: scale8_video(color.r, scale),
        g: scale8_video(color.g, scale),
        b: scale8_video(color.b, scale),
    }
}

/// Mean absolute channel difference between two colors (0-255)
///
/// Symmetric in `a` and `b`. A one-directional saturating difference would
/// rate a darker candidate as identical to the current color.
#[allow(clippy::cast_possible_truncation)]
pub fn color_distance(a: Rgb, b: Rgb) -> u8 {
    let sum = u16::from(a.r.abs_diff(b.r))
        + u16::from(a.g.abs_diff(b.g))
        + u16::from(a.b.abs_diff(b.b));
    (sum / 3) as u8
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Convert RGB to HSV (all channels are 0-255).
///
/// Hue is represented on a 0-255 circle, matching `smart_leds::hsv::Hsv`.
#[allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn rgb2hsv(rgb: Rgb) -> Hsv {
    let r = rgb.r;
    let g = rgb.g;
    let b = rgb.b;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let val = max;
    let sat = if max == 0 {
        0
    } else {
        ((u16::from(delta) * 255) / u16::from(max)) as u8
    };

    // 0, 85 and 171 are the red, green and blue sector starts
    let sector = |start: i16, a: u8, b: u8| -> u8 {
        let h = start + (43i16 * (i16::from(a) - i16::from(b))) / i16::from(delta);
        h.rem_euclid(256) as u8
    };
    let hue = if delta == 0 {
        0
    } else if max == r {
        sector(0, g, b)
    } else if max == g {
        sector(85, b, r)
    } else {
        sector(171, r, g)
    };

    Hsv { hue, sat, val }
}
