//! 8-bit fixed-point helpers
//!
//! Ports of the `FastLED` `lib8tion` primitives the effects are built on.
//! All inputs and outputs are fractions where 0-255 means 0.0-1.0.

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Scale an 8-bit value, never dimming a lit value down to zero
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8_video(value: u8, scale: u8) -> u8 {
    let scaled = ((value as u16 * scale as u16) >> 8) as u8;
    if value != 0 && scale != 0 {
        scaled + 1
    } else {
        scaled
    }
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

/// Ease in out cubic: `3x^2 - 2x^3`
#[allow(clippy::cast_possible_truncation)]
pub const fn ease8_in_out_cubic(i: u8) -> u8 {
    let ii = scale8(i, i);
    let iii = scale8(ii, i);
    let r1 = 3 * ii as u16 - 2 * iii as u16;
    if r1 & 0x100 != 0 { 255 } else { r1 as u8 }
}

const SIN8_SEGMENTS: [u8; 8] = [0, 49, 49, 41, 90, 27, 117, 10];

/// Fast 8-bit sine approximation
///
/// Maps the 0-255 angle onto 0-255 output, `sin8(0) == 128`,
/// `sin8(64) == 255`, `sin8(192) == 1`.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub const fn sin8(theta: u8) -> u8 {
    let mut offset = theta;
    if theta & 0x40 != 0 {
        offset = 255 - offset;
    }
    offset &= 0x3F;

    let mut sec_offset = offset & 0x0F;
    if theta & 0x40 != 0 {
        sec_offset += 1;
    }

    let section = (offset >> 4) as usize * 2;
    let b = SIN8_SEGMENTS[section];
    let m16 = SIN8_SEGMENTS[section + 1];

    let mx = ((m16 as u16 * sec_offset as u16) >> 4) as u8;
    let mut y = mx.wrapping_add(b) as i8;
    if theta & 0x80 != 0 {
        y = y.wrapping_neg();
    }
    (y as u8).wrapping_add(128)
}
