//! Fixed 16-stop color palettes
//!
//! Palettes are sampled with a 0-255 index: the high nibble picks the stop,
//! the low nibble blends towards the following stop (wrapping from the last
//! stop back to the first).

use crate::{
    color::{Rgb, rgb_from_u32},
    math8::scale8,
};

/// Sixteen color stops
pub type Palette16 = [Rgb; 16];

/// Palette sampling mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteBlend {
    /// Interpolate between neighbouring stops
    Linear,
    /// Use the nearest lower stop
    Nearest,
}

impl PaletteBlend {
    pub const fn from_flag(blend: bool) -> Self {
        if blend { Self::Linear } else { Self::Nearest }
    }
}

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),* $(,)?) => {
        [
            $(rgb_from_u32($color)),*
        ]
    };
}

const HOLLY_GREEN: u32 = 0x00_580C;
const HOLLY_RED: u32 = 0xB0_0402;

/// Mostly dark green with red berries
#[rustfmt::skip]
pub const HOLLY_PALETTE: Palette16 = hex_palette![
    HOLLY_GREEN, HOLLY_GREEN, HOLLY_GREEN, HOLLY_GREEN,
    HOLLY_GREEN, HOLLY_GREEN, HOLLY_GREEN, HOLLY_GREEN,
    HOLLY_GREEN, HOLLY_GREEN, HOLLY_GREEN, HOLLY_GREEN,
    HOLLY_RED, HOLLY_RED, HOLLY_RED, HOLLY_RED,
];

const C9_RED: u32 = 0xB8_0400;
const C9_ORANGE: u32 = 0x90_2C02;
const C9_GREEN: u32 = 0x04_6002;
const C9_BLUE: u32 = 0x07_0758;
const C9_WHITE: u32 = 0x60_6820;

/// Old-school C9 bulbs: red, orange, green, blue and white
#[rustfmt::skip]
pub const RETRO_C9_PALETTE: Palette16 = hex_palette![
    C9_RED, C9_ORANGE, C9_RED, C9_ORANGE,
    C9_ORANGE, C9_RED, C9_ORANGE, C9_RED,
    C9_GREEN, C9_GREEN, C9_GREEN, C9_GREEN,
    C9_BLUE, C9_BLUE, C9_BLUE, C9_WHITE,
];

const FAIRY: u32 = 0xFF_E42D;
const HALF_FAIRY: u32 = (FAIRY & 0xFE_FEFE) / 2;
const QUARTER_FAIRY: u32 = (FAIRY & 0xFC_FCFC) / 4;

/// Warm fairy lights with a few dimmer bulbs
#[rustfmt::skip]
pub const FAIRY_LIGHT_PALETTE: Palette16 = hex_palette![
    FAIRY, FAIRY, FAIRY, FAIRY,
    HALF_FAIRY, HALF_FAIRY, FAIRY, FAIRY,
    QUARTER_FAIRY, QUARTER_FAIRY, FAIRY, FAIRY,
    FAIRY, FAIRY, FAIRY, FAIRY,
];

const SNOW_DIM: u32 = 0x30_4048;
const SNOW_BRIGHT: u32 = 0xE0_F0FF;

/// Soft snowflakes with the occasional bright one
#[rustfmt::skip]
pub const SNOW_PALETTE: Palette16 = hex_palette![
    SNOW_DIM, SNOW_DIM, SNOW_DIM, SNOW_DIM,
    SNOW_DIM, SNOW_DIM, SNOW_DIM, SNOW_DIM,
    SNOW_DIM, SNOW_DIM, SNOW_DIM, SNOW_DIM,
    SNOW_BRIGHT, SNOW_BRIGHT, SNOW_BRIGHT, SNOW_BRIGHT,
];

/// Sample a palette at `index`
pub fn color_from_palette(palette: &Palette16, index: u8, blend: PaletteBlend) -> Rgb {
    let hi4 = usize::from(index >> 4);
    let lo4 = index & 0x0F;
    let entry = palette[hi4];

    if lo4 == 0 || blend == PaletteBlend::Nearest {
        return entry;
    }

    let following = palette[(hi4 + 1) % palette.len()];
    let amount_of_following = lo4 << 4;
    let amount_of_entry = 255 - amount_of_following;

    let mix = |a: u8, b: u8| {
        scale8(a, amount_of_entry).saturating_add(scale8(b, amount_of_following))
    };
    Rgb {
        r: mix(entry.r, following.r),
        g: mix(entry.g, following.g),
        b: mix(entry.b, following.b),
    }
}
