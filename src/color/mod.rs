mod generator;
mod gradient;
mod palette;
mod utils;

use smart_leds::RGB8;
use smart_leds::hsv::Hsv as HSV;

pub use generator::{
    COLOR_SELECTION_COUNT, COLOR_SELECTIONS, ColorGenerator, ColorSelection, ColorSource,
    HarmonicRule, HueReference, Luminance,
};
pub use gradient::{fill_gradient_rgb, fill_rainbow};
pub(crate) use gradient::rainbow_color;
pub use palette::{
    FAIRY_LIGHT_PALETTE, HOLLY_PALETTE, Palette16, PaletteBlend, RETRO_C9_PALETTE,
    SNOW_PALETTE, color_from_palette,
};
pub use utils::{blend_colors, color_distance, hsv2rgb, rgb_from_u32, rgb2hsv, scale_video};

pub type Rgb = RGB8;
pub type Hsv = HSV;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
