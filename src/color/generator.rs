//! Color generator
//!
//! Holds the two working colors every effect draws from and produces the
//! following color on demand, either by sampling the selected palette or by
//! a harmonic hue rule.

use rand::{Rng, SeedableRng, rngs::SmallRng};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{
    BLACK, FAIRY_LIGHT_PALETTE, HOLLY_PALETTE, Hsv, Palette16, PaletteBlend, RETRO_C9_PALETTE,
    Rgb, SNOW_PALETTE, blend_colors, color_distance, color_from_palette, hsv2rgb, rgb2hsv,
};

/// Number of color selections
pub const COLOR_SELECTION_COUNT: usize = 8;

/// Attempts to find a color that differs visibly from the current one
const MAX_COLOR_ATTEMPTS: u8 = 4;

/// Minimum mean channel difference for a new color to count as visible
const MIN_COLOR_DISTANCE: u8 = 8;

const HUE_RED: u8 = 0;
const HUE_GREEN: u8 = 85;

const BLACK_PALETTE: Palette16 = [BLACK; 16];

/// Hue the harmonic offset is applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HueReference {
    /// Hue of the previously generated color
    Previous,
    /// Fixed hue
    Fixed(u8),
}

/// Luminance of a generated color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Luminance {
    Fixed(u8),
    /// Uniformly random in `min..max`
    Random { min: u8, max: u8 },
}

/// Harmonic color rule
///
/// A random angle is drawn from the sum of the three ranges. Angles within
/// `range0` stay next to the reference hue, angles within `range1` are moved
/// by `offset1`, the rest by `offset2`.
///
/// - Analogous: `range1` and `range2` are zero.
/// - Complementary: `range2` is zero and `offset1` is half the circle.
/// - Split complementary: offsets around half the circle, ranges smaller
///   than the offset difference.
/// - Triad: offsets at one and two thirds of the circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarmonicRule {
    pub reference: HueReference,
    pub offset1: u8,
    pub offset2: u8,
    pub range0: u8,
    pub range1: u8,
    pub range2: u8,
    pub saturation: u8,
    pub luminance: Luminance,
}

impl HarmonicRule {
    /// Generate a color related to `base`
    #[allow(clippy::cast_possible_truncation)]
    pub fn generate<R: Rng>(&self, base: Rgb, rng: &mut R) -> Rgb {
        let reference = match self.reference {
            HueReference::Previous => rgb2hsv(base).hue,
            HueReference::Fixed(hue) => hue,
        };
        let val = match self.luminance {
            Luminance::Fixed(val) => val,
            Luminance::Random { min, max } => rng.gen_range(min..max),
        };

        let range0 = u16::from(self.range0);
        let range1 = u16::from(self.range1);
        let total = range0 + range1 + u16::from(self.range2);
        let mut angle = u16::from(rng.gen_range(1..255u8)) * total / 256;
        if angle > range0 {
            if angle < range0 + range1 {
                angle += u16::from(self.offset1);
            } else {
                angle += u16::from(self.offset2);
            }
        }

        hsv2rgb(Hsv {
            hue: reference.wrapping_add(angle as u8),
            sat: self.saturation,
            val,
        })
    }
}

/// Where a selection takes its colors from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSource {
    Palette(&'static Palette16),
    Harmonic(HarmonicRule),
    /// Unknown selections render black
    Black,
}

/// Named color selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSelection {
    pub name: &'static str,
    pub source: ColorSource,
}

const RAINBOW_RULE: HarmonicRule = HarmonicRule {
    reference: HueReference::Previous,
    offset1: 16,
    offset2: 32,
    range0: 8,
    range1: 16,
    range2: 32,
    saturation: 255,
    luminance: Luminance::Fixed(255),
};

const fn single_hue_rule(hue: u8) -> HarmonicRule {
    // The range only extends towards higher hues, so start below the target
    HarmonicRule {
        reference: HueReference::Fixed(hue.wrapping_sub(16)),
        offset1: 0,
        offset2: 0,
        range0: 32,
        range1: 0,
        range2: 0,
        saturation: 255,
        luminance: Luminance::Random { min: 200, max: 255 },
    }
}

pub const COLOR_SELECTIONS: [ColorSelection; COLOR_SELECTION_COUNT] = [
    ColorSelection {
        name: "Random Rainbow",
        source: ColorSource::Harmonic(RAINBOW_RULE),
    },
    ColorSelection {
        name: "Random Pastel",
        source: ColorSource::Harmonic(HarmonicRule {
            saturation: 128,
            ..RAINBOW_RULE
        }),
    },
    ColorSelection {
        name: "Holly",
        source: ColorSource::Palette(&HOLLY_PALETTE),
    },
    ColorSelection {
        name: "RetroC9",
        source: ColorSource::Palette(&RETRO_C9_PALETTE),
    },
    ColorSelection {
        name: "FairyLight",
        source: ColorSource::Palette(&FAIRY_LIGHT_PALETTE),
    },
    ColorSelection {
        name: "Snow",
        source: ColorSource::Palette(&SNOW_PALETTE),
    },
    ColorSelection {
        name: "Reds",
        source: ColorSource::Harmonic(single_hue_rule(HUE_RED)),
    },
    ColorSelection {
        name: "Greens",
        source: ColorSource::Harmonic(single_hue_rule(HUE_GREEN)),
    },
];

impl ColorSelection {
    pub fn from_index(index: u8) -> Option<&'static Self> {
        COLOR_SELECTIONS.get(usize::from(index))
    }

    /// Color source of a selection index, black for unknown indices
    pub fn source_of(index: u8) -> ColorSource {
        Self::from_index(index)
            .map(|selection| selection.source)
            .unwrap_or(ColorSource::Black)
    }

    /// Names of all selections, in index order
    pub fn names() -> [&'static str; COLOR_SELECTION_COUNT] {
        COLOR_SELECTIONS.map(|selection| selection.name)
    }
}

/// Color generator state
#[derive(Debug, Clone)]
pub struct ColorGenerator {
    current: Rgb,
    next: Rgb,
    palette: &'static Palette16,
    selection: u8,
    rng: SmallRng,
    /// Number of `update_color` calls so far
    generation: u32,
}

impl ColorGenerator {
    /// Create a generator with two random colors and the first selection
    pub fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut random_color = || Rgb {
            r: rng.gen_range(0..255),
            g: rng.gen_range(0..255),
            b: rng.gen_range(0..255),
        };
        let current = random_color();
        let next = random_color();
        Self::with_rng(rng, current, next)
    }

    /// Create a generator with known starting colors
    pub fn with_colors(seed: u64, current: Rgb, next: Rgb) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed), current, next)
    }

    fn with_rng(rng: SmallRng, current: Rgb, next: Rgb) -> Self {
        Self {
            current,
            next,
            palette: palette_of(0),
            selection: 0,
            rng,
            generation: 0,
        }
    }

    /// Color currently shown
    pub const fn current(&self) -> Rgb {
        self.current
    }

    /// Color shown after the next update
    pub const fn next(&self) -> Rgb {
        self.next
    }

    pub const fn selection(&self) -> u8 {
        self.selection
    }

    pub const fn generation(&self) -> u32 {
        self.generation
    }

    /// Switch to another color selection
    ///
    /// Generates two fresh colors so no color of the previous selection
    /// stays visible.
    pub fn set_selection(&mut self, index: u8) {
        if index == self.selection {
            return;
        }
        #[cfg(feature = "esp32-log")]
        println!("[ColorGenerator.set_selection] selection {} -> {}", self.selection, index);

        self.palette = palette_of(index);
        self.selection = index;
        self.update_color();
        self.update_color();
    }

    /// Advance to the next color and generate a new one
    ///
    /// Returns `false` if every attempt produced a color too close to the
    /// current one and the last candidate was kept anyway.
    pub fn update_color(&mut self) -> bool {
        self.generation = self.generation.wrapping_add(1);
        self.current = self.next;

        for _ in 0..MAX_COLOR_ATTEMPTS {
            self.next = match ColorSelection::source_of(self.selection) {
                ColorSource::Palette(palette) => {
                    let index = self.rng.gen_range(0..255);
                    color_from_palette(palette, index, PaletteBlend::Linear)
                }
                ColorSource::Harmonic(rule) => rule.generate(self.next, &mut self.rng),
                ColorSource::Black => BLACK,
            };
            if color_distance(self.current, self.next) > MIN_COLOR_DISTANCE {
                return true;
            }
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "[ColorGenerator.update_color] no distinct color for selection {}",
            self.selection
        );
        false
    }

    /// Check if the selection samples a palette
    pub fn is_color_palette(&self) -> bool {
        matches!(ColorSelection::source_of(self.selection), ColorSource::Palette(_))
    }

    /// Sample the active colors at `mix`
    ///
    /// Palette selections sample the palette, everything else mixes the
    /// current and the next color.
    pub fn palette_color(&self, mix: u8, blend: bool) -> Rgb {
        if self.is_color_palette() {
            color_from_palette(self.palette, mix, PaletteBlend::from_flag(blend))
        } else if blend {
            blend_colors(self.current, self.next, mix)
        } else if mix < 128 {
            self.current
        } else {
            self.next
        }
    }
}

fn palette_of(index: u8) -> &'static Palette16 {
    match ColorSelection::source_of(index) {
        ColorSource::Palette(palette) => palette,
        ColorSource::Harmonic(_) | ColorSource::Black => &BLACK_PALETTE,
    }
}
