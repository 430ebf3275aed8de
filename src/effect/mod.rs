//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait.

mod cycling;
mod gradient;
mod rainbow;
mod running_light;
mod static_color;
mod twinkle_fox;
mod two_color;

pub use cycling::{CYCLED_EFFECT_COUNT, CyclingEffect, MAX_EFFECT_TIME};
pub use gradient::{GradientEffect, GradientOrientation};
pub use rainbow::{RainbowEffect, RainbowOrientation};
pub use running_light::{LIGHT_COUNT, RunningLightEffect};
pub use static_color::{OffEffect, SolidEffect};
pub use twinkle_fox::TwinkleFoxEffect;
pub use two_color::{FADE_TIME, SWAP_TIME, TwoColorChangeEffect};

use crate::color::{ColorGenerator, Rgb};

const EFFECT_NAME_OFF: &str = "off";
const EFFECT_NAME_SOLID: &str = "solid";
const EFFECT_NAME_TWO_COLOR_CHANGE: &str = "twoColorChange";
const EFFECT_NAME_GRADIENT_HORIZONTAL: &str = "gradientHorizontal";
const EFFECT_NAME_GRADIENT_VERTICAL: &str = "gradientVertical";
const EFFECT_NAME_RAINBOW_HORIZONTAL: &str = "rainbowHorizontal";
const EFFECT_NAME_RAINBOW_VERTICAL: &str = "rainbowVertical";
const EFFECT_NAME_RUNNING_LIGHT: &str = "runningLight";
const EFFECT_NAME_TWINKLE_FOX: &str = "twinkleFox";
const EFFECT_NAME_CYCLING: &str = "cycling";

const EFFECT_ID_OFF: u8 = 0;
const EFFECT_ID_SOLID: u8 = 1;
const EFFECT_ID_TWO_COLOR_CHANGE: u8 = 2;
const EFFECT_ID_GRADIENT_HORIZONTAL: u8 = 3;
const EFFECT_ID_GRADIENT_VERTICAL: u8 = 4;
const EFFECT_ID_RAINBOW_HORIZONTAL: u8 = 5;
const EFFECT_ID_RAINBOW_VERTICAL: u8 = 6;
const EFFECT_ID_RUNNING_LIGHT: u8 = 7;
const EFFECT_ID_TWINKLE_FOX: u8 = 8;
const EFFECT_ID_CYCLING: u8 = 9;

/// Number of registered effects
pub const EFFECT_COUNT: usize = 10;

/// Effects with their own slot (everything except the cycling meta-effect)
const SLOT_COUNT: usize = EFFECT_COUNT - 1;

/// What the controller may do after a rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectControl {
    /// The color can change after this frame
    pub allow_auto_color_change: bool,
    /// Fade over from the frame of the previous effect
    pub fade_over: bool,
}

impl Default for EffectControl {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectControl {
    pub const fn new() -> Self {
        Self {
            allow_auto_color_change: false,
            fade_over: true,
        }
    }

    #[must_use]
    pub const fn with_auto_color_change(mut self) -> Self {
        self.allow_auto_color_change = true;
        self
    }

    #[must_use]
    pub const fn without_fade(mut self) -> Self {
        self.fade_over = false;
        self
    }
}

/// Capabilities an effect gets while rendering
///
/// Effects read the working colors through it and may ask for a color
/// update (applied immediately) or an effect time reset (applied by the
/// controller once the frame is rendered).
pub struct EffectContext<'a> {
    colors: &'a mut ColorGenerator,
    reset_request: Option<bool>,
}

impl<'a> EffectContext<'a> {
    pub fn new(colors: &'a mut ColorGenerator) -> Self {
        Self {
            colors,
            reset_request: None,
        }
    }

    pub fn current(&self) -> Rgb {
        self.colors.current()
    }

    pub fn next(&self) -> Rgb {
        self.colors.next()
    }

    pub fn is_color_palette(&self) -> bool {
        self.colors.is_color_palette()
    }

    /// See [`ColorGenerator::palette_color`]
    pub fn palette_color(&self, mix: u8, blend: bool) -> Rgb {
        self.colors.palette_color(mix, blend)
    }

    /// Move on to the next color right away
    pub fn update_color(&mut self) {
        self.colors.update_color();
    }

    /// Ask the controller to reset the effect time after this frame
    ///
    /// A full reset wins over a timer-only one requested in the same frame.
    pub fn request_reset(&mut self, timer_only: bool) {
        self.reset_request = Some(match self.reset_request {
            Some(pending) => pending && timer_only,
            None => timer_only,
        });
    }

    /// Pending reset, `Some(timer_only)` if one was requested
    pub fn reset_request(&self) -> Option<bool> {
        self.reset_request
    }
}

pub trait Effect {
    /// Render a single frame
    ///
    /// `time` is the scaled effect time in milliseconds since the last
    /// reset.
    fn render(
        &mut self,
        ctx: &mut EffectContext<'_>,
        leds: &mut [Rgb],
        time: u32,
    ) -> EffectControl;

    /// Reset effect state
    ///
    /// `timer_only` is set when only the effect time was reset after an
    /// automatic color change, and cleared on a full effect switch.
    fn reset(&mut self, _timer_only: bool) {}
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    Off = EFFECT_ID_OFF,
    Solid = EFFECT_ID_SOLID,
    TwoColorChange = EFFECT_ID_TWO_COLOR_CHANGE,
    GradientHorizontal = EFFECT_ID_GRADIENT_HORIZONTAL,
    GradientVertical = EFFECT_ID_GRADIENT_VERTICAL,
    RainbowHorizontal = EFFECT_ID_RAINBOW_HORIZONTAL,
    RainbowVertical = EFFECT_ID_RAINBOW_VERTICAL,
    RunningLight = EFFECT_ID_RUNNING_LIGHT,
    TwinkleFox = EFFECT_ID_TWINKLE_FOX,
    Cycling = EFFECT_ID_CYCLING,
}

impl EffectId {
    /// All effects in registry order
    pub const ALL: [Self; EFFECT_COUNT] = [
        Self::Off,
        Self::Solid,
        Self::TwoColorChange,
        Self::GradientHorizontal,
        Self::GradientVertical,
        Self::RainbowHorizontal,
        Self::RainbowVertical,
        Self::RunningLight,
        Self::TwinkleFox,
        Self::Cycling,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_OFF => Self::Off,
            EFFECT_ID_SOLID => Self::Solid,
            EFFECT_ID_TWO_COLOR_CHANGE => Self::TwoColorChange,
            EFFECT_ID_GRADIENT_HORIZONTAL => Self::GradientHorizontal,
            EFFECT_ID_GRADIENT_VERTICAL => Self::GradientVertical,
            EFFECT_ID_RAINBOW_HORIZONTAL => Self::RainbowHorizontal,
            EFFECT_ID_RAINBOW_VERTICAL => Self::RainbowVertical,
            EFFECT_ID_RUNNING_LIGHT => Self::RunningLight,
            EFFECT_ID_TWINKLE_FOX => Self::TwinkleFox,
            EFFECT_ID_CYCLING => Self::Cycling,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => EFFECT_NAME_OFF,
            Self::Solid => EFFECT_NAME_SOLID,
            Self::TwoColorChange => EFFECT_NAME_TWO_COLOR_CHANGE,
            Self::GradientHorizontal => EFFECT_NAME_GRADIENT_HORIZONTAL,
            Self::GradientVertical => EFFECT_NAME_GRADIENT_VERTICAL,
            Self::RainbowHorizontal => EFFECT_NAME_RAINBOW_HORIZONTAL,
            Self::RainbowVertical => EFFECT_NAME_RAINBOW_VERTICAL,
            Self::RunningLight => EFFECT_NAME_RUNNING_LIGHT,
            Self::TwinkleFox => EFFECT_NAME_TWINKLE_FOX,
            Self::Cycling => EFFECT_NAME_CYCLING,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }

    /// Following effect in registry order, wrapping to the first one
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(usize::from(self.as_raw()) + 1) % EFFECT_COUNT]
    }

    /// Names of all effects, in registry order
    pub fn names() -> [&'static str; EFFECT_COUNT] {
        Self::ALL.map(Self::as_str)
    }

    /// Create a fresh effect instance
    ///
    /// Returns `None` for the cycling meta-effect, which owns its own
    /// instances of the other effects.
    pub fn to_slot(self) -> Option<EffectSlot> {
        Some(match self {
            Self::Off => EffectSlot::Off(OffEffect),
            Self::Solid => EffectSlot::Solid(SolidEffect),
            Self::TwoColorChange => EffectSlot::TwoColorChange(TwoColorChangeEffect::new()),
            Self::GradientHorizontal => {
                EffectSlot::GradientHorizontal(GradientEffect::horizontal())
            }
            Self::GradientVertical => EffectSlot::GradientVertical(GradientEffect::vertical()),
            Self::RainbowHorizontal => {
                EffectSlot::RainbowHorizontal(RainbowEffect::horizontal())
            }
            Self::RainbowVertical => EffectSlot::RainbowVertical(RainbowEffect::vertical()),
            Self::RunningLight => EffectSlot::RunningLight(RunningLightEffect::new()),
            Self::TwinkleFox => EffectSlot::TwinkleFox(TwinkleFoxEffect::new()),
            Self::Cycling => return None,
        })
    }
}

/// Effect slot - enum containing all basic effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    Off(OffEffect),
    Solid(SolidEffect),
    TwoColorChange(TwoColorChangeEffect),
    GradientHorizontal(GradientEffect),
    GradientVertical(GradientEffect),
    RainbowHorizontal(RainbowEffect),
    RainbowVertical(RainbowEffect),
    RunningLight(RunningLightEffect),
    TwinkleFox(TwinkleFoxEffect),
}

impl EffectSlot {
    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::Off(_) => EffectId::Off,
            Self::Solid(_) => EffectId::Solid,
            Self::TwoColorChange(_) => EffectId::TwoColorChange,
            Self::GradientHorizontal(_) => EffectId::GradientHorizontal,
            Self::GradientVertical(_) => EffectId::GradientVertical,
            Self::RainbowHorizontal(_) => EffectId::RainbowHorizontal,
            Self::RainbowVertical(_) => EffectId::RainbowVertical,
            Self::RunningLight(_) => EffectId::RunningLight,
            Self::TwinkleFox(_) => EffectId::TwinkleFox,
        }
    }
}

impl Effect for EffectSlot {
    fn render(
        &mut self,
        ctx: &mut EffectContext<'_>,
        leds: &mut [Rgb],
        time: u32,
    ) -> EffectControl {
        match self {
            Self::Off(effect) => effect.render(ctx, leds, time),
            Self::Solid(effect) => effect.render(ctx, leds, time),
            Self::TwoColorChange(effect) => effect.render(ctx, leds, time),
            Self::GradientHorizontal(effect) => effect.render(ctx, leds, time),
            Self::GradientVertical(effect) => effect.render(ctx, leds, time),
            Self::RainbowHorizontal(effect) => effect.render(ctx, leds, time),
            Self::RainbowVertical(effect) => effect.render(ctx, leds, time),
            Self::RunningLight(effect) => effect.render(ctx, leds, time),
            Self::TwinkleFox(effect) => effect.render(ctx, leds, time),
        }
    }

    fn reset(&mut self, timer_only: bool) {
        match self {
            Self::Off(effect) => effect.reset(timer_only),
            Self::Solid(effect) => effect.reset(timer_only),
            Self::TwoColorChange(effect) => effect.reset(timer_only),
            Self::GradientHorizontal(effect) => effect.reset(timer_only),
            Self::GradientVertical(effect) => effect.reset(timer_only),
            Self::RainbowHorizontal(effect) => effect.reset(timer_only),
            Self::RainbowVertical(effect) => effect.reset(timer_only),
            Self::RunningLight(effect) => effect.reset(timer_only),
            Self::TwinkleFox(effect) => effect.reset(timer_only),
        }
    }
}

/// All effect instances, indexed by [`EffectId`]
///
/// Built once at startup, the set of effects never changes afterwards.
#[derive(Debug, Clone)]
pub struct EffectRegistry {
    slots: [EffectSlot; SLOT_COUNT],
    cycling: CyclingEffect,
}

impl Default for EffectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectRegistry {
    pub fn new() -> Self {
        Self {
            slots: [
                EffectSlot::Off(OffEffect),
                EffectSlot::Solid(SolidEffect),
                EffectSlot::TwoColorChange(TwoColorChangeEffect::new()),
                EffectSlot::GradientHorizontal(GradientEffect::horizontal()),
                EffectSlot::GradientVertical(GradientEffect::vertical()),
                EffectSlot::RainbowHorizontal(RainbowEffect::horizontal()),
                EffectSlot::RainbowVertical(RainbowEffect::vertical()),
                EffectSlot::RunningLight(RunningLightEffect::new()),
                EffectSlot::TwinkleFox(TwinkleFoxEffect::new()),
            ],
            cycling: CyclingEffect::new(),
        }
    }

    /// Get the effect registered under `id`
    pub fn effect_mut(&mut self, id: EffectId) -> &mut dyn Effect {
        match id {
            EffectId::Cycling => &mut self.cycling,
            id => &mut self.slots[usize::from(id.as_raw())],
        }
    }

    pub fn cycling(&self) -> &CyclingEffect {
        &self.cycling
    }
}
