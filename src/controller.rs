use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::bounds::{APEX, BOTTOM_RING, LED_COUNT, MIDDLE_RING};
use crate::color::{
    BLACK, BLUE, COLOR_SELECTION_COUNT, ColorGenerator, ColorSelection, Rgb, WHITE, blend_colors,
};
use crate::config::PersistedConfig;
use crate::effect::{EffectContext, EffectControl, EffectId, EffectRegistry};
use crate::filter::{BRIGHTNESS_LEVEL_COUNT, OutputFilter, OutputFilterConfig};
use crate::math8::ease8_in_out_cubic;
use crate::menu::{ButtonEvent, MAX_LONG_PRESS_LEVELS, Menu, MenuConfig, MenuMode, MenuResponse};
use crate::status::StatusSnapshot;

const SPEED_STOPPED: u8 = 0;
const SPEED_SLOW: u8 = 1;
const SPEED_MEDIUM: u8 = 2;
const SPEED_FAST: u8 = 4;

/// Brightness level used until one is configured
pub const DEFAULT_BRIGHTNESS_LEVEL: u8 = 4;

/// Animation speed, the value is the effect time multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Speed {
    Stopped = SPEED_STOPPED,
    Slow = SPEED_SLOW,
    Medium = SPEED_MEDIUM,
    Fast = SPEED_FAST,
}

impl Speed {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            SPEED_STOPPED => Self::Stopped,
            SPEED_SLOW => Self::Slow,
            SPEED_MEDIUM => Self::Medium,
            SPEED_FAST => Self::Fast,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Effect milliseconds per real millisecond
    pub const fn factor(self) -> u32 {
        self as u32
    }

    /// Following speed, fast wraps around to stopped
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Stopped => Self::Slow,
            Self::Slow => Self::Medium,
            Self::Medium => Self::Fast,
            Self::Fast => Self::Stopped,
        }
    }
}

/// Configuration for effect timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectTimings {
    /// Minimum real time between two rendered frames
    pub frame_interval: Duration,
    /// Effect time the previous frame is faded out over after a reset
    pub fade_in: Duration,
    /// Effect time after which the color changes automatically
    pub color_duration: Duration,
    /// Real time each color is previewed for in the color menu
    pub color_preview: Duration,
}

impl Default for EffectTimings {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(10),
            fade_in: Duration::from_millis(2000),
            color_duration: Duration::from_millis(60_000),
            color_preview: Duration::from_millis(1000),
        }
    }
}

/// Configuration for the animation controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightConfig {
    pub timings: EffectTimings,
    pub menu: MenuConfig,
    pub filter: OutputFilterConfig,
    pub effect: EffectId,
    pub speed: Speed,
    pub brightness_level: u8,
    pub color_selection: u8,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            timings: EffectTimings::default(),
            menu: MenuConfig::default(),
            filter: OutputFilterConfig::default(),
            effect: EffectId::Off,
            speed: Speed::Medium,
            brightness_level: DEFAULT_BRIGHTNESS_LEVEL,
            color_selection: 0,
        }
    }
}

/// Actions that can be bound to a long press level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Open the brightness menu
    SelectBrightness,
    /// Open the color selection menu
    SelectColor,
    /// Store the current configuration, handled by the caller
    SaveConfig,
    /// Switch the network on or off, handled by the caller
    ToggleWifi,
}

impl MenuAction {
    /// Bindings of long press levels 1 to 4
    pub const DEFAULT_BINDINGS: [Option<Self>; MAX_LONG_PRESS_LEVELS as usize] = [
        Some(Self::SelectBrightness),
        Some(Self::SelectColor),
        Some(Self::SaveConfig),
        Some(Self::ToggleWifi),
    ];

    /// Check if the caller has to run the action
    pub const fn is_external(self) -> bool {
        matches!(self, Self::SaveConfig | Self::ToggleWifi)
    }
}

/// Result of a button event passed to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonResponse {
    /// Not used by the menu, see
    /// [`AnimationController::apply_default_button_action`]
    Ignored,
    Consumed,
    /// A bound action the caller has to run
    Action(MenuAction),
}

/// Animation controller - renders effects and the menu into the frame
///
/// Call [`AnimationController::update`] from the main loop as often as
/// possible, frames are rate limited internally.
pub struct AnimationController<O: OutputDriver> {
    output: O,
    timings: EffectTimings,

    colors: ColorGenerator,
    effects: EffectRegistry,
    effect_id: EffectId,
    speed: Speed,
    /// Scaled effect time since the last reset
    effect_time: u32,
    last_update: Instant,
    last_control: EffectControl,

    menu: Menu,
    menu_actions: [Option<MenuAction>; MAX_LONG_PRESS_LEVELS as usize],
    /// Time the previewed menu color was last changed
    menu_time: Instant,

    filter: OutputFilter,
    frame: [Rgb; LED_COUNT],
    /// Last frame before the most recent reset, faded out after it
    backup: [Rgb; LED_COUNT],
    output_frame: [Rgb; LED_COUNT],
}

impl<O: OutputDriver> AnimationController<O> {
    /// Create a controller with random starting colors
    pub fn new(output: O, config: &LightConfig, seed: u64, now: Instant) -> Self {
        Self::with_generator(output, config, ColorGenerator::new(seed), now)
    }

    /// Create a controller around an existing color generator
    pub fn with_generator(
        output: O,
        config: &LightConfig,
        colors: ColorGenerator,
        now: Instant,
    ) -> Self {
        let mut controller = Self {
            output,
            timings: config.timings,
            colors,
            effects: EffectRegistry::new(),
            effect_id: config.effect,
            speed: config.speed,
            effect_time: 0,
            last_update: now,
            last_control: EffectControl::new(),
            menu: Menu::new(&config.menu),
            menu_actions: MenuAction::DEFAULT_BINDINGS,
            menu_time: now,
            filter: OutputFilter::new(&config.filter, DEFAULT_BRIGHTNESS_LEVEL),
            frame: [BLACK; LED_COUNT],
            backup: [BLACK; LED_COUNT],
            output_frame: [BLACK; LED_COUNT],
        };
        controller.set_brightness_level(config.brightness_level);
        controller.set_color_selection(config.color_selection);
        controller.reset_effect(false);
        controller
    }

    /// Render and flush one frame
    ///
    /// Frames closer than the configured frame interval are skipped, the
    /// last frame is still flushed so the driver keeps refreshing.
    #[allow(clippy::cast_possible_truncation)]
    pub fn update(&mut self, now: Instant) {
        let elapsed = now
            .checked_duration_since(self.last_update)
            .map_or(0, |elapsed| elapsed.as_millis());
        if elapsed < self.timings.frame_interval.as_millis() {
            self.flush();
            return;
        }

        if self.menu.is_active() {
            self.display_menu(now);
        } else {
            let scaled = elapsed.saturating_mul(u64::from(self.speed.factor()));
            let scaled = scaled.min(u64::from(u32::MAX)) as u32;
            self.effect_time = self.effect_time.saturating_add(scaled);
            self.run_effect();
        }

        self.last_update = now;
        self.flush();
    }

    /// Zero the effect time and keep the current frame for the fade
    ///
    /// `timer_only` is passed on to the effect, see
    /// [`Effect::reset`](crate::effect::Effect::reset).
    pub fn reset_effect(&mut self, timer_only: bool) {
        self.effect_time = 0;
        self.backup = self.frame;
        self.effects.effect_mut(self.effect_id).reset(timer_only);
    }

    /// Switch to another effect, does nothing if it is already active
    pub fn set_effect(&mut self, id: EffectId) {
        if id == self.effect_id {
            return;
        }
        #[cfg(feature = "esp32-log")]
        println!(
            "[AnimationController.set_effect] {} -> {}",
            self.effect_id.as_str(),
            id.as_str()
        );
        self.effect_id = id;
        self.reset_effect(false);
    }

    /// Switch to the effect with a raw index, unknown indices are ignored
    pub fn set_effect_index(&mut self, index: u8) {
        if let Some(id) = EffectId::from_raw(index) {
            self.set_effect(id);
        }
    }

    pub fn next_effect(&mut self) {
        self.effect_id = self.effect_id.next();
        #[cfg(feature = "esp32-log")]
        println!("[AnimationController.next_effect] {}", self.effect_id.as_str());
        self.reset_effect(false);
    }

    pub fn set_speed(&mut self, speed: Speed) {
        if speed == self.speed {
            return;
        }
        #[cfg(feature = "esp32-log")]
        println!(
            "[AnimationController.set_speed] {} -> {}",
            self.speed.as_raw(),
            speed.as_raw()
        );
        self.speed = speed;
    }

    pub fn next_speed(&mut self) {
        self.set_speed(self.speed.next());
    }

    /// Set the brightness level (1-8), other levels are ignored
    pub fn set_brightness_level(&mut self, level: u8) {
        self.filter.set_brightness_level(level);
    }

    /// Select a color preset, unknown indices are ignored
    pub fn set_color_selection(&mut self, index: u8) {
        if usize::from(index) < COLOR_SELECTION_COUNT {
            self.colors.set_selection(index);
        }
    }

    /// Bind an action to a long press level (1-4)
    ///
    /// Returns `false` if the level does not exist.
    pub fn bind_menu_action(&mut self, level: u8, action: Option<MenuAction>) -> bool {
        match level
            .checked_sub(1)
            .and_then(|index| self.menu_actions.get_mut(usize::from(index)))
        {
            Some(slot) => {
                *slot = action;
                true
            }
            None => false,
        }
    }

    /// Feed a button event through the menu
    ///
    /// Sub-menus are opened and their selections applied here. Events the
    /// menu does not use come back as [`ButtonResponse::Ignored`].
    pub fn handle_button_event(&mut self, event: ButtonEvent) -> ButtonResponse {
        let mode = self.menu.mode();
        match self.menu.handle(event) {
            MenuResponse::NotConsumed => ButtonResponse::Ignored,
            MenuResponse::Consumed => ButtonResponse::Consumed,
            MenuResponse::SelectionChanged(selection) => {
                match mode {
                    MenuMode::Brightness => self.set_brightness_level(selection + 1),
                    MenuMode::Color => {
                        self.set_color_selection(selection);
                        self.menu_time = self.last_update;
                    }
                    MenuMode::Main | MenuMode::Closing => {}
                }
                ButtonResponse::Consumed
            }
            MenuResponse::Invoke(level) => self.invoke_menu_action(level),
        }
    }

    /// Default handling of events the menu ignored
    pub fn apply_default_button_action(&mut self, event: ButtonEvent) {
        match event {
            ButtonEvent::Clicked | ButtonEvent::Released => self.next_effect(),
            ButtonEvent::DoubleClicked => self.next_speed(),
            ButtonEvent::RepeatPressed => {}
        }
    }

    /// Apply a stored configuration, invalid values are ignored
    pub fn apply_config(&mut self, config: &PersistedConfig) {
        self.set_brightness_level(config.brightness_level);
        self.set_color_selection(config.color_selection);
        if let Some(speed) = Speed::from_raw(config.speed) {
            self.set_speed(speed);
        }
        self.set_effect_index(config.effect_index);
    }

    /// Current configuration in its stored form
    pub fn persisted_config(&self) -> PersistedConfig {
        PersistedConfig {
            speed: self.speed.as_raw(),
            brightness_level: self.brightness_level(),
            effect_index: self.effect_id.as_raw(),
            color_selection: self.colors.selection(),
        }
    }

    pub fn status_snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            brightness_level: self.brightness_level(),
            speed: self.speed,
            effect: self.effect_id,
            effects: EffectId::names(),
            color_selection: self.colors.selection(),
            color_selections: ColorSelection::names(),
        }
    }

    pub const fn effect_id(&self) -> EffectId {
        self.effect_id
    }

    pub const fn speed(&self) -> Speed {
        self.speed
    }

    pub const fn brightness_level(&self) -> u8 {
        self.filter.brightness().level()
    }

    pub const fn effect_time(&self) -> u32 {
        self.effect_time
    }

    /// Control flags of the last rendered effect frame
    pub const fn last_effect_control(&self) -> EffectControl {
        self.last_control
    }

    pub const fn colors(&self) -> &ColorGenerator {
        &self.colors
    }

    pub const fn menu(&self) -> &Menu {
        &self.menu
    }

    pub const fn effects(&self) -> &EffectRegistry {
        &self.effects
    }

    /// Rendered frame, before brightness and gamma
    pub const fn frame(&self) -> &[Rgb; LED_COUNT] {
        &self.frame
    }

    /// Frame as last written to the driver
    pub const fn output_frame(&self) -> &[Rgb; LED_COUNT] {
        &self.output_frame
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    #[allow(clippy::cast_possible_truncation)]
    fn invoke_menu_action(&mut self, level: u8) -> ButtonResponse {
        let action = level
            .checked_sub(1)
            .and_then(|index| self.menu_actions.get(usize::from(index)).copied())
            .flatten();
        #[cfg(feature = "esp32-log")]
        println!("[AnimationController.invoke_menu_action] level {} -> {:?}", level, action);

        match action {
            Some(MenuAction::SelectBrightness) => {
                let level = self.brightness_level();
                self.menu
                    .open(MenuMode::Brightness, BRIGHTNESS_LEVEL_COUNT, level - 1);
                ButtonResponse::Consumed
            }
            Some(MenuAction::SelectColor) => {
                self.menu_time = self.last_update;
                self.menu.open(
                    MenuMode::Color,
                    COLOR_SELECTION_COUNT as u8,
                    self.colors.selection(),
                );
                ButtonResponse::Consumed
            }
            Some(action) => ButtonResponse::Action(action),
            None => ButtonResponse::Consumed,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn run_effect(&mut self) {
        let time = self.effect_time;
        let mut ctx = EffectContext::new(&mut self.colors);
        let control = self
            .effects
            .effect_mut(self.effect_id)
            .render(&mut ctx, &mut self.frame, time);
        let reset_request = ctx.reset_request();

        if let Some(timer_only) = reset_request {
            self.reset_effect(timer_only);
        }
        self.last_control = control;

        let time = self.effect_time;
        let fade_in = self.timings.fade_in.as_millis().min(u64::from(u32::MAX)) as u32;
        let color_duration = self.timings.color_duration.as_millis();

        // no fade while stopped
        if self.speed != Speed::Stopped && control.fade_over && time < fade_in {
            let fade = ((u64::from(fade_in - time) * 256) / u64::from(fade_in)).min(255) as u8;
            let fade = ease8_in_out_cubic(fade);
            for (pixel, previous) in self.frame.iter_mut().zip(self.backup.iter()) {
                *pixel = blend_colors(*pixel, *previous, fade);
            }
        } else if control.allow_auto_color_change && u64::from(time) > color_duration {
            self.reset_effect(true);
            self.colors.update_color();
        }
    }

    fn display_menu(&mut self, now: Instant) {
        self.frame.fill(BLACK);

        match self.menu.mode() {
            MenuMode::Main => match self.menu.long_press_level() {
                1 => APEX.fill(&mut self.frame, WHITE),
                2 => MIDDLE_RING.fill(&mut self.frame, WHITE),
                3 => BOTTOM_RING.fill(&mut self.frame, WHITE),
                4 => BOTTOM_RING.fill(&mut self.frame, BLUE),
                _ => {}
            },
            MenuMode::Brightness => {
                let lit = usize::from(self.brightness_level()).min(LED_COUNT);
                self.frame[..lit].fill(WHITE);
            }
            MenuMode::Color => self.display_color_menu(now),
            MenuMode::Closing => {}
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn display_color_menu(&mut self, now: Instant) {
        let selection = self.menu.sub_selection();
        if self.colors.selection() != selection {
            self.set_color_selection(selection);
            self.menu_time = now;
        } else if now
            .checked_duration_since(self.menu_time)
            .is_some_and(|shown| shown > self.timings.color_preview)
        {
            self.menu_time = now;
            self.colors.update_color();
        }

        APEX.fill(&mut self.frame, self.colors.current());
        if self.colors.is_color_palette() {
            let mut mix = (now.as_millis() / 64) as u8;
            for led in MIDDLE_RING.slice_mut(&mut self.frame) {
                *led = self.colors.palette_color(mix, false);
                mix = mix.wrapping_add(64);
            }
        } else {
            MIDDLE_RING.fill(&mut self.frame, self.colors.next());
        }
        if let Some(led) = self.frame.get_mut(usize::from(self.colors.selection())) {
            *led = WHITE;
        }
    }

    fn flush(&mut self) {
        self.filter.apply(&self.frame, &mut self.output_frame);
        self.output.write(&self.output_frame);
    }
}
