//! Single button menu
//!
//! Holding the button raises a long press level once per repeat event, the
//! release then invokes the action bound to that level. Actions may open a
//! sub-menu where clicks move a selection until the next hold closes it.
//!
//! ```text
//!  Main --release(level)--> Brightness / Color --repeat--> Closing --release--> Main
//! ```

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Highest number of long press levels
pub const MAX_LONG_PRESS_LEVELS: u8 = 4;

/// Button events fed into the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    Clicked,
    DoubleClicked,
    /// Fired repeatedly while the button is held
    RepeatPressed,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMode {
    Main,
    Brightness,
    Color,
    /// Waiting for the release that ends a sub-menu
    Closing,
}

/// What happens when the button is held past the last level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LongPressOverflow {
    /// Abort without invoking anything
    Close,
    /// Start over at the first level
    Wrap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuConfig {
    /// Number of long press levels, at most [`MAX_LONG_PRESS_LEVELS`]
    pub long_press_levels: u8,
    pub overflow: LongPressOverflow,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            long_press_levels: MAX_LONG_PRESS_LEVELS,
            overflow: LongPressOverflow::Close,
        }
    }
}

/// Result of a handled button event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuResponse {
    /// The event is left to the caller
    NotConsumed,
    Consumed,
    /// Run the action bound to this long press level
    Invoke(u8),
    /// The sub-menu selection moved to this index
    SelectionChanged(u8),
}

impl MenuResponse {
    pub const fn is_consumed(self) -> bool {
        !matches!(self, Self::NotConsumed)
    }
}

#[derive(Debug, Clone)]
pub struct Menu {
    long_press_levels: u8,
    overflow: LongPressOverflow,
    mode: MenuMode,
    long_press_level: u8,
    sub_selection: u8,
    sub_selection_count: u8,
}

impl Menu {
    pub fn new(config: &MenuConfig) -> Self {
        Self {
            long_press_levels: config.long_press_levels.clamp(1, MAX_LONG_PRESS_LEVELS),
            overflow: config.overflow,
            mode: MenuMode::Main,
            long_press_level: 0,
            sub_selection: 0,
            sub_selection_count: 1,
        }
    }

    pub const fn mode(&self) -> MenuMode {
        self.mode
    }

    pub const fn long_press_level(&self) -> u8 {
        self.long_press_level
    }

    pub const fn long_press_levels(&self) -> u8 {
        self.long_press_levels
    }

    pub const fn sub_selection(&self) -> u8 {
        self.sub_selection
    }

    pub const fn sub_selection_count(&self) -> u8 {
        self.sub_selection_count
    }

    /// Check if the menu owns the display
    pub fn is_active(&self) -> bool {
        self.mode != MenuMode::Main || self.long_press_level != 0
    }

    /// Enter a mode with `count` sub-selections, starting at `selection`
    ///
    /// The selection is clamped to the last sub-selection.
    pub fn open(&mut self, mode: MenuMode, count: u8, selection: u8) {
        #[cfg(feature = "esp32-log")]
        println!("[Menu.open] {:?} -> {:?}", self.mode, mode);

        self.mode = mode;
        self.sub_selection_count = count.max(1);
        self.sub_selection = selection.min(self.sub_selection_count - 1);
    }

    /// Return to the main mode and drop any pending level
    pub fn close(&mut self) {
        self.mode = MenuMode::Main;
        self.long_press_level = 0;
    }

    /// Feed a button event into the menu
    pub fn handle(&mut self, event: ButtonEvent) -> MenuResponse {
        match (self.mode, event) {
            (MenuMode::Main, ButtonEvent::RepeatPressed) => {
                self.long_press_level += 1;
                if self.long_press_level > self.long_press_levels {
                    match self.overflow {
                        LongPressOverflow::Close => {
                            self.mode = MenuMode::Closing;
                            self.long_press_level = 0;
                        }
                        LongPressOverflow::Wrap => self.long_press_level = 1,
                    }
                }
                MenuResponse::Consumed
            }
            (MenuMode::Main, ButtonEvent::Released) if self.long_press_level != 0 => {
                let level = self.long_press_level;
                self.long_press_level = 0;
                #[cfg(feature = "esp32-log")]
                println!("[Menu.handle] invoke level {}", level);
                MenuResponse::Invoke(level)
            }
            (MenuMode::Main, _) => MenuResponse::NotConsumed,
            (
                MenuMode::Brightness | MenuMode::Color,
                ButtonEvent::Clicked | ButtonEvent::Released,
            ) => {
                self.next_sub_selection();
                MenuResponse::SelectionChanged(self.sub_selection)
            }
            (MenuMode::Brightness | MenuMode::Color, ButtonEvent::DoubleClicked) => {
                self.prev_sub_selection();
                MenuResponse::SelectionChanged(self.sub_selection)
            }
            (MenuMode::Brightness | MenuMode::Color, ButtonEvent::RepeatPressed) => {
                self.mode = MenuMode::Closing;
                self.long_press_level = 0;
                MenuResponse::Consumed
            }
            (MenuMode::Closing, ButtonEvent::Released) => {
                self.mode = MenuMode::Main;
                MenuResponse::Consumed
            }
            // swallow the remaining repeats of the closing hold
            (MenuMode::Closing, ButtonEvent::RepeatPressed) => MenuResponse::Consumed,
            (MenuMode::Closing, _) => MenuResponse::NotConsumed,
        }
    }

    fn next_sub_selection(&mut self) {
        self.sub_selection += 1;
        if self.sub_selection >= self.sub_selection_count {
            self.sub_selection = 0;
        }
    }

    fn prev_sub_selection(&mut self) {
        self.sub_selection = match self.sub_selection {
            0 => self.sub_selection_count - 1,
            selection => selection - 1,
        };
    }
}
