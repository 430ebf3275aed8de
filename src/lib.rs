#![no_std]

pub mod bounds;
pub mod color;
pub mod command;
pub mod config;
pub mod controller;
pub mod effect;
pub mod filter;
pub mod math8;
pub mod menu;
pub mod status;

pub use bounds::LED_COUNT;
pub use command::{
    CommandProcessor, CommandQueue, CommandReceiver, CommandSender, LightCommand, TrySendError,
};
pub use config::PersistedConfig;
pub use controller::{
    AnimationController, ButtonResponse, EffectTimings, LightConfig, MenuAction, Speed,
};
pub use effect::{Effect, EffectContext, EffectControl, EffectId, EffectRegistry, EffectSlot};
pub use filter::OutputFilterConfig;
pub use menu::{ButtonEvent, LongPressOverflow, Menu, MenuConfig, MenuMode, MenuResponse};
pub use status::StatusSnapshot;

pub use color::{ColorGenerator, Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The controller is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
