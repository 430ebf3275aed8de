//! Command queue for changing the light from other contexts
//!
//! Interrupt handlers, network tasks or a second core push commands into a
//! [`CommandQueue`]. The main loop drains it with a [`CommandProcessor`]
//! right before updating the controller, so all changes happen on the
//! controller's own context.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::{Deque, Vec};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::config::PersistedConfig;
use crate::controller::{AnimationController, ButtonResponse, MenuAction, Speed};
use crate::effect::EffectId;
use crate::menu::ButtonEvent;

/// Maximum number of external menu actions returned per drain
pub const MAX_PENDING_ACTIONS: usize = 4;

/// Change requested from outside the main loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightCommand {
    SetEffect(EffectId),
    NextEffect,
    SetSpeed(Speed),
    NextSpeed,
    SetBrightnessLevel(u8),
    SetColorSelection(u8),
    /// Button event, unused events run the default button actions
    Button(ButtonEvent),
    ApplyConfig(PersistedConfig),
}

/// Error returned when the queue is full, holds the rejected command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub LightCommand);

/// Bounded command queue guarded by a critical section.
pub struct CommandQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<LightCommand, SIZE>>>,
}

impl<const SIZE: usize> CommandQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle, any number of senders may exist
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { queue: self }
    }

    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { queue: self }
    }

    /// Queue a command
    ///
    /// Returns `Err(TrySendError(command))` if the queue is full.
    pub fn try_send(&self, command: LightCommand) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            self.inner
                .borrow(cs)
                .borrow_mut()
                .push_back(command)
                .map_err(TrySendError)
        })
    }

    /// Take the oldest command
    pub fn try_receive(&self) -> Option<LightCommand> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for CommandQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending side of a [`CommandQueue`]
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    /// See [`CommandQueue::try_send`]
    pub fn try_send(&self, command: LightCommand) -> Result<(), TrySendError> {
        self.queue.try_send(command)
    }
}

/// Receiving side of a [`CommandQueue`]
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Option<LightCommand> {
        self.queue.try_receive()
    }
}

/// Applies queued commands to a controller
pub struct CommandProcessor<'a, const SIZE: usize> {
    commands: CommandReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> CommandProcessor<'a, SIZE> {
    pub const fn new(commands: CommandReceiver<'a, SIZE>) -> Self {
        Self { commands }
    }

    /// Apply all pending commands (non-blocking)
    ///
    /// Returns the menu actions the caller has to run, such as saving the
    /// configuration. Actions past [`MAX_PENDING_ACTIONS`] are dropped.
    pub fn process_pending<O: OutputDriver>(
        &mut self,
        controller: &mut AnimationController<O>,
    ) -> Vec<MenuAction, MAX_PENDING_ACTIONS> {
        let mut actions = Vec::new();

        while let Some(command) = self.commands.try_receive() {
            if let Some(action) = Self::apply(controller, command) {
                if actions.push(action).is_err() {
                    #[cfg(feature = "esp32-log")]
                    println!("[CommandProcessor.process_pending] dropped {:?}", action);
                }
            }
        }

        actions
    }

    fn apply<O: OutputDriver>(
        controller: &mut AnimationController<O>,
        command: LightCommand,
    ) -> Option<MenuAction> {
        match command {
            LightCommand::SetEffect(id) => controller.set_effect(id),
            LightCommand::NextEffect => controller.next_effect(),
            LightCommand::SetSpeed(speed) => controller.set_speed(speed),
            LightCommand::NextSpeed => controller.next_speed(),
            LightCommand::SetBrightnessLevel(level) => controller.set_brightness_level(level),
            LightCommand::SetColorSelection(index) => controller.set_color_selection(index),
            LightCommand::ApplyConfig(config) => controller.apply_config(&config),
            LightCommand::Button(event) => match controller.handle_button_event(event) {
                ButtonResponse::Ignored => controller.apply_default_button_action(event),
                ButtonResponse::Consumed => {}
                ButtonResponse::Action(action) => return Some(action),
            },
        }
        None
    }
}
