use crate::snake::Direction;
use bevy::app::{App, Plugin};
use bevy::prelude::Message;

/// A plugin that registers all shared messages used across multiple plugins and systems.
pub struct SharedMessagesPlugin;

impl Plugin for SharedMessagesPlugin {
  fn build(&self, app: &mut App) {
    app.add_message::<InputMessage>().add_message::<ContinueMessage>();
  }
}

/// A message that carries a player intent, translated from raw keyboard input.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMessage {
  /// Steer the snake. Applied from the next move tick onwards.
  Turn(Direction),
  /// Press (`true`) or release (`false`) of the jump button.
  Jump(bool),
}

/// A message that signals the player wants to move on, e.g. to start a new round after game over.
#[derive(Message)]
pub struct ContinueMessage;
