use crate::snake::Direction;
use bevy::prelude::{KeyCode, Resource};

/// Defines the key bindings of the player.
#[derive(Resource, Clone, Debug)]
pub struct PlayerInput {
  pub up: KeyCode,
  pub down: KeyCode,
  pub left: KeyCode,
  pub right: KeyCode,
  pub jump: KeyCode,
}

impl PlayerInput {
  pub fn new(up: KeyCode, down: KeyCode, left: KeyCode, right: KeyCode, jump: KeyCode) -> Self {
    Self {
      up,
      down,
      left,
      right,
      jump,
    }
  }

  /// The key bound to each direction.
  pub fn direction_bindings(&self) -> [(KeyCode, Direction); 4] {
    [
      (self.up, Direction::Up),
      (self.down, Direction::Down),
      (self.left, Direction::Left),
      (self.right, Direction::Right),
    ]
  }
}

impl Default for PlayerInput {
  fn default() -> Self {
    Self::new(
      KeyCode::ArrowUp,
      KeyCode::ArrowDown,
      KeyCode::ArrowLeft,
      KeyCode::ArrowRight,
      KeyCode::Space,
    )
  }
}
