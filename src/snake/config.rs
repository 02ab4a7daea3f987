use crate::prelude::constants::*;
use crate::snake::Direction;
use bevy::math::Vec2;
use bevy::prelude::{ReflectResource, Resource};
use bevy::reflect::Reflect;
use std::time::Duration;

/// Tunables for the snake's movement and shape. Registered as a resource so that it can be edited at runtime.
#[derive(Resource, Reflect, Debug, Clone, PartialEq)]
#[reflect(Resource)]
pub struct SnakeConfig {
  /// How far the head travels per move tick.
  pub step_size: f32,
  /// Minimum time between two move ticks.
  pub move_delay: Duration,
  /// The offset of every shadow relative to the part it mirrors.
  pub shadow_offset: Vec2,
  /// The edge length of the head's square bounding region.
  pub segment_size: f32,
  pub start_position: Vec2,
  pub start_direction: Direction,
}

impl Default for SnakeConfig {
  fn default() -> Self {
    Self {
      step_size: SNAKE_STEP_SIZE,
      move_delay: Duration::from_millis(SNAKE_MOVE_DELAY_MS),
      shadow_offset: Vec2::splat(SNAKE_SHADOW_OFFSET),
      segment_size: SNAKE_SEGMENT_SIZE,
      start_position: Vec2::new(SNAKE_START_X, SNAKE_START_Y),
      start_direction: Direction::Right,
    }
  }
}
