//! The snake's movement, growth and self-collision model. Nothing in here knows how the snake is drawn: renderers
//! receive [`Pose`]s through the [`VisualHandle`] trait.

mod config;
mod direction;
mod segment;
mod visual;

pub use config::*;
pub use direction::*;
pub use segment::*;
pub use visual::*;

#[cfg(test)]
pub(crate) use visual::test_utils;

use bevy::math::{Rect, Vec2};
use std::fmt::Display;
use std::time::Duration;

/// The number of distinct segment looks that growth cycles through.
pub const SEGMENT_FRAMES: usize = 16;

/// Whether the snake can keep going, and if not, why.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SnakeStatus {
  #[default]
  Playing,
  /// The head ran into a body segment that shares its jump state.
  Collided,
  /// The head left the viewport.
  OutOfBounds,
}

impl SnakeStatus {
  pub fn is_terminal(self) -> bool {
    self != SnakeStatus::Playing
  }
}

impl Display for SnakeStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{:?}", self)
  }
}

/// The snake: a head that advances one step per move tick and a chain of segments that follows it.
#[derive(Debug, Clone)]
pub struct Snake {
  config: SnakeConfig,
  direction: Direction,
  head_position: Vec2,
  head_rotation: f32,
  head_shadow: Pose,
  segments: Vec<Segment>,
  is_jumping: bool,
  /// `None` until the first tick, so the very first update always moves.
  last_move_time: Option<Duration>,
}

impl Snake {
  pub fn new(position: Vec2, config: SnakeConfig) -> Self {
    let direction = config.start_direction;
    Self {
      head_shadow: Pose {
        position: position + config.shadow_offset,
        rotation: 0.,
        visible: false,
      },
      config,
      direction,
      head_position: position,
      head_rotation: 0.,
      segments: Vec::new(),
      is_jumping: false,
      last_move_time: None,
    }
  }

  pub fn direction(&self) -> Direction {
    self.direction
  }

  pub fn head_position(&self) -> Vec2 {
    self.head_position
  }

  pub fn head_rotation(&self) -> f32 {
    self.head_rotation
  }

  pub fn is_jumping(&self) -> bool {
    self.is_jumping
  }

  pub fn segments(&self) -> &[Segment] {
    &self.segments
  }

  pub fn len(&self) -> usize {
    self.segments.len()
  }

  pub fn is_empty(&self) -> bool {
    self.segments.is_empty()
  }

  pub fn config(&self) -> &SnakeConfig {
    &self.config
  }

  /// Advances the snake by one step if at least `move_delay` has passed since the last move. Returns whether a move
  /// tick happened. Calls in between ticks leave the snake untouched.
  pub fn update(&mut self, now: Duration) -> bool {
    if self
      .last_move_time
      .is_some_and(|last_move_time| now < last_move_time + self.config.move_delay)
    {
      return false;
    }

    let old_head_position = self.head_position;
    let old_head_is_jumping = self.is_jumping;
    let step = self.direction.as_vec2();
    self.head_position += step * self.config.step_size;
    self.head_rotation = segment::facing(Vec2::ZERO, step);
    self.head_shadow = Pose {
      position: self.head_position + self.config.shadow_offset,
      rotation: self.head_rotation,
      visible: self.is_jumping,
    };

    self.propagate(old_head_position, old_head_is_jumping);
    self.last_move_time = Some(now);

    true
  }

  /// Shifts every segment one slot towards the head. Each segment takes the state its predecessor had before this
  /// tick, with the first segment taking the head's.
  fn propagate(&mut self, old_head_position: Vec2, old_head_is_jumping: bool) {
    let mut carried = Slot {
      position: old_head_position,
      is_jumping: old_head_is_jumping,
      placed: true,
    };
    for segment in self.segments.iter_mut() {
      carried = segment.follow(carried);
    }
  }

  /// Appends one hidden segment to the tail. It joins the chain on the next move tick.
  pub fn grow(&mut self) {
    let frame = (self.segments.len() + 1) % SEGMENT_FRAMES;
    self.segments.push(Segment::placeholder(frame));
  }

  /// Changes the direction of travel from the next move tick onwards. Reversing onto the body is rejected, in which
  /// case `false` is returned.
  pub fn set_direction(&mut self, direction: Direction) -> bool {
    if direction.is_opposite_of(self.direction) {
      return false;
    }
    self.direction = direction;
    true
  }

  pub fn set_is_jumping(&mut self, is_jumping: bool) {
    self.is_jumping = is_jumping;
  }

  /// The square region around the head that other parts collide with.
  pub fn head_bounds(&self) -> Rect {
    Rect::from_center_size(self.head_position, Vec2::splat(self.config.segment_size))
  }

  /// Whether any segment sharing the current jump state lies within the head's bounds. This includes segments still
  /// waiting at their placeholder.
  pub fn collide_with_self(&self) -> bool {
    let bounds = self.head_bounds();
    self
      .segments
      .iter()
      .any(|segment| segment.is_jumping == self.is_jumping && bounds.contains(segment.position))
  }

  /// Whether the head is outside `[0, width) x [0, height)`.
  pub fn is_out_of_bounds(&self, width: f32, height: f32) -> bool {
    let position = self.head_position;
    position.x < 0. || position.y < 0. || position.x >= width || position.y >= height
  }

  /// Evaluates both game over conditions, self-collision first.
  pub fn status(&self, width: f32, height: f32) -> SnakeStatus {
    if self.collide_with_self() {
      SnakeStatus::Collided
    } else if self.is_out_of_bounds(width, height) {
      SnakeStatus::OutOfBounds
    } else {
      SnakeStatus::Playing
    }
  }

  /// The current [`Pose`] of the given part, if it exists.
  pub fn pose(&self, part: SnakePart) -> Option<Pose> {
    match part {
      SnakePart::Head => Some(Pose {
        position: self.head_position,
        rotation: self.head_rotation,
        visible: true,
      }),
      SnakePart::HeadShadow => Some(self.head_shadow),
      SnakePart::Segment(index) => self.segments.get(index).map(Segment::pose),
      SnakePart::SegmentShadow(index) => self
        .segments
        .get(index)
        .map(|segment| segment.shadow(self.config.shadow_offset)),
    }
  }

  /// Pushes the pose of the given part to a [`VisualHandle`]. Returns `false` if the part does not exist (yet).
  pub fn render(&self, part: SnakePart, handle: &mut impl VisualHandle) -> bool {
    match self.pose(part) {
      Some(pose) => {
        handle.apply(pose);
        true
      }
      None => false,
    }
  }
}
