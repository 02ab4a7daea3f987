use crate::snake::Pose;
use bevy::math::Vec2;

/// The capability set the snake needs from whatever draws it. Positions and rotations are in screen space (origin in
/// the top left corner, y growing downwards, rotations clockwise).
pub trait VisualHandle {
  fn set_position(&mut self, position: Vec2);
  fn set_rotation(&mut self, rotation: f32);
  fn set_visible(&mut self, visible: bool);

  /// Applies a full [`Pose`] in one go.
  fn apply(&mut self, pose: Pose) {
    self.set_position(pose.position);
    self.set_rotation(pose.rotation);
    self.set_visible(pose.visible);
  }
}

/// Identifies one renderable part of the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnakePart {
  Head,
  HeadShadow,
  Segment(usize),
  SegmentShadow(usize),
}
