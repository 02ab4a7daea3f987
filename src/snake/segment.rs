use bevy::math::Vec2;

/// The renderable state of a single snake part: where it is, which way it faces and whether it is shown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
  pub position: Vec2,
  /// Rotation in radians, clockwise in screen space.
  pub rotation: f32,
  pub visible: bool,
}

/// One trailing body unit of the snake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
  pub position: Vec2,
  pub rotation: f32,
  /// The jump state this segment inherited from the part ahead of it.
  pub is_jumping: bool,
  /// False until the segment has been placed by a move tick for the first time.
  pub visible: bool,
  /// Index into the segment palette, assigned at growth.
  pub frame: usize,
}

impl Segment {
  /// A freshly grown segment. It waits at the origin, hidden, until the body chain reaches it.
  pub(crate) fn placeholder(frame: usize) -> Self {
    Self {
      position: Vec2::ZERO,
      rotation: 0.,
      is_jumping: false,
      visible: false,
      frame,
    }
  }

  /// Moves this segment into the slot the part ahead of it just left and returns the slot this segment vacated, to be
  /// handed on to the next segment.
  pub(crate) fn follow(&mut self, slot: Slot) -> Slot {
    let vacated = self.slot();
    self.rotation = facing(self.position, slot.position);
    self.position = slot.position;
    self.is_jumping = slot.is_jumping;
    self.visible = slot.placed;
    vacated
  }

  fn slot(&self) -> Slot {
    Slot {
      position: self.position,
      is_jumping: self.is_jumping,
      placed: self.visible,
    }
  }

  pub fn pose(&self) -> Pose {
    Pose {
      position: self.position,
      rotation: self.rotation,
      visible: self.visible,
    }
  }

  /// The offset twin of this segment, shown only while the segment is airborne.
  pub fn shadow(&self, offset: Vec2) -> Pose {
    Pose {
      position: self.position + offset,
      rotation: self.rotation,
      visible: self.is_jumping,
    }
  }
}

/// A position in the follow-the-leader chain together with the jump state recorded there. `placed` is false for the
/// origin placeholder of segments that have not been reached yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Slot {
  pub position: Vec2,
  pub is_jumping: bool,
  pub placed: bool,
}

/// The rotation of something that travelled from `from` to `to`. Matches the head's convention of `atan2(-dy, -dx)`.
pub(crate) fn facing(from: Vec2, to: Vec2) -> f32 {
  let delta = to - from;
  (-delta.y).atan2(-delta.x)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::f32::consts::{FRAC_PI_2, PI};

  #[test]
  fn placeholder_is_hidden_at_origin() {
    let segment = Segment::placeholder(3);
    assert_eq!(segment.position, Vec2::ZERO);
    assert!(!segment.visible);
    assert!(!segment.is_jumping);
    assert_eq!(segment.frame, 3);
  }

  #[test]
  fn follow_returns_vacated_slot_and_becomes_visible() {
    let mut segment = Segment::placeholder(1);
    segment.position = Vec2::new(20., 20.);
    segment.visible = true;

    let vacated = segment.follow(Slot {
      position: Vec2::new(70., 20.),
      is_jumping: true,
      placed: true,
    });

    assert_eq!(
      vacated,
      Slot {
        position: Vec2::new(20., 20.),
        is_jumping: false,
        placed: true,
      }
    );
    assert_eq!(segment.position, Vec2::new(70., 20.));
    assert!(segment.is_jumping);
    assert!(segment.visible);
    assert!((segment.rotation.abs() - PI).abs() < 1e-6);
  }

  #[test]
  fn follow_stays_hidden_when_handed_a_placeholder() {
    let mut segment = Segment::placeholder(2);
    let vacated = segment.follow(Segment::placeholder(1).slot());
    assert!(!segment.visible);
    assert!(!vacated.placed);
  }

  #[test]
  fn facing_matches_head_convention() {
    assert!((facing(Vec2::ZERO, Vec2::new(0., 1.)) + FRAC_PI_2).abs() < 1e-6);
    assert!((facing(Vec2::ZERO, Vec2::new(0., -1.)) - FRAC_PI_2).abs() < 1e-6);
    assert!(facing(Vec2::ZERO, Vec2::new(-1., 0.)).abs() < 1e-6);
  }

  #[test]
  fn shadow_is_offset_and_gated_by_jump_state() {
    let mut segment = Segment::placeholder(0);
    segment.follow(Slot {
      position: Vec2::new(100., 50.),
      is_jumping: false,
      placed: true,
    });
    let shadow = segment.shadow(Vec2::splat(10.));
    assert_eq!(shadow.position, Vec2::new(110., 60.));
    assert_eq!(shadow.rotation, segment.rotation);
    assert!(!shadow.visible);

    segment.is_jumping = true;
    assert!(segment.shadow(Vec2::splat(10.)).visible);
  }
}
