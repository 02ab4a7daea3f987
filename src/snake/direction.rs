use bevy::math::Vec2;
use bevy::reflect::Reflect;
use std::fmt::Display;

/// One of the four cardinal directions the snake can travel in. Expressed in screen space, so [`Direction::Down`]
/// increases y.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect)]
pub enum Direction {
  #[default]
  Right,
  Left,
  Down,
  Up,
}

impl Direction {
  pub const ALL: [Direction; 4] = [Direction::Right, Direction::Left, Direction::Down, Direction::Up];

  /// The unit vector of this direction.
  pub fn as_vec2(self) -> Vec2 {
    match self {
      Direction::Right => Vec2::new(1., 0.),
      Direction::Left => Vec2::new(-1., 0.),
      Direction::Down => Vec2::new(0., 1.),
      Direction::Up => Vec2::new(0., -1.),
    }
  }

  pub fn opposite(self) -> Direction {
    match self {
      Direction::Right => Direction::Left,
      Direction::Left => Direction::Right,
      Direction::Down => Direction::Up,
      Direction::Up => Direction::Down,
    }
  }

  pub fn is_opposite_of(self, other: Direction) -> bool {
    self.opposite() == other
  }
}

impl Display for Direction {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{:?}", self)
  }
}
