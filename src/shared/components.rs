use crate::snake::{Snake, SnakePart};
use bevy::prelude::{Component, Deref, DerefMut};

/// A marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// The snake model owned by the player entity. All sprites displaying it are children of the same entity.
#[derive(Component, Deref, DerefMut)]
pub struct PlayerSnake(pub Snake);

/// Links a sprite to the part of the snake it displays.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnakeVisual(pub SnakePart);
