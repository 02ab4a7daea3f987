use crate::player::{playing_field, screen_to_world};
use crate::prelude::{PlayerSnake, Settings};
use bevy::app::{App, Plugin, Update};
use bevy::color::Color;
use bevy::color::palettes::tailwind;
use bevy::math::Isometry2d;
use bevy::prelude::{Gizmos, Query, Res};

/// A plugin that renders gizmos for debugging purposes.
pub struct GizmosPlugin;

impl Plugin for GizmosPlugin {
  fn build(&self, app: &mut App) {
    app.add_systems(Update, (render_gizmos_system,));
  }
}

fn render_gizmos_system(mut gizmos: Gizmos, settings: Res<Settings>, snake_query: Query<&PlayerSnake>) {
  if !settings.general.display_snake_gizmos {
    return;
  }

  let viewport = playing_field();
  for snake in &snake_query {
    // Head collision bounds
    let bounds = snake.head_bounds();
    gizmos.rect_2d(
      Isometry2d::from_translation(screen_to_world(bounds.center(), viewport)),
      bounds.size(),
      Color::from(tailwind::AMBER_400),
    );

    // Segment centre points, highlighted while airborne
    for segment in snake.segments().iter().filter(|segment| segment.visible) {
      let colour = if segment.is_jumping {
        tailwind::RED_400
      } else {
        tailwind::CYAN_300
      };
      gizmos.circle_2d(
        Isometry2d::from_translation(screen_to_world(segment.position, viewport)),
        2.,
        Color::from(colour),
      );
    }
  }
}
