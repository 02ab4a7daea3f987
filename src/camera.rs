use crate::prelude::constants::*;
use bevy::app::{App, Plugin, Startup, Update};
use bevy::prelude::*;
use bevy::window::WindowResized;

/// A plugin that sets up the camera and keeps the playing field fully visible when the window is resized.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
  fn build(&self, app: &mut App) {
    app
      .insert_resource(ClearColor(Color::from(BACKGROUND_COLOUR)))
      .add_systems(Startup, setup_camera_system)
      .add_systems(Update, fit_playing_field_system);
  }
}

#[derive(Component)]
struct InGameCamera;

fn setup_camera_system(mut commands: Commands) {
  commands.spawn((Name::new("In-Game Camera"), Camera2d, Msaa::Off, InGameCamera));
}

// Scales the camera projection so that the whole playing field fits into the window
fn fit_playing_field_system(
  mut resize_messages: MessageReader<WindowResized>,
  mut projection_query: Query<&mut Projection, With<InGameCamera>>,
) {
  for window_resized in resize_messages.read() {
    for mut projection in &mut projection_query {
      let Projection::Orthographic(projection) = &mut *projection else {
        continue;
      };
      projection.scale = playing_field_scale(window_resized.width, window_resized.height);
    }
  }
}

/// The projection scale at which the playing field fits into a window of the given size.
fn playing_field_scale(window_width: f32, window_height: f32) -> f32 {
  let h_scale = window_width / RESOLUTION_WIDTH as f32;
  let v_scale = window_height / RESOLUTION_HEIGHT as f32;
  let scale = h_scale.min(v_scale);
  if scale > 0. { 1. / scale } else { 1. }
}
