mod app_states;
mod camera;
mod controls;
#[cfg(feature = "dev")]
mod debug;
mod game_loop;
mod in_game_ui;
mod player;
mod shared;
mod snake;

mod prelude {
  pub use crate::shared::*;
}

#[cfg(feature = "dev")]
use crate::debug::DebugPlugin;

use crate::app_states::AppStatePlugin;
use crate::camera::CameraPlugin;
use crate::controls::ControlsPlugin;
use crate::game_loop::GameLoopPlugin;
use crate::in_game_ui::InGameUiPlugin;
use crate::player::PlayerPlugin;
use crate::prelude::constants::{RESOLUTION_HEIGHT, RESOLUTION_WIDTH};
use crate::prelude::*;
use bevy::prelude::*;
use bevy::window::WindowResolution;

fn main() {
  let mut app = App::new();
  app
    .add_plugins(
      DefaultPlugins
        .set(ImagePlugin::default_nearest())
        .set(WindowPlugin {
          primary_window: Some(Window {
            title: "Hopsnake".to_string(),
            resolution: WindowResolution::new(RESOLUTION_WIDTH, RESOLUTION_HEIGHT),
            ..default()
          }),
          ..default()
        }),
    )
    .add_plugins((
      CameraPlugin,
      AppStatePlugin,
      SharedResourcesPlugin,
      SharedMessagesPlugin,
      PlayerPlugin,
      GameLoopPlugin,
      InGameUiPlugin,
      ControlsPlugin,
    ));

  #[cfg(feature = "dev")]
  app.add_plugins(DebugPlugin);

  app.run();
}
