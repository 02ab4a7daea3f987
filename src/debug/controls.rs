use crate::prelude::{GeneralSettings, PlayerSnake, Settings};
use bevy::app::{App, Plugin, Update};
use bevy::input::ButtonInput;
use bevy::log::info;
use bevy::prelude::{KeyCode, Query, Res, ResMut};

/// Keyboard shortcuts that only exist in dev builds.
pub struct DebugControlsPlugin;

impl Plugin for DebugControlsPlugin {
  fn build(&self, app: &mut App) {
    app.add_systems(Update, (toggle_snake_gizmos_system, force_growth_system));
  }
}

fn toggle_snake_gizmos_system(
  keyboard_input: Res<ButtonInput<KeyCode>>,
  mut settings: ResMut<Settings>,
  mut general_settings: ResMut<GeneralSettings>,
) {
  if !keyboard_input.just_pressed(KeyCode::F9) {
    return;
  }
  let display_gizmos = !settings.general.display_snake_gizmos;
  settings.general.display_snake_gizmos = display_gizmos;
  general_settings.display_snake_gizmos = display_gizmos;
  info!("[F9] Set display snake gizmos to [{}]", display_gizmos);
}

/// Appends a segment without waiting for the growth policy.
fn force_growth_system(keyboard_input: Res<ButtonInput<KeyCode>>, mut snake_query: Query<&mut PlayerSnake>) {
  if !keyboard_input.just_pressed(KeyCode::F10) {
    return;
  }
  for mut snake in &mut snake_query {
    snake.grow();
    info!("[F10] Grew snake to [{}] segments", snake.len());
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::prelude::SharedResourcesPlugin;
  use crate::snake::{Snake, SnakeConfig};
  use bevy::MinimalPlugins;
  use bevy::math::Vec2;

  fn setup() -> App {
    let mut app = App::new();
    app
      .add_plugins((MinimalPlugins, SharedResourcesPlugin, DebugControlsPlugin))
      .init_resource::<ButtonInput<KeyCode>>();
    app
  }

  fn press(app: &mut App, key_code: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(key_code);
    app.update();
  }

  #[test]
  fn f9_toggles_snake_gizmos() {
    let mut app = setup();
    press(&mut app, KeyCode::F9);

    let settings = app.world().get_resource::<Settings>().expect("Settings missing");
    assert!(settings.general.display_snake_gizmos);
    let general_settings = app
      .world()
      .get_resource::<GeneralSettings>()
      .expect("GeneralSettings missing");
    assert!(general_settings.display_snake_gizmos);
  }

  #[test]
  fn f10_grows_the_snake() {
    let mut app = setup();
    app
      .world_mut()
      .spawn(PlayerSnake(Snake::new(Vec2::new(20., 20.), SnakeConfig::default())));
    press(&mut app, KeyCode::F10);

    let mut query = app.world_mut().query::<&PlayerSnake>();
    let snake = query.single(app.world()).expect("PlayerSnake missing");
    assert_eq!(snake.len(), 1);
  }
}
