use crate::app_states::{AppState, GameplaySystems};
use crate::prelude::{ContinueMessage, InputMessage, PlayerInput, PlayerSnake};
use bevy::app::{App, Plugin, Update};
use bevy::input::ButtonInput;
use bevy::log::*;
use bevy::prelude::{
  IntoScheduleConfigs, KeyCode, MessageReader, MessageWriter, MonitorSelection, Query, Res, Window, in_state,
};
use bevy::window::WindowMode;

/// A plugin that manages all player controls and input handling.
pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
  fn build(&self, app: &mut App) {
    app
      .add_systems(Update, settings_controls_system)
      .add_systems(
        Update,
        (player_input_system, player_action_system)
          .chain()
          .in_set(GameplaySystems::Input),
      )
      .add_systems(
        Update,
        send_continue_message_on_key_press_system.run_if(in_state(AppState::GameOver)),
      );
  }
}

/// Sends a [`ContinueMessage`] when the player presses one of the continue keys. Used to start a new round after game
/// over.
fn send_continue_message_on_key_press_system(
  keyboard_input: Res<ButtonInput<KeyCode>>,
  mut continue_message: MessageWriter<ContinueMessage>,
) {
  if keyboard_input.any_just_pressed([KeyCode::Space, KeyCode::Enter, KeyCode::Escape]) {
    continue_message.write(ContinueMessage);
  }
}

/// Sends [`InputMessage`]s based on keyboard input. Direction keys only fire on press, while the jump key reports both
/// press and release.
fn player_input_system(
  mut input_message: MessageWriter<InputMessage>,
  keyboard_input: Res<ButtonInput<KeyCode>>,
  player_input: Res<PlayerInput>,
) {
  for (key_code, direction) in player_input.direction_bindings() {
    if keyboard_input.just_pressed(key_code) {
      input_message.write(InputMessage::Turn(direction));
    }
  }
  if keyboard_input.just_pressed(player_input.jump) {
    input_message.write(InputMessage::Jump(true));
  }
  if keyboard_input.just_released(player_input.jump) {
    input_message.write(InputMessage::Jump(false));
  }
}

/// Responds to [`InputMessage`]s by steering the snake or toggling its jump state. Both only take effect on the snake's
/// next move tick.
fn player_action_system(mut input_messages: MessageReader<InputMessage>, mut snake_query: Query<&mut PlayerSnake>) {
  let messages: Vec<&InputMessage> = input_messages.read().collect();
  if messages.is_empty() {
    return;
  }

  for mut snake in &mut snake_query {
    for message in messages.iter() {
      match message {
        InputMessage::Turn(direction) => {
          if !snake.set_direction(*direction) {
            debug!("Ignored turn to [{}] while heading [{}]", direction, snake.direction());
          }
        }
        InputMessage::Jump(is_jumping) => snake.set_is_jumping(*is_jumping),
      }
    }
  }
}

/// A system that handles various settings-related controls, such as toggling fullscreen mode.
fn settings_controls_system(keyboard_input: Res<ButtonInput<KeyCode>>, mut window_query: Query<&mut Window>) {
  if !keyboard_input.just_pressed(KeyCode::F11) {
    return;
  }
  for mut window in &mut window_query {
    window.mode = match window.mode {
      WindowMode::Windowed => WindowMode::BorderlessFullscreen(MonitorSelection::Current),
      _ => WindowMode::Windowed,
    };
    info!("[F11] Set window mode to [{:?}]", window.mode);
  }
}
