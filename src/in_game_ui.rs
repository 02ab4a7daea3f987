use crate::app_states::AppState;
use crate::prelude::constants::{GAME_OVER_FONT_SIZE, JUMP_INDICATOR_FONT_SIZE};
use crate::prelude::{GameOutcome, InputMessage};
use crate::snake::SnakeStatus;
use bevy::app::{App, Plugin, Startup, Update};
use bevy::color::Color;
use bevy::log::debug;
use bevy::prelude::{
  AlignItems, BackgroundColor, Commands, Component, Entity, FlexDirection, Justify, JustifyContent, LineBreak,
  MessageReader, Name, Node, OnEnter, OnExit, PositionType, Query, Res, Text, TextColor, TextFont, TextLayout,
  UiRect, Val, With, default,
};
use bevy::text::LineHeight;

/// A plugin that manages the in-game user interface: the jump indicator and the game over screen.
pub struct InGameUiPlugin;

impl Plugin for InGameUiPlugin {
  fn build(&self, app: &mut App) {
    app
      .add_systems(Startup, spawn_jump_indicator_system)
      .add_systems(OnEnter(AppState::Playing), reset_jump_indicator_system)
      .add_systems(Update, update_jump_indicator_system)
      .add_systems(OnEnter(AppState::GameOver), spawn_game_over_ui_system)
      .add_systems(OnExit(AppState::GameOver), despawn_game_over_ui_system);
  }
}

#[derive(Component)]
struct JumpIndicator;

#[derive(Component)]
struct GameOverUiRoot;

fn jump_indicator_text(is_jumping: bool) -> &'static str {
  if is_jumping { "JUMP" } else { "GROUND" }
}

fn game_over_text(status: SnakeStatus) -> &'static str {
  match status {
    SnakeStatus::Collided => "You ran into yourself!",
    SnakeStatus::OutOfBounds => "You left the field!",
    SnakeStatus::Playing => "Game over!",
  }
}

/// Spawns a label in the top left corner that shows whether the jump button is held.
fn spawn_jump_indicator_system(mut commands: Commands) {
  commands.spawn((
    Name::new("Jump Indicator"),
    JumpIndicator,
    Text::new(jump_indicator_text(false)),
    TextFont {
      font_size: JUMP_INDICATOR_FONT_SIZE,
      ..default()
    },
    TextColor(Color::WHITE),
    BackgroundColor(Color::BLACK),
    Node {
      position_type: PositionType::Absolute,
      top: Val::Px(10.),
      left: Val::Px(10.),
      padding: UiRect::axes(Val::Px(10.), Val::Px(5.)),
      ..default()
    },
  ));
}

fn update_jump_indicator_system(
  mut input_messages: MessageReader<InputMessage>,
  mut indicator_query: Query<&mut Text, With<JumpIndicator>>,
) {
  let Some(is_jumping) = input_messages
    .read()
    .filter_map(|message| match message {
      InputMessage::Jump(is_jumping) => Some(*is_jumping),
      InputMessage::Turn(_) => None,
    })
    .last()
  else {
    return;
  };

  for mut text in &mut indicator_query {
    text.0 = jump_indicator_text(is_jumping).to_string();
  }
}

/// Every round starts on the ground, even if the jump key was released while no round was running.
fn reset_jump_indicator_system(mut indicator_query: Query<&mut Text, With<JumpIndicator>>) {
  for mut text in &mut indicator_query {
    text.0 = jump_indicator_text(false).to_string();
  }
}

fn spawn_game_over_ui_system(mut commands: Commands, outcome: Res<GameOutcome>) {
  let root = commands
    .spawn((
      Name::new("Game Over UI"),
      GameOverUiRoot,
      Node {
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        flex_direction: FlexDirection::Column,
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
      },
    ))
    .id();

  for (text, line_height) in [
    (game_over_text(outcome.get()), 1.2),
    ("Press [Space] to play again...", 3.0),
  ] {
    let entry = commands
      .spawn((
        Text::new(text),
        TextFont {
          font_size: GAME_OVER_FONT_SIZE,
          line_height: LineHeight::RelativeToFont(line_height),
          ..default()
        },
        TextLayout::new(Justify::Center, LineBreak::WordBoundary),
        TextColor(Color::WHITE),
      ))
      .id();
    commands.entity(root).add_child(entry);
  }
  debug!("Spawned game over UI for [{}]", outcome.get());
}

fn despawn_game_over_ui_system(mut commands: Commands, root_query: Query<Entity, With<GameOverUiRoot>>) {
  for root in &root_query {
    commands.entity(root).despawn();
  }
}
