use crate::app_states::{AppState, GameplaySystems};
use crate::player::playing_field;
use crate::prelude::{ContinueMessage, GameOutcome, GrowthPolicy, Player, PlayerSnake};
use bevy::app::{App, Plugin};
use bevy::ecs::entity::Entity;
use bevy::prelude::*;

/// A plugin that manages the main game loop: ordering the gameplay systems, random growth, detecting game over and
/// starting the next round.
pub struct GameLoopPlugin;

impl Plugin for GameLoopPlugin {
  fn build(&self, app: &mut App) {
    app
      .configure_sets(
        Update,
        (
          GameplaySystems::Input,
          GameplaySystems::Growth,
          GameplaySystems::Movement,
          GameplaySystems::Presentation,
          GameplaySystems::Outcome,
        )
          .chain()
          .run_if(in_state(AppState::Playing)),
      )
      .add_systems(Update, start_round_system.run_if(in_state(AppState::Initialising)))
      .add_systems(Update, grow_snake_system.in_set(GameplaySystems::Growth))
      .add_systems(
        Update,
        (check_snake_status_system, transition_to_game_over_system)
          .chain()
          .in_set(GameplaySystems::Outcome),
      )
      .add_systems(OnEnter(AppState::GameOver), pause_game_system)
      .add_systems(
        Update,
        game_over_to_initialising_transition_system.run_if(in_state(AppState::GameOver)),
      )
      .add_systems(
        OnExit(AppState::GameOver),
        (unpause_game_system, despawn_players_system, reset_outcome_system),
      );
  }
}

/// Starts the round once the snake has been spawned.
fn start_round_system(growth_policy: Res<GrowthPolicy>, mut next_app_state: ResMut<NextState<AppState>>) {
  debug!("Starting round with a growth chance of [{}] per frame", growth_policy.chance());
  next_app_state.set(AppState::Playing);
}

/// Asks the [`GrowthPolicy`] whether the snake grows this frame and, if so, appends a segment.
fn grow_snake_system(mut growth_policy: ResMut<GrowthPolicy>, mut snake_query: Query<&mut PlayerSnake>) {
  for mut snake in &mut snake_query {
    if growth_policy.should_grow() {
      snake.grow();
    }
  }
}

/// Evaluates the game over conditions of every snake against the playing field and records the first crash.
fn check_snake_status_system(snake_query: Query<&PlayerSnake>, mut outcome: ResMut<GameOutcome>) {
  let field = playing_field();
  for snake in &snake_query {
    let status = snake.status(field.x, field.y);
    if status.is_terminal() {
      debug!("Snake crashed at [{}] with [{}] segments", snake.head_position(), snake.len());
      outcome.set(status);
      return;
    }
  }
}

/// Transitions to the game over state once the round has an outcome.
fn transition_to_game_over_system(outcome: Res<GameOutcome>, mut next: ResMut<NextState<AppState>>) {
  let status = outcome.get();
  if status.is_terminal() {
    info!("Game over: [{}]", status);
    next.set(AppState::GameOver);
  }
}

/// Pauses the game time when called. Intended to be called when entering the game over state.
fn pause_game_system(mut time: ResMut<Time<Virtual>>) {
  time.pause();
}

/// Unpauses the game time when called. Intended to be called when exiting the game over state.
fn unpause_game_system(mut time: ResMut<Time<Virtual>>) {
  time.unpause();
}

fn game_over_to_initialising_transition_system(
  mut continue_messages: MessageReader<ContinueMessage>,
  mut next_app_state: ResMut<NextState<AppState>>,
) {
  debug_once!("Waiting for message to continue...");
  if continue_messages.read().next().is_none() {
    return;
  }
  next_app_state.set(AppState::Initialising);
}

/// Despawns all player entities, including their sprites. Intended to be called when exiting the game over state.
fn despawn_players_system(mut commands: Commands, players_query: Query<Entity, With<Player>>) {
  for entity in &players_query {
    commands.entity(entity).despawn();
  }
}

fn reset_outcome_system(mut outcome: ResMut<GameOutcome>) {
  outcome.clear();
}
