use bevy::app::{App, Plugin, Update};
use bevy::log::*;
use bevy::prelude::{AppExtStates, MessageReader, State, StateTransitionEvent, States, SystemSet};
use bevy::reflect::Reflect;
use std::fmt::Display;

/// Owns the round lifecycle: [`AppState::Initialising`] → [`AppState::Playing`] → [`AppState::GameOver`] and back.
pub struct AppStatePlugin;

impl Plugin for AppStatePlugin {
  fn build(&self, app: &mut App) {
    app
      .init_state::<AppState>()
      .register_type::<State<AppState>>()
      .add_systems(Update, log_app_state_transitions_system);
  }
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States, Reflect)]
pub enum AppState {
  /// Spawns the snake for a new round. Runs at application start and after every game over.
  #[default]
  Initialising,
  /// The snake moves, grows and can crash.
  Playing,
  /// The snake crashed. Virtual time is paused until the player continues.
  GameOver,
}

impl Display for AppState {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{:?}", self)
  }
}

/// The phases of a gameplay frame, in the order they run while [`AppState::Playing`].
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameplaySystems {
  /// Translates and applies player input.
  Input,
  /// Decides whether the snake grows this frame.
  Growth,
  /// Ticks the snake model.
  Movement,
  /// Mirrors the snake model onto sprites.
  Presentation,
  /// Checks whether the round is over.
  Outcome,
}

fn describe(state: Option<AppState>) -> String {
  state.map_or_else(|| "-".to_string(), |state| state.to_string())
}

fn log_app_state_transitions_system(mut transitions: MessageReader<StateTransitionEvent<AppState>>) {
  for transition in transitions.read() {
    info!(
      "AppState changed from [{}] to [{}]",
      describe(transition.exited),
      describe(transition.entered)
    );
  }
}
