#![cfg(feature = "dev")]

mod controls;
mod gizmos;

use crate::debug::controls::DebugControlsPlugin;
use crate::debug::gizmos::GizmosPlugin;
use crate::snake::SnakeConfig;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::input::common_conditions::input_toggle_active;
use bevy::prelude::{App, KeyCode, Plugin};
use bevy_inspector_egui::bevy_egui::EguiPlugin;
use bevy_inspector_egui::quick::{ResourceInspectorPlugin, WorldInspectorPlugin};

/// Developer tooling that only exists with the `dev` feature:
/// - `F1` toggles the world inspector
/// - `F2` toggles an inspector for the [`SnakeConfig`] used when the next snake spawns
/// - `F9` toggles the snake gizmos
/// - `F10` grows the snake by one segment
pub struct DebugPlugin;

impl Plugin for DebugPlugin {
  fn build(&self, app: &mut App) {
    app
      .add_plugins((EguiPlugin::default(), FrameTimeDiagnosticsPlugin::default()))
      .add_plugins(WorldInspectorPlugin::default().run_if(input_toggle_active(false, KeyCode::F1)))
      .add_plugins(
        ResourceInspectorPlugin::<SnakeConfig>::default().run_if(input_toggle_active(false, KeyCode::F2)),
      )
      .add_plugins((DebugControlsPlugin, GizmosPlugin));
  }
}
