use crate::prelude::PlayerInput;
use crate::prelude::constants::GROWTH_CHANCE_PER_FRAME;
use crate::snake::{SnakeConfig, SnakeStatus};
use bevy::app::{App, Plugin};
use bevy::prelude::{Reflect, ReflectResource, Resource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A plugin that registers and initialises shared resources used across the entire application such as [`Settings`].
pub struct SharedResourcesPlugin;

impl Plugin for SharedResourcesPlugin {
  fn build(&self, app: &mut App) {
    app
      .init_resource::<Settings>()
      .register_type::<Settings>()
      .init_resource::<GeneralSettings>()
      .register_type::<GeneralSettings>()
      .init_resource::<SnakeConfig>()
      .register_type::<SnakeConfig>()
      .init_resource::<PlayerInput>()
      .init_resource::<GrowthPolicy>()
      .init_resource::<GameOutcome>();
  }
}

/// A resource that holds various settings that can be configured for the game. Intended for developer use only.
#[derive(Resource, Reflect, Clone, Copy, Default)]
pub struct Settings {
  pub general: GeneralSettings,
}

/// A resource that holds general settings, a child of the [`Settings`] resource. Intended for developer use only.
#[derive(Resource, Reflect, Clone, Copy, Default)]
#[reflect(Resource)]
pub struct GeneralSettings {
  /// Whether to display gizmos for the head bounds and segment positions.
  pub display_snake_gizmos: bool,
}

/// Decides, once per frame, whether the snake grows. Growth is random so that the snake does not need food.
#[derive(Resource)]
pub struct GrowthPolicy {
  chance: f64,
  rng: StdRng,
}

impl Default for GrowthPolicy {
  fn default() -> Self {
    Self::new(GROWTH_CHANCE_PER_FRAME, StdRng::from_os_rng())
  }
}

impl GrowthPolicy {
  /// Creates a policy that grows the snake with the given probability per frame. The chance is clamped to `[0, 1]`.
  pub fn new(chance: f64, rng: StdRng) -> Self {
    Self {
      chance: chance.clamp(0., 1.),
      rng,
    }
  }

  /// A deterministic policy, mostly useful in tests.
  pub fn seeded(chance: f64, seed: u64) -> Self {
    Self::new(chance, StdRng::seed_from_u64(seed))
  }

  pub fn chance(&self) -> f64 {
    self.chance
  }

  /// Rolls the dice for the current frame.
  pub fn should_grow(&mut self) -> bool {
    self.rng.random_bool(self.chance)
  }
}

/// A resource that holds the outcome of the current round. Stays [`SnakeStatus::Playing`] until the snake crashes.
#[derive(Resource, Default)]
pub struct GameOutcome {
  status: SnakeStatus,
}

impl GameOutcome {
  pub fn get(&self) -> SnakeStatus {
    self.status
  }

  pub fn set(&mut self, status: SnakeStatus) {
    self.status = status;
  }

  /// Resets the outcome for the next round.
  pub fn clear(&mut self) {
    self.status = SnakeStatus::Playing;
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use bevy::MinimalPlugins;

  fn setup() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, SharedResourcesPlugin));
    app
  }

  #[test]
  fn shared_resources_plugin_does_not_panic_on_empty_app() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(SharedResourcesPlugin);
  }

  #[test]
  fn shared_resources_plugin_registers_resources() {
    let app = setup();
    let world = app.world();

    assert!(world.contains_resource::<Settings>());
    assert!(world.contains_resource::<GeneralSettings>());
    assert!(world.contains_resource::<SnakeConfig>());
    assert!(world.contains_resource::<PlayerInput>());
    assert!(world.contains_resource::<GrowthPolicy>());
    let outcome = world.get_resource::<GameOutcome>().expect("GameOutcome missing");
    assert_eq!(outcome.get(), SnakeStatus::Playing);
  }

  #[test]
  fn growth_policy_with_certain_chance_always_grows() {
    let mut policy = GrowthPolicy::seeded(1.0, 7);
    assert!((0..100).all(|_| policy.should_grow()));
  }

  #[test]
  fn growth_policy_with_zero_chance_never_grows() {
    let mut policy = GrowthPolicy::seeded(0.0, 7);
    assert!((0..100).all(|_| !policy.should_grow()));
  }

  #[test]
  fn growth_policy_clamps_chance() {
    assert_eq!(GrowthPolicy::seeded(4.2, 1).chance(), 1.0);
    assert_eq!(GrowthPolicy::seeded(-1.0, 1).chance(), 0.0);
  }

  #[test]
  fn growth_policy_default_grows_roughly_once_per_hundred_frames() {
    let mut policy = GrowthPolicy::new(GROWTH_CHANCE_PER_FRAME, StdRng::seed_from_u64(42));
    let grown = (0..100_000).filter(|_| policy.should_grow()).count();
    assert!((500..1_500).contains(&grown), "Grew [{}] times", grown);
  }

  #[test]
  fn game_outcome_can_be_set_and_cleared() {
    let mut outcome = GameOutcome::default();
    outcome.set(SnakeStatus::Collided);
    assert_eq!(outcome.get(), SnakeStatus::Collided);
    outcome.clear();
    assert_eq!(outcome.get(), SnakeStatus::Playing);
  }
}
