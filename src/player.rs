use crate::app_states::{AppState, GameplaySystems};
use crate::prelude::constants::*;
use crate::prelude::{Player, PlayerSnake, SnakeVisual};
use crate::snake::{SEGMENT_FRAMES, Snake, SnakeConfig, SnakePart, VisualHandle};
use bevy::prelude::*;

/// A plugin that manages spawning the snake, ticking its model and mirroring the model onto sprites.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
  fn build(&self, app: &mut App) {
    app.add_systems(OnEnter(AppState::Initialising), spawn_player_system).add_systems(
      Update,
      (
        tick_snake_system.in_set(GameplaySystems::Movement),
        spawn_segment_visuals_system.in_set(GameplaySystems::Presentation),
        sync_snake_visuals_system.in_set(GameplaySystems::Presentation),
      )
        .chain(),
    );
  }
}

/// Tracks how many segments of a [`PlayerSnake`] already have sprites.
#[derive(Component, Default)]
struct SegmentSprites {
  spawned: usize,
}

/// A [`VisualHandle`] backed by a sprite's [`Transform`] and [`Visibility`]. Converts from the snake's screen space
/// into Bevy's world space.
pub struct SpriteHandle<'a> {
  transform: &'a mut Transform,
  visibility: &'a mut Visibility,
  viewport: Vec2,
}

impl<'a> SpriteHandle<'a> {
  pub fn new(transform: &'a mut Transform, visibility: &'a mut Visibility, viewport: Vec2) -> Self {
    Self {
      transform,
      visibility,
      viewport,
    }
  }
}

impl VisualHandle for SpriteHandle<'_> {
  fn set_position(&mut self, position: Vec2) {
    let world_position = screen_to_world(position, self.viewport);
    self.transform.translation.x = world_position.x;
    self.transform.translation.y = world_position.y;
  }

  fn set_rotation(&mut self, rotation: f32) {
    // Screen space rotates clockwise, world space counter-clockwise
    self.transform.rotation = Quat::from_rotation_z(-rotation);
  }

  fn set_visible(&mut self, visible: bool) {
    *self.visibility = if visible {
      Visibility::Inherited
    } else {
      Visibility::Hidden
    };
  }
}

/// The size of the playing field in screen space.
pub(crate) fn playing_field() -> Vec2 {
  Vec2::new(RESOLUTION_WIDTH as f32, RESOLUTION_HEIGHT as f32)
}

/// Converts a screen space position (origin top left, y down) to world space (origin in the centre, y up).
pub(crate) fn screen_to_world(position: Vec2, viewport: Vec2) -> Vec2 {
  Vec2::new(position.x - viewport.x / 2., viewport.y / 2. - position.y)
}

/// Picks one of [`SEGMENT_FRAMES`] evenly spaced hues for a segment.
fn segment_colour(frame: usize) -> Color {
  let hue = (frame % SEGMENT_FRAMES) as f32 * 360. / SEGMENT_FRAMES as f32;
  Color::hsl(hue, 0.55, 0.55)
}

fn shadow_sprite(size: Vec2) -> Sprite {
  Sprite::from_color(Color::from(SHADOW_COLOUR), size)
}

/// Spawns the player's snake along with the sprites for its head and head shadow.
fn spawn_player_system(mut commands: Commands, config: Res<SnakeConfig>) {
  let snake = Snake::new(config.start_position, (*config).clone());
  let size = Vec2::splat(config.segment_size);
  let head_position = screen_to_world(config.start_position, playing_field());
  commands
    .spawn((
      Name::new("Snake"),
      Player,
      PlayerSnake(snake),
      SegmentSprites::default(),
      Transform::default(),
      Visibility::default(),
    ))
    .with_children(|parent| {
      parent.spawn((
        Name::new("Snake Head"),
        SnakeVisual(SnakePart::Head),
        Sprite::from_color(Color::from(HEAD_COLOUR), size),
        Transform::from_translation(head_position.extend(HEAD_Z)),
        Visibility::Inherited,
      ));
      parent.spawn((
        Name::new("Snake Head Shadow"),
        SnakeVisual(SnakePart::HeadShadow),
        shadow_sprite(size),
        Transform::from_translation(head_position.extend(SHADOW_Z)),
        Visibility::Hidden,
      ));
    });
  debug!("Spawned snake at [{}] heading [{}]", config.start_position, config.start_direction);
}

/// Feeds the elapsed (virtual) time into every snake. The snake decides itself whether a move tick is due.
fn tick_snake_system(time: Res<Time>, mut snake_query: Query<&mut PlayerSnake>) {
  let now = time.elapsed();
  for mut snake in &mut snake_query {
    if snake.update(now) {
      trace!(
        "Snake moved to [{}] facing [{:.2}] rad",
        snake.head_position(),
        snake.head_rotation()
      );
    }
  }
}

/// Spawns a body and a shadow sprite for every segment that has grown since the last frame.
fn spawn_segment_visuals_system(
  mut commands: Commands,
  mut snake_query: Query<(Entity, &PlayerSnake, &mut SegmentSprites)>,
) {
  for (snake_entity, snake, mut sprites) in &mut snake_query {
    if sprites.spawned >= snake.len() {
      continue;
    }

    let size = Vec2::splat(snake.config().segment_size);
    for (index, segment) in snake.segments().iter().enumerate().skip(sprites.spawned) {
      let body = commands
        .spawn((
          Name::new(format!("Snake Segment {}", index + 1)),
          SnakeVisual(SnakePart::Segment(index)),
          Sprite::from_color(segment_colour(segment.frame), size),
          Transform::from_xyz(0., 0., SEGMENT_Z),
          Visibility::Hidden,
        ))
        .id();
      let shadow = commands
        .spawn((
          Name::new(format!("Snake Segment {} Shadow", index + 1)),
          SnakeVisual(SnakePart::SegmentShadow(index)),
          shadow_sprite(size),
          Transform::from_xyz(0., 0., SHADOW_Z),
          Visibility::Hidden,
        ))
        .id();
      commands.entity(snake_entity).add_children(&[body, shadow]);
    }

    debug!("Snake has grown to [{}] segments", snake.len());
    sprites.spawned = snake.len();
  }
}

/// Pushes the pose of every snake part to the sprite that displays it.
fn sync_snake_visuals_system(
  snake_query: Query<(&PlayerSnake, &Children)>,
  mut visual_query: Query<(&SnakeVisual, &mut Transform, &mut Visibility)>,
) {
  let viewport = playing_field();
  for (snake, children) in &snake_query {
    for child in children.iter() {
      let Ok((visual, mut transform, mut visibility)) = visual_query.get_mut(child) else {
        continue;
      };
      let mut handle = SpriteHandle::new(&mut transform, &mut visibility, viewport);
      if !snake.render(visual.0, &mut handle) {
        warn!("Sprite [{:?}] displays a part that the snake does not have", visual.0);
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::app_states::AppStatePlugin;
  use crate::prelude::{SharedMessagesPlugin, SharedResourcesPlugin};
  use bevy::state::app::StatesPlugin;
  use bevy::time::TimeUpdateStrategy;
  use std::f32::consts::FRAC_PI_2;
  use std::time::Duration;

  fn setup() -> App {
    let mut app = App::new();
    app.add_plugins((
      MinimalPlugins,
      StatesPlugin,
      AppStatePlugin,
      SharedMessagesPlugin,
      SharedResourcesPlugin,
      PlayerPlugin,
    ));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(10)));
    app
  }

  fn visuals(app: &mut App) -> Vec<(SnakeVisual, Transform, Visibility)> {
    let mut query = app.world_mut().query::<(&SnakeVisual, &Transform, &Visibility)>();
    query
      .iter(app.world())
      .map(|(visual, transform, visibility)| (*visual, *transform, *visibility))
      .collect()
  }

  fn visual(app: &mut App, part: SnakePart) -> (Transform, Visibility) {
    visuals(app)
      .into_iter()
      .find(|(visual, _, _)| visual.0 == part)
      .map(|(_, transform, visibility)| (transform, visibility))
      .expect("Visual missing")
  }

  #[test]
  fn screen_to_world_moves_origin_to_centre_and_flips_y() {
    let viewport = Vec2::new(800., 600.);
    assert_eq!(screen_to_world(Vec2::new(400., 300.), viewport), Vec2::ZERO);
    assert_eq!(screen_to_world(Vec2::ZERO, viewport), Vec2::new(-400., 300.));
    assert_eq!(screen_to_world(Vec2::new(800., 600.), viewport), Vec2::new(400., -300.));
  }

  #[test]
  fn sprite_handle_converts_pose_into_world_space() {
    let mut transform = Transform::from_xyz(0., 0., SHADOW_Z);
    let mut visibility = Visibility::Inherited;
    let mut handle = SpriteHandle::new(&mut transform, &mut visibility, Vec2::new(800., 600.));

    handle.set_position(Vec2::new(70., 20.));
    handle.set_rotation(FRAC_PI_2);
    handle.set_visible(false);

    assert_eq!(transform.translation, Vec3::new(-330., 280., SHADOW_Z));
    assert!(transform.rotation.abs_diff_eq(Quat::from_rotation_z(-FRAC_PI_2), 1e-6));
    assert_eq!(visibility, Visibility::Hidden);
  }

  #[test]
  fn segment_colours_differ_per_frame() {
    assert_ne!(segment_colour(0), segment_colour(1));
    assert_eq!(segment_colour(1), segment_colour(1 + SEGMENT_FRAMES));
  }

  #[test]
  fn spawn_player_system_spawns_snake_with_head_and_shadow() {
    let mut app = setup();
    app.update();

    let mut query = app.world_mut().query::<&PlayerSnake>();
    assert_eq!(query.iter(app.world()).count(), 1);

    let parts: Vec<SnakePart> = visuals(&mut app).into_iter().map(|(visual, _, _)| visual.0).collect();
    assert_eq!(parts.len(), 2);
    assert!(parts.contains(&SnakePart::Head));
    assert!(parts.contains(&SnakePart::HeadShadow));
  }

  #[test]
  fn first_update_moves_head_sprite_one_step() {
    let mut app = setup();
    app.update();

    let (transform, visibility) = visual(&mut app, SnakePart::Head);
    let expected = screen_to_world(Vec2::new(70., 20.), playing_field());
    assert_eq!(transform.translation, expected.extend(HEAD_Z));
    assert_eq!(visibility, Visibility::Inherited);

    let (shadow_transform, shadow_visibility) = visual(&mut app, SnakePart::HeadShadow);
    let expected_shadow = screen_to_world(Vec2::new(80., 30.), playing_field());
    assert_eq!(shadow_transform.translation, expected_shadow.extend(SHADOW_Z));
    assert_eq!(shadow_visibility, Visibility::Hidden);
  }

  #[test]
  fn growing_spawns_hidden_body_and_shadow_sprites() {
    let mut app = setup();
    app.update();

    let mut query = app.world_mut().query::<&mut PlayerSnake>();
    for mut snake in query.iter_mut(app.world_mut()) {
      snake.grow();
      snake.grow();
    }
    app.update();

    let visuals = visuals(&mut app);
    assert_eq!(visuals.len(), 6);
    for index in 0..2 {
      for part in [SnakePart::Segment(index), SnakePart::SegmentShadow(index)] {
        let (_, _, visibility) = visuals
          .iter()
          .find(|(visual, _, _)| visual.0 == part)
          .expect("Segment visual missing");
        assert_eq!(*visibility, Visibility::Hidden);
      }
    }
  }
}
