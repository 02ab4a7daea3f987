use bevy::color::Srgba;

// General and rendering
// --------------------------------//

/// The width of the playing field, which is also the initial window width.
pub(crate) const RESOLUTION_WIDTH: u32 = 800;

/// The height of the playing field, which is also the initial window height.
pub(crate) const RESOLUTION_HEIGHT: u32 = 600;

/// The colour behind the playing field (#4488AA).
pub(crate) const BACKGROUND_COLOUR: Srgba = Srgba::new(0.266_667, 0.533_333, 0.666_667, 1.0);

/// The colour of the snake head sprite.
pub(crate) const HEAD_COLOUR: Srgba = Srgba::new(0.121_569, 0.160_784, 0.215_686, 1.0);

/// The tint of every shadow sprite. Half transparent.
pub(crate) const SHADOW_COLOUR: Srgba = Srgba::new(1.0, 0.0, 0.0, 0.5);

/// Render depth of shadows, which are drawn below everything else.
pub(crate) const SHADOW_Z: f32 = -1.;

/// Render depth of body segments.
pub(crate) const SEGMENT_Z: f32 = 0.;

/// Render depth of the snake head.
pub(crate) const HEAD_Z: f32 = 1.;

// Snake and gameplay constants
// --------------------------------//

/// The distance (in pixel) the head moves per move tick.
pub(crate) const SNAKE_STEP_SIZE: f32 = 50.;

/// The time (in milliseconds) between two move ticks.
pub(crate) const SNAKE_MOVE_DELAY_MS: u64 = 150;

/// The edge length of the head, segments and their sprites. Also the size of the head's collision bounds.
pub(crate) const SNAKE_SEGMENT_SIZE: f32 = 50.;

/// The diagonal offset of shadows relative to the parts they mirror.
pub(crate) const SNAKE_SHADOW_OFFSET: f32 = 10.;

/// The spawn position of the head, in screen space.
pub(crate) const SNAKE_START_X: f32 = 20.;
pub(crate) const SNAKE_START_Y: f32 = 20.;

/// The chance, per rendered frame, that the snake grows by one segment.
pub(crate) const GROWTH_CHANCE_PER_FRAME: f64 = 0.01;

// UI
// --------------------------------//

pub(crate) const JUMP_INDICATOR_FONT_SIZE: f32 = 24.0;
pub(crate) const GAME_OVER_FONT_SIZE: f32 = 38.0;
