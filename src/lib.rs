//! First-person raycasting renderer over a procedurally generated maze.
//!
//! `core` holds the game data and logic (map, maze generation, player,
//! movement); `render` holds the CPU framebuffer and the per-frame render
//! passes (floor/ceiling, walls, billboard sprite). The binary in `main.rs`
//! owns the window and drives one frame per iteration.

pub mod core;
pub mod render;

/// Screen width in pixels (also the number of wall rays at scale 1).
pub const SCREEN_WIDTH: u32 = 800;
/// Screen height in pixels.
pub const SCREEN_HEIGHT: u32 = 450;

/// Half-width of the camera plane; larger means a wider field of view.
pub const CAMERA_WIDTH: f32 = 0.7;

/// Translation speed in cells per second.
pub const SPEED: f32 = 1.5;
/// Rotation speed in radians per second.
pub const ROT_SPEED: f32 = 1.5;

/// Safety cap on DDA steps per ray; bounded maps hit a wall long before this.
pub const MAX_DDA_STEPS: usize = 100;

/// Cast every Nth column and replicate it across the skipped ones.
pub const COLUMN_SCALE: usize = 1;
/// Floor/ceiling fill granularity: one solid NxN block per sample.
pub const PIXEL_SCALE: usize = 2;
