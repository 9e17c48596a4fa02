//! Core game types and logic (data, generation, movement).
//!
//! Re-exports:
//! - `map`: Occupancy grid queried by renderers and movement
//! - `maze`: Randomized depth-first maze generation
//! - `player`: Player position and view basis
//! - `movement`: Input handling and per-axis collision

pub mod map;
pub mod maze;
pub mod movement;
pub mod player;
