//! Rendering: CPU framebuffer and the per-frame passes.
//!
//! Re-exports:
//! - `framebuffer`: CPU framebuffer and texture upload
//! - `geometry`: Ray/grid math shared by the passes
//! - `surfaces`: Floor and ceiling checkerboard fill
//! - `walls`: DDA wall raycaster and column drawing
//! - `sprite`: Billboard sprite projection

pub mod framebuffer;
pub mod geometry;
pub mod sprite;
pub mod surfaces;
pub mod walls;
