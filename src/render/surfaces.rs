//! Floor and ceiling fill: per-row perspective, checkerboard by world cell.

use raylib::prelude::*;

use crate::core::player::Player;
use crate::render::framebuffer::Framebuffer;
use crate::{CAMERA_WIDTH, PIXEL_SCALE};

const CHECKER_DARK: Color = Color::new(68, 68, 68, 255);
const CHECKER_LIGHT: Color = Color::new(102, 102, 102, 255);

/// Checkerboard key of the world cell containing `(px, py)`.
#[inline]
pub fn checker(px: f32, py: f32) -> i64 {
    ((px.floor() as i64) + (py.floor() as i64)).rem_euclid(2)
}

fn fill_block(fb: &mut Framebuffer, x0: usize, y0: usize, y1: usize, color: Color) {
    for y in y0..y1 {
        for x in x0..x0 + PIXEL_SCALE {
            fb.set_pixel_color(x as u32, y as u32, color);
        }
    }
}

/// Fill both screen halves. Each row maps to the world-space span visible
/// at its distance: the two extreme view rays scaled by `t = 1/(1 - 2y/H)`
/// give the edge points, and columns interpolate between them. The floor
/// row mirrored across the horizon reuses the same points with the two
/// checker colors swapped. Work happens in solid `PIXEL_SCALE` blocks.
/// On an odd height the middle row belongs to the floor side.
pub fn render_surfaces(fb: &mut Framebuffer, player: &Player) {
    let w = fb.width as usize;
    let h = fb.height as usize;
    let half = h / 2;
    let span = (h + 1) / 2;
    let dir = player.dir();
    let plane = player.plane();
    let pos = player.pos;

    for y in (0..span).step_by(PIXEL_SCALE) {
        let camera_factor = 1.0 - 2.0 * y as f32 / h as f32;
        if camera_factor <= 0.0 {
            // Exact horizon projects to infinity.
            continue;
        }
        let t = 1.0 / camera_factor;
        let left = Vector2::new(
            pos.x + t * (dir.x - CAMERA_WIDTH * plane.x),
            pos.y + t * (dir.y - CAMERA_WIDTH * plane.y),
        );
        let right = Vector2::new(
            pos.x + t * (dir.x + CAMERA_WIDTH * plane.x),
            pos.y + t * (dir.y + CAMERA_WIDTH * plane.y),
        );

        let ceil_y1 = (y + PIXEL_SCALE).min(half);
        let floor_y0 = (h - y - PIXEL_SCALE).max(half);
        let floor_y1 = h - y;

        for x in (0..w).step_by(PIXEL_SCALE) {
            let s = x as f32 / w as f32;
            let px = left.x + (right.x - left.x) * s;
            let py = left.y + (right.y - left.y) * s;
            let (ceil_c, floor_c) = if checker(px, py) == 0 {
                (CHECKER_DARK, CHECKER_LIGHT)
            } else {
                (CHECKER_LIGHT, CHECKER_DARK)
            };
            fill_block(fb, x, y, ceil_y1, ceil_c);
            fill_block(fb, x, floor_y0, floor_y1, floor_c);
        }
    }
}
