//! Billboard sprite projection.
//!
//! One static world point projected through the camera basis and drawn as
//! a flat-colored rectangle. Drawn after the wall pass with no depth test,
//! so it shows through walls; that is long-standing behavior, kept on
//! purpose rather than silently adding a depth buffer.

use raylib::prelude::*;

use crate::core::player::Player;
use crate::render::framebuffer::Framebuffer;
use crate::render::geometry::perp_distance;
use crate::render::walls::projected_height;
use crate::CAMERA_WIDTH;

pub struct Sprite {
    pub pos: Vector2,
    /// Screen-space size in reference pixels at distance 1.
    pub width: f32,
    pub height: f32,
    /// Vertical offset as a fraction of half the projected wall height:
    /// 0 floats at eye level, +1 sits on the floor line, -1 at the ceiling.
    pub anchor: f32,
    pub color: Color,
}

/// Screen-space footprint, already clipped to the screen.
#[derive(Debug, PartialEq, Eq)]
pub struct Footprint {
    pub x0: u32,
    pub x1: u32,
    pub y0: u32,
    pub y1: u32,
}

/// Project the sprite into screen space. `None` when it is behind the
/// camera, outside the view fan, degenerate, or under a pixel wide.
pub fn project(
    player: &Player,
    sprite: &Sprite,
    screen_w: f32,
    screen_h: f32,
) -> Option<Footprint> {
    let dir = player.dir();
    let plane = player.plane();
    let rel = Vector2::new(sprite.pos.x - player.pos.x, sprite.pos.y - player.pos.y);

    let depth = rel.dot(dir);
    if depth <= 0.0 {
        return None;
    }
    // Plane coefficient per unit of forward travel; wall columns cover
    // exactly [-CAMERA_WIDTH, CAMERA_WIDTH] of it.
    let f = rel.dot(plane) / depth;
    if f.abs() > CAMERA_WIDTH {
        return None;
    }
    let distance = perp_distance(player.pos, plane, sprite.pos);
    if distance <= 0.0 {
        return None;
    }

    let center_x = (f / CAMERA_WIDTH + 1.0) * 0.5 * screen_w;
    let sw = sprite.width / distance;
    let sh = sprite.height / distance;
    if sw < 1.0 || sh < 1.0 {
        return None;
    }

    let wall_h = projected_height(distance, screen_h);
    let center_y = screen_h * 0.5 + sprite.anchor * wall_h * 0.5;

    let x0 = (center_x - sw * 0.5).max(0.0) as u32;
    let x1 = (center_x + sw * 0.5).min(screen_w - 1.0) as u32;
    let y0 = (center_y - sh * 0.5).max(0.0) as u32;
    let y1 = (center_y + sh * 0.5).min(screen_h - 1.0) as u32;
    if x0 > x1 || y0 > y1 {
        return None;
    }
    Some(Footprint { x0, x1, y0, y1 })
}

pub fn render_sprite(fb: &mut Framebuffer, player: &Player, sprite: &Sprite) {
    let Some(rect) = project(player, sprite, fb.width as f32, fb.height as f32) else {
        return;
    };
    fb.set_current_color(sprite.color);
    for x in rect.x0..=rect.x1 {
        for y in rect.y0..=rect.y1 {
            fb.set_pixel(x, y);
        }
    }
}
