//! DDA wall raycaster and column drawing.

use raylib::prelude::*;

use crate::core::map::Map;
use crate::core::player::Player;
use crate::render::framebuffer::Framebuffer;
use crate::render::geometry::{boundary_dt, perp_distance, step_sign};
use crate::{CAMERA_WIDTH, COLUMN_SCALE, MAX_DDA_STEPS};

// Two colors per wall variant, alternated by the stripe key.
const WALL_STRIPES: [Color; 2] = [Color::new(255, 40, 40, 255), Color::new(180, 24, 24, 255)];
const PILLAR_STRIPES: [Color; 2] = [Color::new(40, 255, 40, 255), Color::new(24, 180, 24, 255)];

/// Which grid axis the ray crossed last before stopping. Determines the
/// wall face orientation, and with it shading and the texture axis.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HitAxis {
    X,
    Y,
}

pub struct ColumnHit {
    /// Perpendicular (fisheye-corrected) distance to the collision point.
    pub distance: f32,
    pub axis: HitAxis,
    /// Occupancy value of the cell the ray stopped in; 0 if the step cap
    /// ran out in open space.
    pub variant: u8,
    /// Fractional offset along the wall face, on the axis not crossed last.
    pub tex: f32,
}

/// Cast one ray for screen column `x` and walk the grid with DDA until a
/// wall cell or the step cap. A capped ray reports whatever cell and
/// offset it last reached; the frame just looks far away there.
pub fn cast_column(map: &Map, player: &Player, x: usize, screen_w: usize) -> ColumnHit {
    let dir = player.dir();
    let plane = player.plane();
    let f = CAMERA_WIDTH * (2.0 * x as f32 / screen_w as f32 - 1.0);
    let ray = Vector2::new(dir.x + plane.x * f, dir.y + plane.y * f);

    let mut xi = player.pos.x.floor() as isize;
    let mut yi = player.pos.y.floor() as isize;
    let mut x_rem = player.pos.x - player.pos.x.floor();
    let mut y_rem = player.pos.y - player.pos.y.floor();

    let step_x = step_sign(ray.x);
    let step_y = step_sign(ray.y);

    let mut axis = HitAxis::X;
    for _ in 0..MAX_DDA_STEPS {
        let dt_x = boundary_dt(x_rem, ray.x);
        let dt_y = boundary_dt(y_rem, ray.y);

        let (dt, dx, dy) = if dt_x < dt_y {
            axis = HitAxis::X;
            (dt_x, step_x, 0)
        } else {
            axis = HitAxis::Y;
            (dt_y, 0, step_y)
        };

        xi += dx as isize;
        yi += dy as isize;
        // Subtracting the step snaps the offset exactly to 0 or 1 in the
        // new cell, so no float drift accumulates across crossings.
        x_rem += ray.x * dt - dx as f32;
        y_rem += ray.y * dt - dy as f32;

        if map.at(xi, yi) > 0 {
            break;
        }
    }

    let hit_point = Vector2::new(xi as f32 + x_rem, yi as f32 + y_rem);
    let distance = perp_distance(player.pos, plane, hit_point);
    let tex = match axis {
        HitAxis::X => y_rem,
        HitAxis::Y => x_rem,
    };

    ColumnHit {
        distance,
        axis,
        variant: map.at(xi, yi),
        tex,
    }
}

/// Projected wall slab height for a perpendicular distance, clamped to the
/// screen. Distance is never negative; division by zero saturates and the
/// clamp catches it.
#[inline]
pub fn projected_height(distance: f32, screen_h: f32) -> f32 {
    (screen_h / distance).min(screen_h)
}

fn stripe_color(variant: u8, tex: f32) -> Color {
    let stripe = ((tex * 10.0).floor() as i32).rem_euclid(2) as usize;
    match variant {
        0 => Color::BLACK,
        1 => WALL_STRIPES[stripe],
        _ => PILLAR_STRIPES[stripe],
    }
}

/// Fake directional shading: faces hit on a y crossing lose the high bit
/// of every channel.
#[inline]
fn darken(c: Color) -> Color {
    Color::new(c.r & 0x7f, c.g & 0x7f, c.b & 0x7f, c.a)
}

/// Draw the wall slab of every column, centered on the horizon. Runs after
/// the floor/ceiling pass, which already filled everything outside the slab.
pub fn render_walls(fb: &mut Framebuffer, map: &Map, player: &Player) {
    let w = fb.width as usize;
    let h = fb.height as f32;

    for x in (0..w).step_by(COLUMN_SCALE) {
        let hit = cast_column(map, player, x, w);
        let height = projected_height(hit.distance, h);
        let top = ((h - height) * 0.5).max(0.0) as u32;
        let bottom = ((h + height) * 0.5).min(h - 1.0) as u32;

        let mut color = stripe_color(hit.variant, hit.tex);
        if hit.axis == HitAxis::Y {
            color = darken(color);
        }
        fb.set_current_color(color);

        for rep in 0..COLUMN_SCALE {
            let col = x + rep;
            if col >= w {
                break;
            }
            for y in top..=bottom {
                fb.set_pixel(col as u32, y);
            }
        }
    }
}
