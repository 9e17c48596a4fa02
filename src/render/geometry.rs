//! Ray/grid math shared by the wall and sprite passes.

use raylib::prelude::Vector2;

/// Grid step for a ray component: -1, 0 or +1.
#[inline]
pub fn step_sign(comp: f32) -> i32 {
    if comp < 0.0 {
        -1
    } else if comp > 0.0 {
        1
    } else {
        0
    }
}

// offset(t) = rem + comp * t
//
// 0 = rem + comp * t  =>  t = -rem / comp        (moving toward 0)
// 1 = rem + comp * t  =>  t = (1 - rem) / comp   (moving toward 1)
/// Parametric distance until the in-cell offset reaches the next grid line.
/// Infinite for a zero component: that axis never crosses a line.
#[inline]
pub fn boundary_dt(rem: f32, comp: f32) -> f32 {
    if comp < 0.0 {
        -rem / comp
    } else if comp > 0.0 {
        (1.0 - rem) / comp
    } else {
        f32::INFINITY
    }
}

/// Perpendicular distance from `point` to the line through `pos` along
/// `line_dir`. With the camera plane as the line this cancels the fisheye
/// bulge a raw ray length would produce.
pub fn perp_distance(pos: Vector2, line_dir: Vector2, point: Vector2) -> f32 {
    let p2 = Vector2::new(pos.x + line_dir.x, pos.y + line_dir.y);
    let num = ((p2.y - pos.y) * point.x - (p2.x - pos.x) * point.y + p2.x * pos.y - p2.y * pos.x)
        .abs();
    num / line_dir.length()
}
