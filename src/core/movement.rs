//! Input handling and movement with per-axis collision.

use crate::core::map::Map;
use crate::core::player::Player;
use crate::{ROT_SPEED, SPEED};

/// Snapshot of the held movement keys for one frame.
#[derive(Default, Clone, Copy)]
pub struct HeldKeys {
    pub turn_left: bool,
    pub turn_right: bool,
    pub forward: bool,
    pub backward: bool,
}

/// Apply one frame of rotation and translation. At most one rotation key
/// and one translation key take effect (left before right, forward before
/// backward). Each translation axis is collision-checked on its own, so
/// grazing a wall on one axis still lets the other axis slide.
pub fn update_player(player: &mut Player, map: &Map, keys: &HeldKeys, dt: f32) {
    let tau = 2.0 * std::f32::consts::PI;
    if keys.turn_left {
        player.rot = (player.rot - ROT_SPEED * dt).rem_euclid(tau);
    } else if keys.turn_right {
        player.rot = (player.rot + ROT_SPEED * dt).rem_euclid(tau);
    }

    let sign = if keys.forward {
        1.0
    } else if keys.backward {
        -1.0
    } else {
        return;
    };

    let dir = player.dir();
    let step_x = dir.x * SPEED * dt * sign;
    let step_y = dir.y * SPEED * dt * sign;

    let nx = player.pos.x + step_x;
    if map.is_open(nx.floor() as isize, player.pos.y.floor() as isize) {
        player.pos.x = nx;
    }
    let ny = player.pos.y + step_y;
    if map.is_open(player.pos.x.floor() as isize, ny.floor() as isize) {
        player.pos.y = ny;
    }
}
