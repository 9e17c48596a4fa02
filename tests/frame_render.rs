//! Headless full-frame rendering against a hand-built map.

use mazecaster::core::map::Map;
use mazecaster::core::player::Player;
use mazecaster::render::framebuffer::Framebuffer;
use mazecaster::render::sprite::{Sprite, render_sprite};
use mazecaster::render::surfaces::render_surfaces;
use mazecaster::render::walls::render_walls;
use mazecaster::{SCREEN_HEIGHT, SCREEN_WIDTH};
use raylib::prelude::*;

// Corridor open at (1,1)..(3,1), wall face at x = 4.
fn corridor() -> Map {
    #[rustfmt::skip]
    let cells = vec![
        1, 1, 1, 1, 1, 1,
        1, 0, 0, 0, 1, 1,
        1, 1, 1, 1, 1, 1,
    ];
    Map::new(6, 3, cells)
}

fn render_frame(sprite: Option<&Sprite>) -> Framebuffer {
    let map = corridor();
    let player = Player::new(1.5, 1.5, 0.0);
    let mut fb = Framebuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    render_surfaces(&mut fb, &player);
    render_walls(&mut fb, &map, &player);
    if let Some(s) = sprite {
        render_sprite(&mut fb, &player, s);
    }
    fb
}

fn is_checker_gray(c: Color) -> bool {
    c.r == c.g && c.g == c.b && (c.r == 68 || c.r == 102)
}

#[test]
fn walls_surround_the_horizon_and_grays_fill_the_rest() {
    let fb = render_frame(None);

    // Wall face 2.5 cells ahead: slab of 450/2.5 = 180 rows around the
    // horizon, reddish (variant 1, hit on an x crossing: no darkening).
    let center = fb.get_pixel(SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2);
    assert!(center.r > center.g && center.r > center.b);

    let above_slab = fb.get_pixel(SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2 - 120);
    let below_slab = fb.get_pixel(SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2 + 120);
    assert!(is_checker_gray(above_slab));
    assert!(is_checker_gray(below_slab));

    assert!(is_checker_gray(fb.get_pixel(0, 0)));
    assert!(is_checker_gray(fb.get_pixel(0, SCREEN_HEIGHT - 1)));
}

#[test]
fn sprite_draws_over_walls_without_depth_test() {
    // The sprite sits behind the wall face yet still lands on screen;
    // the pipeline deliberately has no per-pixel depth comparison.
    let sprite = Sprite {
        pos: Vector2::new(5.5, 1.5),
        width: 160.0,
        height: 160.0,
        anchor: 0.0,
        color: Color::GOLD,
    };
    let fb = render_frame(Some(&sprite));
    let center = fb.get_pixel(SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2);
    assert_eq!(center, Color::GOLD);
}
