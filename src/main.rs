//! Frame driver: window, input polling, render passes, texture upload.

use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use log::info;
use raylib::prelude::*;

use mazecaster::core::map::Map;
use mazecaster::core::maze;
use mazecaster::core::movement::{HeldKeys, update_player};
use mazecaster::core::player::Player;
use mazecaster::render::framebuffer::Framebuffer;
use mazecaster::render::sprite::{Sprite, render_sprite};
use mazecaster::render::surfaces::render_surfaces;
use mazecaster::render::walls::render_walls;
use mazecaster::{SCREEN_HEIGHT, SCREEN_WIDTH};

#[derive(Parser, Debug)]
#[command(name = "mazecaster")]
#[command(about = "First-person raycaster over a generated maze")]
struct Args {
    /// Maze seed; defaults to the current UNIX time
    #[arg(short, long)]
    seed: Option<u64>,

    /// Logical maze width in cells (1-64)
    #[arg(long, default_value_t = 8, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=64))]
    maze_width: usize,

    /// Logical maze height in cells (1-64)
    #[arg(long, default_value_t = 8, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=64))]
    maze_height: usize,
}

/// The far-corner logical cell; odd/odd grid cells are always open.
fn goal_sprite(map: &Map) -> Sprite {
    Sprite {
        pos: Vector2::new(map.width() as f32 - 1.5, map.height() as f32 - 1.5),
        width: 160.0,
        height: 160.0,
        anchor: 0.6,
        color: Color::GOLD,
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });
    info!(
        "generating {}x{} maze (seed {seed})",
        args.maze_width, args.maze_height
    );
    let map = maze::generate(args.maze_width, args.maze_height, seed);
    let sprite = goal_sprite(&map);

    // Center of the first carved cell.
    let mut player = Player::new(1.5, 1.5, 0.0);

    let (mut window, raylib_thread) = raylib::init()
        .size(SCREEN_WIDTH as i32, SCREEN_HEIGHT as i32)
        .title("mazecaster")
        .build();
    window.set_target_fps(60);

    let mut framebuffer = Framebuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    let image = Image::gen_image_color(SCREEN_WIDTH as i32, SCREEN_HEIGHT as i32, Color::BLACK);
    let mut screen = window
        .load_texture_from_image(&raylib_thread, &image)
        .expect("screen texture");

    while !window.window_should_close() {
        let keys = HeldKeys {
            turn_left: window.is_key_down(KeyboardKey::KEY_A),
            turn_right: window.is_key_down(KeyboardKey::KEY_D),
            forward: window.is_key_down(KeyboardKey::KEY_W),
            backward: window.is_key_down(KeyboardKey::KEY_S),
        };
        let dt = window.get_frame_time();
        update_player(&mut player, &map, &keys, dt);

        render_surfaces(&mut framebuffer, &player);
        render_walls(&mut framebuffer, &map, &player);
        render_sprite(&mut framebuffer, &player, &sprite);

        framebuffer.upload_to_texture(&mut screen);

        let fps_now = window.get_fps();
        let mut d = window.begin_drawing(&raylib_thread);
        d.clear_background(Color::BLACK);
        d.draw_texture(&screen, 0, 0, Color::WHITE);
        d.draw_text(&format!("FPS: {fps_now}"), 10, 10, 20, Color::WHITE);
    }
}
