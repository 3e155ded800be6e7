use std::time::Duration;
use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use rand::seq::SliceRandom;
use raylib::prelude::*;

mod config;
mod constants;
mod controller;
mod error;
mod gallery;
mod indicator;
mod input;
mod slide;
mod stage;
mod state;
mod texture_loader;
mod timer;

use crate::config::Config;
use crate::constants::*;
use crate::controller::SlideshowController;
use crate::gallery::Gallery;
use crate::input::{navigation, Navigation, Pressed};
use crate::slide::Slide;
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};

const JUMP_KEYS: [KeyboardKey; 9] = [
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
];

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = Config::parse();

    let mut image_paths = load_sorted_image_paths(&config.image_directory)
        .with_context(|| format!("Error loading images from '{}'", config.image_directory.display()))?;
    if config.shuffle {
        image_paths.shuffle(&mut rand::rng());
    }
    info!("Found {} images in {}", image_paths.len(), config.image_directory.display());

    let (mut rl, thread) = raylib::init()
        .size(config.width, config.height)
        .title("Slideshow")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    rl.set_exit_key(Some(KeyboardKey::KEY_ESCAPE));

    // --- Load Slides ---
    let mut slides = Vec::new();
    for path in image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, &path) {
            Ok(texture) => slides.push(Slide::new(texture)),
            Err(e) => warn!("Skipping image: {}", e),
        }
    }

    let mut show = SlideshowController::new(Gallery::new(slides), config.indicator_policy())
        .context("No slides were loaded")?;
    info!("Showing {} slides", show.len());
    show.initialize();

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .context("Failed to create render texture")?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        // Manual navigation first, then the timer sees the frame's elapsed time
        let pressed = Pressed {
            next: rl.is_key_pressed(KeyboardKey::KEY_RIGHT) || rl.is_key_pressed(KeyboardKey::KEY_SPACE),
            previous: rl.is_key_pressed(KeyboardKey::KEY_LEFT),
            digit: JUMP_KEYS.iter().position(|key| rl.is_key_pressed(*key)).map(|i| i + 1),
        };
        for action in navigation(pressed, show.len()) {
            action.apply(&mut show);
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let mouse = rl.get_mouse_position();
            let (sw, sh) = (rl.get_screen_width() as f32, rl.get_screen_height() as f32);
            if let Some(n) = show.stage().dot_at(mouse, sw, sh) {
                Navigation::Jump(n as i64).apply(&mut show);
            }
        }

        show.tick(Duration::from_secs_f32(rl.get_frame_time().max(0.0)));

        // --- Render into the fixed size framebuffer, then scale to the window ---
        show.stage().render(&mut rl, &thread, &mut framebuffer);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    info!(
        "Window closed on slide {} (timer {:?}, armed {} times)",
        show.current(),
        show.timer_state(),
        show.rearm_count()
    );
    Ok(())
}
