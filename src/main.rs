// main.rs
#![allow(dead_code)]

mod audio_manager;
mod config;
mod core;
mod error;
mod process_events;
mod render;

use raylib::prelude::*;
use audio_manager::AudioManager;
use crate::core::game::Game;
use error::Result;
use process_events::process_events;
use render::textures::Assets;

fn run() -> Result<()> {
    let config = config::load_default()?;
    // Un laberinto inválido se detecta antes de abrir la ventana
    let mut game = Game::new(&config)?;

    let (mut window, raylib_thread) = raylib::init()
        .size(config.window.width, config.window.height)
        .title(&config.window.title)
        .build();
    // ESC solo cierra desde la pantalla de victoria
    window.set_exit_key(None);
    window.set_target_fps(config.window.target_fps);

    let assets = Assets::load(&mut window, &raylib_thread, &config.assets)?;
    let mut audio = AudioManager::new(&config.assets, &config.audio)?;
    audio.play_music_loop()?;

    log::info!("starting in {:?}", game.state().kind());
    while game.is_running() {
        let dt = window.get_frame_time();
        let input = process_events(&window);
        let events = game.update(&input, dt);
        audio.handle_events(&events);

        let mut d = window.begin_drawing(&raylib_thread);
        d.clear_background(Color::BLACK);
        render::draw_game(&mut d, &game, &assets);
    }
    log::info!("bye");
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        log::error!("{}", err);
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
