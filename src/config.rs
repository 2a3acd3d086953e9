//! Game configuration: layout constants plus an optional RON override file.
//!
//! Every field has a default matching the built-in game, so a config file only
//! needs to name what it changes, e.g. `(window: (title: "Castle"), audio: (channels: 4))`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::maze::DEFAULT_MAZE;
use crate::error::{GameError, Result};

pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;
pub const GROUND_LEVEL: f32 = 500.0;

/// Config file looked up in the working directory when `CASTLE_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "castle.ron";
pub const CONFIG_ENV_VAR: &str = "CASTLE_CONFIG";

/// Drawable area every entity is clamped against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: WINDOW_WIDTH, height: WINDOW_HEIGHT }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub title: String,
    pub target_fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            title: "Castle Game".to_string(),
            target_fps: 60,
        }
    }
}

impl WindowConfig {
    pub fn viewport(&self) -> Viewport {
        Viewport { width: self.width, height: self.height }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub tileset: String,
    pub font: String,
    pub font_size: i32,
    pub music: String,
    pub jump_sound: String,
    pub die_sound: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            tileset: "tileset.png".to_string(),
            font: "fuente.ttf".to_string(),
            font_size: 24,
            music: "fondo.wav".to_string(),
            jump_sound: "salto.wav".to_string(),
            die_sound: "die.wav".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub start_x: f32,
    pub ground_level: f32,
    pub intro_speed: f32,
    pub maze_speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start_x: 350.0,
            ground_level: GROUND_LEVEL,
            intro_speed: 200.0,
            maze_speed: 1800.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DogConfig {
    pub start_x: f32,
    pub speed: f32,
}

impl Default for DogConfig {
    fn default() -> Self {
        Self { start_x: 100.0, speed: 200.0 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Simultaneous sound effects; extra effects are dropped while all are busy.
    pub channels: usize,
    pub music_volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self { channels: 8, music_volume: 1.0 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub assets: AssetPaths,
    pub player: PlayerConfig,
    pub dog: DogConfig,
    pub audio: AudioConfig,
    pub dialog: Vec<String>,
    /// Maze cell codes, row by row: 0 path, 1 wall, 2 start, 3 end.
    pub maze: Vec<Vec<u8>>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            assets: AssetPaths::default(),
            player: PlayerConfig::default(),
            dog: DogConfig::default(),
            audio: AudioConfig::default(),
            dialog: vec![
                "Adventurer, save meee, I'm trapped in the castle.".to_string(),
                "Overcome the challenges to rescue me.".to_string(),
                "I'm counting on you, good luck.".to_string(),
            ],
            maze: DEFAULT_MAZE.iter().map(|row| row.to_vec()).collect(),
        }
    }
}

impl GameConfig {
    pub fn from_ron_str(source: &str, origin: &str) -> Result<Self> {
        ron::from_str(source).map_err(|e| GameError::Config {
            path: origin.to_string(),
            reason: format!("parse error: {}", e),
        })
    }
}

/// Loads `path`, falling back to defaults when the file does not exist.
pub fn load(path: &Path) -> Result<GameConfig> {
    let origin = path.display().to_string();
    if !path.exists() {
        log::info!("no config at {}, using defaults", origin);
        return Ok(GameConfig::default());
    }
    let contents = fs::read_to_string(path).map_err(|e| GameError::Config {
        path: origin.clone(),
        reason: format!("IO error: {}", e),
    })?;
    let config = GameConfig::from_ron_str(&contents, &origin)?;
    log::info!("loaded config from {}", origin);
    Ok(config)
}

/// Resolves the config path from `CASTLE_CONFIG` or the default file name.
pub fn load_default() -> Result<GameConfig> {
    let path = std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load(Path::new(&path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_builtin_layout() {
        let config = GameConfig::default();
        assert_eq!(config.window.viewport(), Viewport::default());
        assert_eq!(config.dialog.len(), 3);
        assert_eq!(config.maze.len(), 13);
        assert!(config.maze.iter().all(|row| row.len() == 25));
        assert_eq!(config.assets.tileset, "tileset.png");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config =
            GameConfig::from_ron_str("(window: (title: \"Castle\"), audio: (channels: 4))", "inline")
                .unwrap();
        assert_eq!(config.window.title, "Castle");
        assert_eq!(config.window.width, WINDOW_WIDTH);
        assert_eq!(config.audio.channels, 4);
        assert_eq!(config.player.maze_speed, 1800.0);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let err = GameConfig::from_ron_str("(window: (width: \"wide\"))", "bad.ron").unwrap_err();
        match err {
            GameError::Config { path, .. } => assert_eq!(path, "bad.ron"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load(Path::new("definitely/not/here/castle.ron")).unwrap();
        assert_eq!(config.player.start_x, 350.0);
    }
}
