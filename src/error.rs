//! Startup error type. Every variant is fatal; per-frame logic never fails.

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("could not open audio output: {0}")]
    AudioInit(String),

    #[error("could not load asset '{path}': {reason}")]
    Asset { path: String, reason: String },

    #[error("could not read config '{path}': {reason}")]
    Config { path: String, reason: String },

    #[error("invalid maze layout: {0}")]
    InvalidMaze(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
