//! Drawing on top of raylib.
//!
//! Re-exports:
//! - `textures`: atlas and font loaded at startup
//! - `sprites`: rectangle sprites for the character and the dog
//! - `scene`: per-state frame drawing

pub mod textures;
pub mod sprites;
pub mod scene;

pub use scene::draw_game;
