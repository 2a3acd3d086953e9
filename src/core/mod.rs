//! Core game types and logic, free of window and audio handles.
//!
//! Re-exports:
//! - `character`: player kinematics (walk, jump, clamp)
//! - `dog`: intro enemy patrol
//! - `dialog`: intro dialog sequencer
//! - `background`: intro tile map and clouds
//! - `maze`: maze layout, collisions and win check
//! - `events`: events handed to audio
//! - `game`: state machine driving all of the above

pub mod character;
pub mod dog;
pub mod dialog;
pub mod background;
pub mod maze;
pub mod events;
pub mod game;
