//! Semantic events emitted by the simulation for the presentation layer.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StateKind {
    Intro,
    Maze,
    Victory,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// The character left the ground; plays the jump effect.
    JumpTriggered,
    /// The dog is touching the player; plays the die effect every frame it happens.
    PlayerNearHazard,
    StateChanged { from: StateKind, to: StateKind },
}
