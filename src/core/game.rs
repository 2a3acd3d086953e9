//! Game state machine: intro scene, maze level, victory screen.
use crate::config::{GameConfig, Viewport};
use crate::core::background::Background;
use crate::core::character::Character;
use crate::core::dialog::DialogSystem;
use crate::core::dog::Dog;
use crate::core::events::{GameEvent, StateKind};
use crate::core::maze::{MazeGrid, MazeLevel};
use crate::error::Result;

/// Input sampled once per frame. Presses are edge-triggered, the rest are held keys.
#[derive(Copy, Clone, Debug, Default)]
pub struct FrameInput {
    pub quit: bool,
    pub jump_pressed: bool,
    pub click_pressed: bool,
    pub escape_pressed: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

pub enum GameState {
    Intro,
    Maze(MazeLevel),
    Victory,
}

impl GameState {
    pub fn kind(&self) -> StateKind {
        match self {
            GameState::Intro => StateKind::Intro,
            GameState::Maze(_) => StateKind::Maze,
            GameState::Victory => StateKind::Victory,
        }
    }
}

pub struct Game {
    state: GameState,
    background: Background,
    character: Character,
    dog: Dog,
    dialog: DialogSystem,
    maze_grid: MazeGrid,
    maze_speed: f32,
    viewport: Viewport,
    running: bool,
}

impl Game {
    /// Builds the intro scene; fails only on an unusable maze layout.
    pub fn new(config: &GameConfig) -> Result<Self> {
        let viewport = config.window.viewport();
        let maze_grid = MazeGrid::from_codes(&config.maze)?;
        maze_grid.check_fits(viewport)?;

        let player = &config.player;
        Ok(Self {
            state: GameState::Intro,
            background: Background::new(viewport),
            character: Character::new(player.start_x, player.ground_level, player.intro_speed, viewport),
            dog: Dog::new(config.dog.start_x, player.ground_level, config.dog.speed, viewport),
            dialog: DialogSystem::new(config.dialog.iter().cloned()),
            maze_grid,
            maze_speed: player.maze_speed,
            viewport,
            running: true,
        })
    }

    pub fn state(&self) -> &GameState { &self.state }
    pub fn background(&self) -> &Background { &self.background }
    pub fn character(&self) -> &Character { &self.character }
    pub fn dog(&self) -> &Dog { &self.dog }
    pub fn dialog(&self) -> &DialogSystem { &self.dialog }
    pub fn viewport(&self) -> Viewport { self.viewport }
    pub fn is_running(&self) -> bool { self.running }

    /// Runs one frame of input handling and simulation for the current state.
    pub fn update(&mut self, input: &FrameInput, dt: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if input.quit {
            log::info!("quit requested");
            self.running = false;
            return events;
        }

        match self.state.kind() {
            StateKind::Intro => self.update_intro(input, dt, &mut events),
            StateKind::Maze => self.update_maze(input, dt, &mut events),
            StateKind::Victory => {
                if input.escape_pressed {
                    log::info!("leaving from victory screen");
                    self.running = false;
                }
            }
        }
        events
    }

    fn update_intro(&mut self, input: &FrameInput, dt: f32, events: &mut Vec<GameEvent>) {
        if input.jump_pressed {
            events.extend(self.character.start_jump());
        }
        if input.right {
            self.character.move_right(dt);
        }
        if input.left {
            self.character.move_left(dt);
        }
        if input.click_pressed {
            self.dialog.advance();
            if self.dialog.is_finished() {
                let level = MazeLevel::new(
                    self.maze_grid.clone(),
                    &mut self.character,
                    self.viewport,
                    self.maze_speed,
                );
                self.set_state(GameState::Maze(level), events);
                return;
            }
        }

        self.character.update(dt);
        let player = self.character.pos;
        events.extend(self.dog.update(dt, player.x, player.y));
        self.background.update(dt);
    }

    fn update_maze(&mut self, input: &FrameInput, dt: f32, events: &mut Vec<GameEvent>) {
        let GameState::Maze(level) = &mut self.state else {
            return;
        };
        if input.up {
            self.character.move_up(dt);
        }
        if input.down {
            self.character.move_down(dt);
        }
        if input.right {
            self.character.move_right(dt);
        }
        if input.left {
            self.character.move_left(dt);
        }
        level.update(&mut self.character);
        if level.is_level_completed() {
            self.set_state(GameState::Victory, events);
        }
    }

    fn set_state(&mut self, next: GameState, events: &mut Vec<GameEvent>) {
        let from = self.state.kind();
        let to = next.kind();
        self.state = next;
        log::info!("state {:?} -> {:?}", from, to);
        events.push(GameEvent::StateChanged { from, to });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::character::{CHARACTER_HEIGHT, CHARACTER_WIDTH};

    const DT: f32 = 1.0 / 60.0;

    fn game() -> Game {
        Game::new(&GameConfig::default()).unwrap()
    }

    fn click() -> FrameInput {
        FrameInput { click_pressed: true, ..Default::default() }
    }

    fn enter_maze(game: &mut Game) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for _ in 0..3 {
            events = game.update(&click(), DT);
        }
        events
    }

    #[test]
    fn starts_in_intro() {
        let g = game();
        assert_eq!(g.state().kind(), StateKind::Intro);
        assert!(g.is_running());
        assert_eq!(g.dialog().index(), 0);
    }

    #[test]
    fn jump_in_intro_emits_event() {
        let mut g = game();
        let events = g.update(&FrameInput { jump_pressed: true, ..Default::default() }, DT);
        assert!(events.contains(&GameEvent::JumpTriggered));
        assert!(g.character().is_jumping());
        assert!(g.character().pos.y < 500.0);
    }

    #[test]
    fn held_keys_move_horizontally_in_intro() {
        let mut g = game();
        g.update(&FrameInput { right: true, ..Default::default() }, 0.5);
        assert_eq!(g.character().pos.x, 450.0);
        g.update(&FrameInput { up: true, ..Default::default() }, 0.5);
        assert_eq!(g.character().pos.y, 500.0);
    }

    #[test]
    fn dog_contact_is_reported() {
        let mut config = GameConfig::default();
        config.dog.start_x = 350.0;
        let mut g = Game::new(&config).unwrap();
        let events = g.update(&FrameInput::default(), 0.0);
        assert!(events.contains(&GameEvent::PlayerNearHazard));
    }

    #[test]
    fn dialog_clicks_before_the_end_emit_nothing() {
        let mut g = game();
        assert!(g.update(&click(), 0.0).is_empty());
        assert!(g.update(&click(), 0.0).is_empty());
        assert_eq!(g.dialog().index(), 2);
    }

    #[test]
    fn finishing_dialog_enters_maze() {
        let mut g = game();
        g.update(&click(), DT);
        g.update(&click(), DT);
        assert_eq!(g.state().kind(), StateKind::Intro);
        let events = g.update(&click(), DT);
        assert!(events.contains(&GameEvent::StateChanged {
            from: StateKind::Intro,
            to: StateKind::Maze
        }));
        assert!(!g.character().can_jump());
        assert_eq!(g.character().center(), (48, 69));
    }

    #[test]
    fn jumping_is_ignored_in_maze() {
        let mut g = game();
        enter_maze(&mut g);
        let events = g.update(&FrameInput { jump_pressed: true, ..Default::default() }, DT);
        assert!(events.is_empty());
        assert_eq!(g.state().kind(), StateKind::Maze);
    }

    #[test]
    fn walking_into_a_wall_in_maze_resets() {
        let mut g = game();
        enter_maze(&mut g);
        let start = g.character().pos;
        // Cell (2, 1) below start is open, the wall is at (1, 0) to the left.
        g.update(&FrameInput { left: true, ..Default::default() }, 0.02);
        assert_eq!(g.character().pos, start);
        g.update(&FrameInput { down: true, ..Default::default() }, 0.02);
        assert!(g.character().pos.y > start.y);
    }

    #[test]
    fn reaching_the_exit_shows_victory_then_escape_quits() {
        let mut g = game();
        enter_maze(&mut g);
        if let GameState::Maze(level) = &g.state {
            let (cx, cy) = level.cell_center(1, 23);
            g.character.move_to(
                (cx - CHARACTER_WIDTH / 2) as f32,
                (cy - CHARACTER_HEIGHT / 2) as f32,
            );
        }
        let events = g.update(&FrameInput::default(), DT);
        assert!(events.contains(&GameEvent::StateChanged {
            from: StateKind::Maze,
            to: StateKind::Victory
        }));
        assert_eq!(g.state().kind(), StateKind::Victory);

        g.update(&click(), DT);
        assert!(g.is_running());
        g.update(&FrameInput { escape_pressed: true, ..Default::default() }, DT);
        assert!(!g.is_running());
    }

    #[test]
    fn escape_does_nothing_before_victory() {
        let mut g = game();
        g.update(&FrameInput { escape_pressed: true, ..Default::default() }, DT);
        assert!(g.is_running());
    }

    #[test]
    fn quit_stops_from_any_state() {
        let quit = FrameInput { quit: true, ..Default::default() };
        let mut g = game();
        g.update(&quit, DT);
        assert!(!g.is_running());

        let mut g = game();
        enter_maze(&mut g);
        g.update(&quit, DT);
        assert!(!g.is_running());
    }

    #[test]
    fn invalid_maze_config_fails_startup() {
        let mut config = GameConfig::default();
        config.maze = vec![vec![0, 1, 0]];
        assert!(Game::new(&config).is_err());
    }
}
