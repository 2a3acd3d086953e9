//! Maze layout and the maze level: wall touches send the player back to start,
//! reaching the end cell completes the level.
use crate::config::Viewport;
use crate::core::character::{CHARACTER_HEIGHT, CHARACTER_WIDTH, Character};
use crate::error::{GameError, Result};

pub const DEFAULT_MAZE: [[u8; 25]; 13] = [
    [1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1],
    [1,2,0,0,1,0,0,0,1,0,0,0,0,0,1,0,0,0,1,0,0,0,0,3,1],
    [1,0,1,0,1,0,1,0,1,0,1,1,1,0,1,0,1,0,1,0,1,1,1,0,1],
    [1,0,1,0,0,0,1,0,0,0,0,0,1,0,0,0,1,0,1,0,0,0,1,0,1],
    [1,0,1,1,1,1,1,1,1,1,1,0,1,1,1,1,1,0,1,1,1,0,1,0,1],
    [1,0,0,0,0,0,0,0,0,0,1,0,0,0,0,0,1,0,0,0,1,0,1,0,1],
    [1,1,1,1,1,1,1,1,1,0,1,1,1,1,1,0,1,1,1,0,1,0,1,0,1],
    [1,0,0,0,0,0,0,0,1,0,0,0,0,0,1,0,0,0,1,0,1,0,1,0,1],
    [1,0,1,1,1,1,1,0,1,1,1,1,1,0,1,1,1,0,1,1,1,0,1,0,1],
    [1,0,1,0,0,0,1,0,0,0,0,0,1,0,0,0,1,0,0,0,0,0,1,0,1],
    [1,0,1,0,1,0,1,1,1,1,1,0,1,1,1,0,1,1,1,1,1,0,1,0,1],
    [1,0,0,0,1,0,0,0,1,0,0,0,1,0,0,0,1,0,0,0,1,0,0,0,1],
    [1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1],
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Path,
    Wall,
    Start,
    End,
}

impl TryFrom<u8> for Cell {
    type Error = u8;

    fn try_from(code: u8) -> std::result::Result<Self, u8> {
        match code {
            0 => Ok(Cell::Path),
            1 => Ok(Cell::Wall),
            2 => Ok(Cell::Start),
            3 => Ok(Cell::End),
            other => Err(other),
        }
    }
}

/// Validated maze layout; positions are `(row, col)`.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    cells: Vec<Vec<Cell>>,
    start: (usize, usize),
    end: (usize, usize),
}

impl MazeGrid {
    pub fn from_codes<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if width == 0 {
            return Err(GameError::InvalidMaze("maze has no cells".to_string()));
        }

        let mut cells = Vec::with_capacity(rows.len());
        let mut start = None;
        let mut end = None;
        for (row, codes) in rows.iter().enumerate() {
            let codes = codes.as_ref();
            if codes.len() != width {
                return Err(GameError::InvalidMaze(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    codes.len(),
                    width
                )));
            }
            let mut line = Vec::with_capacity(width);
            for (col, &code) in codes.iter().enumerate() {
                let cell = Cell::try_from(code).map_err(|c| {
                    GameError::InvalidMaze(format!("unknown cell code {} at ({}, {})", c, row, col))
                })?;
                let slot = match cell {
                    Cell::Start => Some((&mut start, "start")),
                    Cell::End => Some((&mut end, "end")),
                    _ => None,
                };
                if let Some((slot, name)) = slot {
                    if slot.is_some() {
                        return Err(GameError::InvalidMaze(format!("more than one {} cell", name)));
                    }
                    *slot = Some((row, col));
                }
                line.push(cell);
            }
            cells.push(line);
        }

        let start = start.ok_or_else(|| GameError::InvalidMaze("no start cell".to_string()))?;
        let end = end.ok_or_else(|| GameError::InvalidMaze("no end cell".to_string()))?;
        Ok(Self { cells, start, end })
    }

    pub fn rows(&self) -> usize { self.cells.len() }
    pub fn cols(&self) -> usize { self.cells[0].len() }
    pub fn start(&self) -> (usize, usize) { self.start }
    pub fn end(&self) -> (usize, usize) { self.end }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Rejects grids with more cells than pixels along either axis.
    pub fn check_fits(&self, view: Viewport) -> Result<()> {
        if self.cols() as i32 > view.width || self.rows() as i32 > view.height {
            return Err(GameError::InvalidMaze(format!(
                "{}x{} grid does not fit a {}x{} window",
                self.cols(),
                self.rows(),
                view.width,
                view.height
            )));
        }
        if view.width % self.cols() as i32 != 0 || view.height % self.rows() as i32 != 0 {
            log::warn!(
                "{}x{} window is not a multiple of the {}x{} maze; tiles will not cover it exactly",
                view.width,
                view.height,
                self.cols(),
                self.rows()
            );
        }
        Ok(())
    }
}

pub struct MazeLevel {
    grid: MazeGrid,
    tile_width: i32,
    tile_height: i32,
    completed: bool,
}

impl MazeLevel {
    /// Locks the character into maze mode and puts it on the start cell.
    pub fn new(grid: MazeGrid, character: &mut Character, view: Viewport, speed: f32) -> Self {
        let tile_width = view.width / grid.cols() as i32;
        let tile_height = view.height / grid.rows() as i32;
        let level = Self { grid, tile_width, tile_height, completed: false };

        character.disable_jump();
        character.set_movement_speed(speed);
        level.reset_to_start(character);
        level
    }

    pub fn grid(&self) -> &MazeGrid { &self.grid }
    pub fn tile_size(&self) -> (i32, i32) { (self.tile_width, self.tile_height) }
    pub fn is_level_completed(&self) -> bool { self.completed }

    pub fn cell_center(&self, row: usize, col: usize) -> (i32, i32) {
        (
            col as i32 * self.tile_width + self.tile_width / 2,
            row as i32 * self.tile_height + self.tile_height / 2,
        )
    }

    /// Grid cell under a pixel, clamped to the grid.
    pub fn cell_at_point(&self, x: i32, y: i32) -> (usize, usize) {
        let col = (x / self.tile_width).clamp(0, self.grid.cols() as i32 - 1);
        let row = (y / self.tile_height).clamp(0, self.grid.rows() as i32 - 1);
        (row as usize, col as usize)
    }

    /// Moves the character so its bounding box is centered on the given cell.
    pub fn place_on_cell(&self, character: &mut Character, row: usize, col: usize) {
        let (cx, cy) = self.cell_center(row, col);
        character.move_to(
            (cx - CHARACTER_WIDTH / 2) as f32,
            (cy - CHARACTER_HEIGHT / 2) as f32,
        );
    }

    fn reset_to_start(&self, character: &mut Character) {
        let (row, col) = self.grid.start();
        self.place_on_cell(character, row, col);
    }

    /// Screen rectangle and kind of every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = ((i32, i32, i32, i32), Cell)> + '_ {
        let (tw, th) = (self.tile_width, self.tile_height);
        self.grid.cells.iter().enumerate().flat_map(move |(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, &cell)| ((col as i32 * tw, row as i32 * th, tw, th), cell))
        })
    }

    pub fn update(&mut self, character: &mut Character) {
        if self.completed {
            return;
        }
        let (x, y) = character.center();
        let (row, col) = self.cell_at_point(x, y);
        match self.grid.cell(row, col) {
            Cell::Wall => {
                log::debug!("wall hit at ({}, {}), back to start", row, col);
                self.reset_to_start(character);
            }
            Cell::End => {
                log::info!("maze completed");
                self.completed = true;
            }
            Cell::Path | Cell::Start => {}
        }
    }
}
