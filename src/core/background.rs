//! Intro backdrop: a fixed tile map over an atlas, plus drifting clouds.
use raylib::prelude::*;

use crate::config::Viewport;

pub const BG_ROWS: usize = 19;
pub const BG_COLS: usize = 25;
pub const TILE_SIZE: i32 = 32;
/// Tiles per row in the atlas image.
pub const ATLAS_COLUMNS: i32 = 4;

const GROUND_ROWS: std::ops::Range<usize> = 17..19;
const CASTLE_ROWS: std::ops::Range<usize> = 15..17;
const CASTLE_COLS: std::ops::Range<usize> = 5..20;

pub const CLOUD_WIDTH: i32 = 100;
pub const CLOUD_HEIGHT: i32 = 50;
const CLOUD_RESPAWN_X: f32 = -100.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tile {
    Sky,
    Ground,
    Castle,
}

impl Tile {
    pub fn code(self) -> i32 {
        match self {
            Tile::Sky => 0,
            Tile::Ground => 1,
            Tile::Castle => 2,
        }
    }

    /// Source rectangle of this tile inside the atlas.
    pub fn atlas_source(self) -> Rectangle {
        let code = self.code();
        Rectangle::new(
            ((code % ATLAS_COLUMNS) * TILE_SIZE) as f32,
            ((code / ATLAS_COLUMNS) * TILE_SIZE) as f32,
            TILE_SIZE as f32,
            TILE_SIZE as f32,
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
}

pub struct Background {
    tiles: [[Tile; BG_COLS]; BG_ROWS],
    clouds: Vec<Cloud>,
    bounds: Viewport,
}

impl Background {
    pub fn new(bounds: Viewport) -> Self {
        let mut tiles = [[Tile::Sky; BG_COLS]; BG_ROWS];
        for row in GROUND_ROWS {
            tiles[row] = [Tile::Ground; BG_COLS];
        }
        for row in CASTLE_ROWS {
            for col in CASTLE_COLS {
                tiles[row][col] = Tile::Castle;
            }
        }
        let clouds = vec![
            Cloud { x: 50.0, y: 100.0, speed: 30.0 },
            Cloud { x: 300.0, y: 150.0, speed: 20.0 },
            Cloud { x: 600.0, y: 120.0, speed: 25.0 },
        ];
        Self { tiles, clouds, bounds }
    }

    pub fn tile(&self, row: usize, col: usize) -> Tile {
        self.tiles[row][col]
    }

    /// Every tile with its destination rectangle on screen.
    pub fn tiles(&self) -> impl Iterator<Item = (Rectangle, Tile)> + '_ {
        self.tiles.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter().enumerate().map(move |(col, &tile)| {
                let dst = Rectangle::new(
                    (col as i32 * TILE_SIZE) as f32,
                    (row as i32 * TILE_SIZE) as f32,
                    TILE_SIZE as f32,
                    TILE_SIZE as f32,
                );
                (dst, tile)
            })
        })
    }

    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    pub fn update(&mut self, dt: f32) {
        let limit = self.bounds.width as f32;
        for cloud in &mut self.clouds {
            cloud.x += cloud.speed * dt;
            if cloud.x > limit {
                cloud.x = CLOUD_RESPAWN_X;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_are_laid_out() {
        let bg = Background::new(Viewport::default());
        assert_eq!(bg.tile(0, 0), Tile::Sky);
        assert_eq!(bg.tile(14, 10), Tile::Sky);
        assert_eq!(bg.tile(15, 4), Tile::Sky);
        assert_eq!(bg.tile(15, 5), Tile::Castle);
        assert_eq!(bg.tile(16, 19), Tile::Castle);
        assert_eq!(bg.tile(16, 20), Tile::Sky);
        assert_eq!(bg.tile(17, 0), Tile::Ground);
        assert_eq!(bg.tile(18, 24), Tile::Ground);
        assert_eq!(bg.tiles().count(), BG_ROWS * BG_COLS);
    }

    #[test]
    fn atlas_source_follows_tile_code() {
        let src = Tile::Castle.atlas_source();
        assert_eq!((src.x, src.y, src.width, src.height), (64.0, 0.0, 32.0, 32.0));
        assert_eq!(Tile::Sky.atlas_source().x, 0.0);
    }

    #[test]
    fn tiles_are_placed_on_a_32px_grid() {
        let bg = Background::new(Viewport::default());
        let (dst, tile) = bg.tiles().nth(17 * BG_COLS + 3).unwrap();
        assert_eq!(tile, Tile::Ground);
        assert_eq!((dst.x, dst.y), (96.0, 544.0));
    }

    #[test]
    fn clouds_drift_and_wrap() {
        let mut bg = Background::new(Viewport::default());
        bg.update(1.0);
        assert_eq!(bg.clouds()[0].x, 80.0);

        bg.clouds[1].x = 801.0;
        bg.update(0.0);
        let wrapped = bg.clouds()[1];
        assert_eq!(wrapped, Cloud { x: -100.0, y: 150.0, speed: 20.0 });

        bg.update(1.0);
        assert_eq!(bg.clouds()[1].x, -80.0);
    }
}
