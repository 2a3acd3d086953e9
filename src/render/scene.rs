//! Per-state frame drawing: intro, maze, victory.
use raylib::prelude::*;

use crate::config::Viewport;
use crate::core::background::{Background, CLOUD_HEIGHT, CLOUD_WIDTH};
use crate::core::game::{Game, GameState};
use crate::core::maze::{Cell, MazeLevel};
use crate::render::sprites::{draw_character, draw_dog};
use crate::render::textures::Assets;

pub const VICTORY_MESSAGE: &str = "Congratulations, you rescued the princess!";
const TEXT_SPACING: f32 = 1.0;
const DIALOG_MARGIN_X: f32 = 20.0;
const DIALOG_OFFSET_BOTTOM: f32 = 50.0;

fn cell_color(cell: Cell) -> Color {
    match cell {
        Cell::Wall => Color::new(0, 0, 255, 255),
        Cell::Path => Color::new(200, 200, 200, 255),
        Cell::Start => Color::new(0, 255, 0, 255),
        Cell::End => Color::new(255, 0, 0, 255),
    }
}

/// Top-left corner that centers a block of text in the viewport.
pub fn centered_text_origin(view: Viewport, text_size: Vector2) -> Vector2 {
    Vector2::new(
        ((view.width as f32 - text_size.x) / 2.0).trunc(),
        (view.height as f32 / 2.0 - text_size.y / 2.0).trunc(),
    )
}

pub fn draw_game<D: RaylibDraw>(d: &mut D, game: &Game, assets: &Assets) {
    match game.state() {
        GameState::Intro => draw_intro(d, game, assets),
        GameState::Maze(level) => {
            draw_maze(d, level);
            draw_character(d, game.character());
        }
        GameState::Victory => draw_victory(d, game.viewport(), assets),
    }
}

fn draw_background<D: RaylibDraw>(d: &mut D, background: &Background, assets: &Assets) {
    for (dst, tile) in background.tiles() {
        d.draw_texture_rec(&assets.atlas, tile.atlas_source(), Vector2::new(dst.x, dst.y), Color::WHITE);
    }
    for cloud in background.clouds() {
        d.draw_rectangle(cloud.x as i32, cloud.y as i32, CLOUD_WIDTH, CLOUD_HEIGHT, Color::WHITE);
    }
}

fn draw_intro<D: RaylibDraw>(d: &mut D, game: &Game, assets: &Assets) {
    draw_background(d, game.background(), assets);
    draw_character(d, game.character());
    draw_dog(d, game.dog());
    if let Some(line) = game.dialog().current_line() {
        let pos = Vector2::new(DIALOG_MARGIN_X, game.viewport().height as f32 - DIALOG_OFFSET_BOTTOM);
        d.draw_text_ex(&assets.font, line, pos, assets.font_size, TEXT_SPACING, Color::WHITE);
    }
}

fn draw_maze<D: RaylibDraw>(d: &mut D, level: &MazeLevel) {
    for ((x, y, w, h), cell) in level.cells() {
        d.draw_rectangle(x, y, w, h, cell_color(cell));
    }
}

fn draw_victory<D: RaylibDraw>(d: &mut D, view: Viewport, assets: &Assets) {
    let size = assets.font.measure_text(VICTORY_MESSAGE, assets.font_size, TEXT_SPACING);
    let pos = centered_text_origin(view, size);
    d.draw_text_ex(&assets.font, VICTORY_MESSAGE, pos, assets.font_size, TEXT_SPACING, Color::YELLOW);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn victory_text_is_centered() {
        let origin = centered_text_origin(Viewport::default(), Vector2::new(400.0, 24.0));
        assert_eq!((origin.x, origin.y), (200.0, 288.0));
    }

    #[test]
    fn maze_palette() {
        assert_eq!(cell_color(Cell::Wall), Color::new(0, 0, 255, 255));
        assert_eq!(cell_color(Cell::Path), Color::new(200, 200, 200, 255));
        assert_ne!(cell_color(Cell::Start), cell_color(Cell::End));
    }
}
