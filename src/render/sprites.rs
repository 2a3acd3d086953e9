//! Block sprites for the intro cast.
//!
//! Exposes:
//! - `draw_character`: the crowned hero, anchored at its bounding box
//! - `draw_dog`: the patrolling dog
use raylib::prelude::*;

use crate::core::character::Character;
use crate::core::dog::Dog;

const CROWN: Color = Color::new(255, 223, 0, 255);
const SKIN: Color = Color::new(255, 182, 193, 255);
const DOG_DARK: Color = Color::new(139, 69, 19, 255);
const DOG_LIGHT: Color = Color::new(160, 82, 45, 255);

/// (dx, dy, w, h, color) relative to the sprite origin.
type Part = (i32, i32, i32, i32, Color);

const CHARACTER_PARTS: [Part; 7] = [
    (8, -8, 16, 8, CROWN),
    (8, 0, 16, 16, SKIN),
    (8, 16, 16, 24, Color::BLUE),
    (0, 16, 8, 16, Color::RED),      // brazos
    (24, 16, 8, 16, Color::RED),
    (8, 40, 8, 16, Color::BLACK),    // piernas
    (16, 40, 8, 16, Color::BLACK),
];

const DOG_PARTS: [Part; 5] = [
    (0, 0, 16, 16, DOG_DARK),
    (-8, 16, 32, 16, DOG_LIGHT),
    (-6, 32, 8, 8, DOG_DARK),
    (14, 32, 8, 8, DOG_DARK),
    (-10, 20, 8, 4, DOG_LIGHT),     // cola
];

fn draw_parts<D: RaylibDraw>(d: &mut D, x: i32, y: i32, parts: &[Part]) {
    for &(dx, dy, w, h, color) in parts {
        d.draw_rectangle(x + dx, y + dy, w, h, color);
    }
}

pub fn draw_character<D: RaylibDraw>(d: &mut D, character: &Character) {
    let r = character.rect();
    draw_parts(d, r.x as i32, r.y as i32, &CHARACTER_PARTS);
}

pub fn draw_dog<D: RaylibDraw>(d: &mut D, dog: &Dog) {
    draw_parts(d, dog.x as i32, dog.y as i32, &DOG_PARTS);
}
