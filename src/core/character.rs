use raylib::prelude::*;

use crate::config::Viewport;
use crate::core::events::GameEvent;

pub const CHARACTER_WIDTH: i32 = 32;
pub const CHARACTER_HEIGHT: i32 = 56;

const GRAVITY: f32 = 2000.0;
const JUMP_VELOCITY: f32 = -900.0;

pub struct Character {
    pub pos: Vector2,
    ground_y: f32,   // altura a la que aterriza tras un salto
    velocity: f32,   // velocidad vertical
    jumping: bool,
    can_jump: bool,  // el laberinto lo apaga para siempre
    speed: f32,
    bounds: Viewport,
}

impl Character {
    pub fn new(x: f32, y: f32, speed: f32, bounds: Viewport) -> Self {
        Self {
            pos: Vector2::new(x, y),
            ground_y: y,
            velocity: 0.0,
            jumping: false,
            can_jump: true,
            speed,
            bounds,
        }
    }

    pub fn start_jump(&mut self) -> Option<GameEvent> {
        if !self.can_jump || self.jumping {
            return None;
        }
        self.jumping = true;
        self.velocity = JUMP_VELOCITY;
        Some(GameEvent::JumpTriggered)
    }

    pub fn disable_jump(&mut self) {
        self.can_jump = false;
    }

    #[inline]
    fn max_x(&self) -> f32 { (self.bounds.width - CHARACTER_WIDTH).max(0) as f32 }
    #[inline]
    fn max_y(&self) -> f32 { (self.bounds.height - CHARACTER_HEIGHT).max(0) as f32 }

    pub fn move_left(&mut self, dt: f32) {
        self.pos.x = (self.pos.x - self.speed * dt).clamp(0.0, self.max_x());
    }

    pub fn move_right(&mut self, dt: f32) {
        self.pos.x = (self.pos.x + self.speed * dt).clamp(0.0, self.max_x());
    }

    pub fn move_up(&mut self, dt: f32) {
        self.pos.y = (self.pos.y - self.speed * dt).clamp(0.0, self.max_y());
    }

    pub fn move_down(&mut self, dt: f32) {
        self.pos.y = (self.pos.y + self.speed * dt).clamp(0.0, self.max_y());
    }

    /// Teleports the top-left corner, ignoring the window clamp.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.pos = Vector2::new(x, y);
    }

    pub fn set_movement_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn update(&mut self, dt: f32) {
        if !(self.can_jump && self.jumping) {
            return;
        }
        self.velocity += GRAVITY * dt;
        self.pos.y += self.velocity * dt;
        if self.pos.y >= self.ground_y {
            self.pos.y = self.ground_y;
            self.jumping = false;
            self.velocity = 0.0;
        }
    }

    /// Bounding box snapped to whole pixels.
    pub fn rect(&self) -> Rectangle {
        Rectangle::new(
            self.pos.x.trunc(),
            self.pos.y.trunc(),
            CHARACTER_WIDTH as f32,
            CHARACTER_HEIGHT as f32,
        )
    }

    pub fn center(&self) -> (i32, i32) {
        let r = self.rect();
        (r.x as i32 + CHARACTER_WIDTH / 2, r.y as i32 + CHARACTER_HEIGHT / 2)
    }

    pub fn is_jumping(&self) -> bool { self.jumping }
    pub fn can_jump(&self) -> bool { self.can_jump }
    pub fn velocity(&self) -> f32 { self.velocity }
    pub fn speed(&self) -> f32 { self.speed }
}
