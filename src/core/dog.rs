//! Intro enemy: walks back and forth along the ground.
use crate::config::Viewport;
use crate::core::events::GameEvent;

pub const DOG_WIDTH: f32 = 32.0;
const TOUCH_HEIGHT: f32 = 32.0;

pub struct Dog {
    pub x: f32,
    pub y: f32,
    moving_right: bool,
    speed: f32,
    bounds: Viewport,
}

impl Dog {
    pub fn new(x: f32, y: f32, speed: f32, bounds: Viewport) -> Self {
        Self { x, y, moving_right: true, speed, bounds }
    }

    pub fn is_moving_right(&self) -> bool { self.moving_right }

    /// Advances the patrol and reports contact with the player on every frame it lasts.
    pub fn update(&mut self, dt: f32, player_x: f32, player_y: f32) -> Option<GameEvent> {
        let max_x = self.bounds.width as f32 - DOG_WIDTH;
        if self.moving_right {
            self.x += self.speed * dt;
            if self.x > max_x {
                self.x = max_x;
                self.moving_right = false;
            }
        } else {
            self.x -= self.speed * dt;
            if self.x < 0.0 {
                self.x = 0.0;
                self.moving_right = true;
            }
        }

        let touching = (self.x - player_x).abs() < DOG_WIDTH && (self.y - player_y).abs() < TOUCH_HEIGHT;
        touching.then_some(GameEvent::PlayerNearHazard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dog() -> Dog {
        Dog::new(100.0, 500.0, 200.0, Viewport::default())
    }

    #[test]
    fn turns_around_at_right_edge() {
        let mut d = dog();
        d.update(3.0, -1000.0, 0.0);
        assert!(d.is_moving_right());
        assert_eq!(d.x, 700.0);

        // 700 + 0.5 * 200 > 800 - 32
        d.update(0.5, -1000.0, 0.0);
        assert!(!d.is_moving_right());
        assert_eq!(d.x, 768.0);

        d.update(0.1, -1000.0, 0.0);
        assert!((d.x - 748.0).abs() < 1e-3);
    }

    #[test]
    fn turns_around_at_left_edge() {
        let mut d = dog();
        d.update(10.0, -1000.0, 0.0);
        assert!(!d.is_moving_right());
        d.update(10.0, -1000.0, 0.0);
        assert!(d.is_moving_right());
        assert_eq!(d.x, 0.0);
    }

    #[test]
    fn reports_contact_every_frame_while_touching() {
        let mut d = dog();
        for _ in 0..5 {
            assert_eq!(d.update(0.0, 110.0, 510.0), Some(GameEvent::PlayerNearHazard));
        }
        assert_eq!(d.update(0.0, 140.0, 500.0), None);
        assert_eq!(d.update(0.0, 100.0, 300.0), None);
    }
}
