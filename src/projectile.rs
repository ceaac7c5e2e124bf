//! Straight-line projectiles fired by the player.
//!
//! A projectile stays active until it leaves the visible bounds, at which
//! point it is permanently deactivated and the owning collection drops it on
//! the next rebuild (see `Player::update`).

use macroquad::prelude::{vec2, Rect, Vec2};

pub const PROJECTILE_WIDTH: f32 = 12.0;
pub const PROJECTILE_HEIGHT: f32 = 4.0;

#[derive(Debug, Clone)]
pub struct Projectile {
    pub position: Vec2,
    pub velocity: Vec2,
    pub active: bool,
    pub width: f32,
    pub height: f32,
}

impl Projectile {
    pub fn new(position: Vec2, velocity: Vec2, width: f32, height: f32) -> Self {
        Projectile {
            position,
            velocity,
            active: true,
            width,
            height,
        }
    }

    /// Spawn a projectile at the shooter's muzzle, travelling horizontally
    /// in the direction the shooter faces.
    pub fn spawn(origin: Vec2, facing_left: bool, speed: f32) -> Self {
        let mut velocity = vec2(speed, 0.0);
        if facing_left {
            velocity.x = -velocity.x;
        }
        Projectile::new(origin, velocity, PROJECTILE_WIDTH, PROJECTILE_HEIGHT)
    }

    /// Integrate one tick of movement and deactivate once outside `bounds`.
    /// Deactivation is permanent — an inactive projectile never moves again.
    pub fn update(&mut self, bounds: Rect) {
        if !self.active {
            return;
        }
        self.position += self.velocity;

        if self.position.x < bounds.x
            || self.position.x > bounds.x + bounds.w
            || self.position.y < bounds.y
            || self.position.y > bounds.y + bounds.h
        {
            self.active = false;
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.width, self.height)
    }

    /// Rectangle-intersection test against a target hit box.  Combat
    /// resolution (damage, death) is not wired into the core loop; this is
    /// the hook for it.
    pub fn overlaps(&self, target: &Rect) -> bool {
        self.rect().overlaps(target)
    }
}
