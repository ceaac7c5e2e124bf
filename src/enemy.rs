//! The raider: a one-axis chase/attack agent.
//!
//! Behaviour is recomputed every tick as a pure function of the horizontal
//! distance to its target.  The enemy never holds a reference to the player;
//! it is handed the target's x coordinate and can only read it.

use macroquad::prelude::{Rect, Vec2};

use crate::animation::{Animation, SheetInfo, NOMINAL_FRAME_WIDTH};
use crate::config::EnemyConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyState {
    Idle,
    Moving,
    Attacking,
}

/// Pure transition function over the distance thresholds:
/// closer than `attack_range` attacks, inside `detection_distance` (but
/// beyond `attack_range + 1`) chases, anything else idles.  The one-pixel
/// gap above attack range keeps the agent from flickering between chasing
/// and attacking right at the boundary.
pub fn next_state(distance: f32, attack_range: f32, detection_distance: f32) -> EnemyState {
    if distance < attack_range {
        EnemyState::Attacking
    } else if distance <= detection_distance && distance > attack_range + 1.0 {
        EnemyState::Moving
    } else {
        EnemyState::Idle
    }
}

/// Sprite strips for each behaviour state.
#[derive(Debug, Clone, Copy)]
pub struct EnemySheets {
    pub idle: SheetInfo,
    pub walk: SheetInfo,
    pub attack: SheetInfo,
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub position: Vec2,
    pub state: EnemyState,
    /// Present for combat resolution; nothing decrements it yet.
    pub health: i32,
    pub animation: Animation,
    sheets: EnemySheets,
    speed: f32,
    detection_distance: f32,
    attack_range: f32,
}

impl Enemy {
    pub fn new(position: Vec2, sheets: EnemySheets, config: &EnemyConfig) -> Self {
        Enemy {
            position,
            state: EnemyState::Idle,
            health: config.health,
            animation: Animation::new(sheets.idle, NOMINAL_FRAME_WIDTH, config.frame_speed),
            sheets,
            speed: config.speed,
            detection_distance: config.detection_distance,
            attack_range: config.attack_range,
        }
    }

    /// One tick: advance the frame cursor, pick the behaviour state from the
    /// distance to the target, step while chasing, and re-point the cursor
    /// at the sheet for the selected state.
    pub fn update(&mut self, target_x: f32) {
        self.animation.advance();

        let distance = (self.position.x - target_x).abs();
        self.state = next_state(distance, self.attack_range, self.detection_distance);

        if self.state == EnemyState::Moving {
            self.step_toward(target_x);
        }

        // Frame geometry follows the selected sheet every tick; the strips
        // have different frame counts.
        let sheet = match self.state {
            EnemyState::Idle => self.sheets.idle,
            EnemyState::Moving => self.sheets.walk,
            EnemyState::Attacking => self.sheets.attack,
        };
        self.animation.retarget(sheet, NOMINAL_FRAME_WIDTH);
    }

    /// Fixed-size step toward the target's x.  No overshoot check: the agent
    /// may oscillate by `speed` around the boundary.
    fn step_toward(&mut self, target_x: f32) {
        if target_x < self.position.x {
            self.position.x -= self.speed;
        } else {
            self.position.x += self.speed;
        }
    }

    /// The sprite faces right natively and is mirrored while the target is
    /// on the enemy's left.
    pub fn facing_left(&self, target_x: f32) -> bool {
        target_x < self.position.x
    }

    pub fn frame_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.animation.frame_rec.w,
            self.animation.frame_rec.h,
        )
    }
}
