//! Gameplay tunables.
//!
//! Defaults match the shipped asset set; `assets/config.json` can override
//! any subset of fields.  Units are pixels and pixels-per-tick (one tick per
//! rendered frame).

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Horizontal walk speed.
    pub walk_speed: f32,
    /// Walk speed multiplier while the run modifier is held.
    pub run_multiplier: f32,
    /// Downward acceleration added to vertical velocity every tick.
    pub gravity: f32,
    /// Vertical velocity applied on jump (negative = upward).
    pub jump_impulse: f32,
    /// Horizontal projectile speed.
    pub projectile_speed: f32,
    /// Frame advance per tick for movement animations.
    pub frame_speed: f32,
    /// Frame advance per tick for the one-shot shoot/melee animations.
    pub action_frame_speed: f32,
    pub enemy: EnemyConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    /// Chase step per tick.
    pub speed: f32,
    /// Horizontal distance within which the enemy starts chasing.
    pub detection_distance: f32,
    /// Horizontal distance within which the enemy stops to attack.
    pub attack_range: f32,
    pub frame_speed: f32,
    pub health: i32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            walk_speed: 1.0,
            run_multiplier: 2.0,
            gravity: 0.4,
            jump_impulse: -8.0,
            projectile_speed: 4.0,
            frame_speed: 0.2,
            action_frame_speed: 0.1,
            enemy: EnemyConfig::default(),
        }
    }
}

impl Default for EnemyConfig {
    fn default() -> Self {
        EnemyConfig {
            speed: 0.5,
            detection_distance: 300.0,
            attack_range: 30.0,
            frame_speed: 0.2,
            health: 5,
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing config")
    }
}
