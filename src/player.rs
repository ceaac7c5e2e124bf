//! The soldier: input-driven movement, gravity, jumping, one-shot actions,
//! projectile ownership and tile collision resolution.
//!
//! `update` runs the per-tick pipeline in a strict order (gravity first,
//! position integration last); `check_collisions` then resolves the new
//! position against the tile map.  The split mirrors the frame loop, which
//! calls them back to back.

use macroquad::prelude::{vec2, Rect, Vec2};

use crate::animation::{Animation, SheetInfo, NOMINAL_FRAME_WIDTH};
use crate::config::Config;
use crate::input::InputFrame;
use crate::level::{TileMap, TILE_SIZE};
use crate::projectile::Projectile;

/// Which of the five animations is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAnim {
    Idle,
    Walk,
    Run,
    Shoot,
    Attack,
}

/// Transparent margins of the character sheet.  The drawn frame is mostly
/// padding; collision uses boxes shrunk by these margins so the soldier
/// stands and bumps where his pixels are, not where the frame edge is.
/// Values describe the 128 px soldier strips.
#[derive(Debug, Clone, Copy)]
pub struct SpriteTrim {
    /// Padding from the frame's left edge to the sprite.
    pub left: f32,
    /// Padding from the frame's right edge to the sprite.
    pub right: f32,
    /// Padding above the sprite's head.
    pub top: f32,
    /// Height of the feet band used for ground collision.
    pub feet_height: f32,
    /// Extra horizontal inset of the feet band, so the feet never catch on
    /// a wall the body should handle.
    pub feet_inset: f32,
}

impl Default for SpriteTrim {
    fn default() -> Self {
        SpriteTrim {
            left: 47.0,
            right: 41.0,
            top: 35.0,
            feet_height: 10.0,
            feet_inset: 6.0,
        }
    }
}

/// Sprite strips for each player animation.
#[derive(Debug, Clone, Copy)]
pub struct PlayerSheets {
    pub idle: SheetInfo,
    pub walk: SheetInfo,
    pub run: SheetInfo,
    pub shoot: SheetInfo,
    pub attack: SheetInfo,
}

#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left of the sprite frame, world pixels.
    pub position: Vec2,
    /// Pixels per tick.
    pub velocity: Vec2,
    pub is_moving: bool,
    pub is_running: bool,
    pub is_shooting: bool,
    pub is_attacking: bool,
    pub facing_left: bool,
    /// Set only by a downward collision hit in `check_collisions`, so it is
    /// one tick stale when the jump guard reads it.
    pub grounded: bool,
    pub current: PlayerAnim,
    pub projectiles: Vec<Projectile>,
    pub trim: SpriteTrim,
    idle: Animation,
    walk: Animation,
    run: Animation,
    shoot: Animation,
    attack: Animation,
    speed: f32,
    run_multiplier: f32,
    gravity: f32,
    jump_impulse: f32,
    projectile_speed: f32,
}

impl Player {
    pub fn new(position: Vec2, sheets: PlayerSheets, config: &Config) -> Self {
        let movement = |sheet| Animation::new(sheet, NOMINAL_FRAME_WIDTH, config.frame_speed);
        let action = |sheet| Animation::new(sheet, NOMINAL_FRAME_WIDTH, config.action_frame_speed);
        Player {
            position,
            velocity: Vec2::ZERO,
            is_moving: false,
            is_running: false,
            is_shooting: false,
            is_attacking: false,
            facing_left: false,
            grounded: false,
            current: PlayerAnim::Idle,
            projectiles: Vec::new(),
            trim: SpriteTrim::default(),
            idle: movement(sheets.idle),
            walk: movement(sheets.walk),
            run: movement(sheets.run),
            shoot: action(sheets.shoot),
            attack: action(sheets.attack),
            speed: config.walk_speed,
            run_multiplier: config.run_multiplier,
            gravity: config.gravity,
            jump_impulse: config.jump_impulse,
            projectile_speed: config.projectile_speed,
        }
    }

    // ── Per-tick update pipeline ─────────────────────────────────────────────

    /// Advance one tick.  `bounds` is the visible screen rectangle in world
    /// space; projectiles die on leaving it.
    pub fn update(&mut self, input: &InputFrame, bounds: Rect) {
        // 1. Gravity, unconditionally — collision zeroes it out on landing.
        self.velocity.y += self.gravity;

        // 2. Frame advance; a one-shot wrap returns the agent to movement
        //    selection.
        self.advance_animation();

        // 3-4. Intent.
        self.apply_movement(input);
        self.apply_actions(input);

        // 5-6. Selection, then frame geometry for the selected strip.
        self.select_animation();
        self.animation_mut(self.current).resize();

        // 7. Projectiles: integrate, then rebuild keeping the active ones.
        for projectile in &mut self.projectiles {
            projectile.update(bounds);
        }
        self.projectiles = self
            .projectiles
            .iter()
            .filter(|projectile| projectile.active)
            .cloned()
            .collect();

        // 8. Position integration, once, after everything above.
        self.position += self.velocity;
    }

    fn advance_animation(&mut self) {
        let wrapped = self.animation_mut(self.current).advance();
        if wrapped && (self.is_shooting || self.is_attacking) {
            self.is_shooting = false;
            self.is_attacking = false;
        }
    }

    fn apply_movement(&mut self, input: &InputFrame) {
        if (input.left || input.right) && !self.is_shooting {
            self.is_moving = true;
            self.is_running = input.run;

            let mut speed = self.speed;
            if input.run {
                speed *= self.run_multiplier;
            }

            if input.right {
                self.facing_left = false;
                self.velocity.x = speed;
            }
            if input.left {
                self.facing_left = true;
                self.velocity.x = -speed;
            }
        } else {
            self.is_moving = false;
            self.is_running = false;
            self.velocity.x = 0.0;
        }

        // Grounded only — no double jumps.
        if input.jump && self.grounded {
            self.velocity.y = self.jump_impulse;
            self.grounded = false;
        }
    }

    /// Held-state plus flag guard gives single-shot-per-press: the flag only
    /// clears when the one-shot animation wraps, so holding the button does
    /// not retrigger.
    fn apply_actions(&mut self, input: &InputFrame) {
        if input.shoot && !self.is_shooting {
            self.is_shooting = true;
            self.shoot.reset();
            let projectile =
                Projectile::spawn(self.muzzle(), self.facing_left, self.projectile_speed);
            self.projectiles.push(projectile);
        }

        if input.attack && !self.is_attacking {
            self.is_attacking = true;
            self.attack.reset();
        }
    }

    fn select_animation(&mut self) {
        self.current = if self.is_shooting {
            PlayerAnim::Shoot
        } else if self.is_attacking {
            PlayerAnim::Attack
        } else if self.is_moving {
            if self.is_running {
                PlayerAnim::Run
            } else {
                PlayerAnim::Walk
            }
        } else {
            PlayerAnim::Idle
        };
    }

    // ── Tile collision resolution ────────────────────────────────────────────

    /// Resolve the integrated position against the tile map: a horizontal
    /// pass with the body box, then a vertical pass with the feet band.
    /// Only the grid cells overlapping the frame rectangle are scanned; when
    /// several tiles hit in one tick the last in scan order wins.
    pub fn check_collisions(&mut self, map: &TileMap) {
        self.grounded = false;

        let frame = self.frame_rect();
        let (row_range, col_range) = scan_range(frame);
        let body = self.body_rect();
        let feet = self.feet_rect();

        for row in row_range.clone() {
            for col in col_range.clone() {
                let Some(tile) = map.get(row, col) else {
                    continue;
                };
                let tile_rect = tile.rect();
                if !body.overlaps(&tile_rect) {
                    continue;
                }
                if self.velocity.x > 0.0 {
                    // Body's right edge flush against the tile's left edge.
                    self.position.x = tile_rect.x - frame.w + self.trim.right;
                    self.velocity.x = 0.0;
                } else if self.velocity.x < 0.0 {
                    self.position.x = tile_rect.x + TILE_SIZE - self.trim.left;
                    self.velocity.x = 0.0;
                }
            }
        }

        for row in row_range {
            for col in col_range.clone() {
                let Some(tile) = map.get(row, col) else {
                    continue;
                };
                let tile_rect = tile.rect();
                // Only while falling: jump ascent is never blocked and there
                // is no ceiling pass.
                if self.velocity.y > 0.0 && feet.overlaps(&tile_rect) {
                    self.position.y = tile_rect.y - frame.h;
                    self.velocity.y = 0.0;
                    self.grounded = true;
                }
            }
        }
    }

    // ── Geometry ─────────────────────────────────────────────────────────────

    /// Full sprite frame at the current position.
    pub fn frame_rect(&self) -> Rect {
        let animation = self.animation();
        Rect::new(
            self.position.x,
            self.position.y,
            animation.frame_rec.w,
            animation.frame_rec.h,
        )
    }

    /// Middle/upper band used for wall collision.
    pub fn body_rect(&self) -> Rect {
        let frame = self.frame_rect();
        Rect::new(
            frame.x + self.trim.left,
            frame.y + self.trim.top,
            frame.w - self.trim.left - self.trim.right,
            frame.h - self.trim.top - self.trim.feet_height,
        )
    }

    /// Thin band at the sprite's bottom used for ground collision.
    pub fn feet_rect(&self) -> Rect {
        let frame = self.frame_rect();
        let inset = self.trim.feet_inset;
        Rect::new(
            frame.x + self.trim.left + inset,
            frame.y + frame.h - self.trim.feet_height,
            frame.w - self.trim.left - self.trim.right - 2.0 * inset,
            self.trim.feet_height,
        )
    }

    /// Where projectiles leave the sprite.
    pub fn muzzle(&self) -> Vec2 {
        let frame = self.frame_rect();
        vec2(frame.x + frame.w / 2.0, frame.y + frame.h * 0.45)
    }

    /// The currently selected animation.
    pub fn animation(&self) -> &Animation {
        match self.current {
            PlayerAnim::Idle => &self.idle,
            PlayerAnim::Walk => &self.walk,
            PlayerAnim::Run => &self.run,
            PlayerAnim::Shoot => &self.shoot,
            PlayerAnim::Attack => &self.attack,
        }
    }

    fn animation_mut(&mut self, kind: PlayerAnim) -> &mut Animation {
        match kind {
            PlayerAnim::Idle => &mut self.idle,
            PlayerAnim::Walk => &mut self.walk,
            PlayerAnim::Run => &mut self.run,
            PlayerAnim::Shoot => &mut self.shoot,
            PlayerAnim::Attack => &mut self.attack,
        }
    }
}

/// Inclusive tile-index ranges covered by `frame`, clamped at zero.  The
/// upper ends may reach past the grid; `TileMap::get` bounds-checks reads.
fn scan_range(frame: Rect) -> (std::ops::RangeInclusive<usize>, std::ops::RangeInclusive<usize>) {
    let col0 = (frame.x / TILE_SIZE).floor().max(0.0) as usize;
    let col1 = ((frame.x + frame.w) / TILE_SIZE).floor().max(0.0) as usize;
    let row0 = (frame.y / TILE_SIZE).floor().max(0.0) as usize;
    let row1 = ((frame.y + frame.h) / TILE_SIZE).floor().max(0.0) as usize;
    (row0..=row1, col0..=col1)
}
