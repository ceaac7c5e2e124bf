//! Rendering layer — every texture and draw call lives here.
//!
//! `Sprites` owns one texture per sprite strip, tile kind and background
//! layer; dropping it after the frame loop releases each exactly once.  The
//! draw functions receive immutable game state and translate it into
//! macroquad calls; no game logic is performed.

use std::collections::HashMap;

use anyhow::{anyhow, Result};
use macroquad::prelude::{
    draw_rectangle, draw_texture, draw_texture_ex, load_texture, screen_width, Color,
    DrawTextureParams, Texture2D, GOLD, WHITE,
};

use crate::animation::SheetInfo;
use crate::enemy::{Enemy, EnemySheets, EnemyState};
use crate::level::TileMap;
use crate::parallax::ParallaxBackground;
use crate::player::{Player, PlayerAnim, PlayerSheets};
use crate::projectile::Projectile;

const PROJECTILE_COLOR: Color = GOLD;

const PLAYER_DIR: &str = "assets/characters/Soldier_1";
const ENEMY_DIR: &str = "assets/characters/Raider_1";
const BACKGROUND_DIR: &str = "assets/world/background";
const TILE_DIR: &str = "assets/world/tiles";

/// Tile kinds present in the shipped levels, with their texture files.
const TILE_KINDS: &[(u8, &str)] = &[(1, "ground.png"), (2, "platform.png")];

/// How many background layers ship with the asset set, farthest first.
const BACKGROUND_LAYERS: usize = 4;

/// Depth factors for the background layers, farthest first.
pub const PARALLAX_FACTORS: [f32; BACKGROUND_LAYERS] = [0.1, 0.2, 0.4, 0.8];

pub struct Sprites {
    player_idle: Texture2D,
    player_walk: Texture2D,
    player_run: Texture2D,
    player_shoot: Texture2D,
    player_attack: Texture2D,
    enemy_idle: Texture2D,
    enemy_walk: Texture2D,
    enemy_attack: Texture2D,
    tiles: HashMap<u8, Texture2D>,
    background: Vec<Texture2D>,
}

async fn texture(path: String) -> Result<Texture2D> {
    load_texture(&path)
        .await
        .map_err(|err| anyhow!("loading texture {path}: {err:?}"))
}

fn sheet(texture: &Texture2D) -> SheetInfo {
    SheetInfo::new(texture.width(), texture.height())
}

impl Sprites {
    /// Load every asset the session needs.  A missing or corrupt file is
    /// fatal and propagates to startup.
    pub async fn load() -> Result<Self> {
        let mut tiles = HashMap::new();
        for &(kind, file) in TILE_KINDS {
            tiles.insert(kind, texture(format!("{TILE_DIR}/{file}")).await?);
        }

        let mut background = Vec::with_capacity(BACKGROUND_LAYERS);
        for layer in 1..=BACKGROUND_LAYERS {
            background.push(texture(format!("{BACKGROUND_DIR}/{layer}.png")).await?);
        }

        Ok(Sprites {
            player_idle: texture(format!("{PLAYER_DIR}/Idle.png")).await?,
            player_walk: texture(format!("{PLAYER_DIR}/Walk.png")).await?,
            player_run: texture(format!("{PLAYER_DIR}/Run.png")).await?,
            player_shoot: texture(format!("{PLAYER_DIR}/Shot_1.png")).await?,
            player_attack: texture(format!("{PLAYER_DIR}/Attack.png")).await?,
            enemy_idle: texture(format!("{ENEMY_DIR}/Idle.png")).await?,
            enemy_walk: texture(format!("{ENEMY_DIR}/Walk.png")).await?,
            enemy_attack: texture(format!("{ENEMY_DIR}/Attack_1.png")).await?,
            tiles,
            background,
        })
    }

    // ── Sheet dimensions for the logic layer ─────────────────────────────────

    pub fn player_sheets(&self) -> PlayerSheets {
        PlayerSheets {
            idle: sheet(&self.player_idle),
            walk: sheet(&self.player_walk),
            run: sheet(&self.player_run),
            shoot: sheet(&self.player_shoot),
            attack: sheet(&self.player_attack),
        }
    }

    pub fn enemy_sheets(&self) -> EnemySheets {
        EnemySheets {
            idle: sheet(&self.enemy_idle),
            walk: sheet(&self.enemy_walk),
            attack: sheet(&self.enemy_attack),
        }
    }

    pub fn background_widths(&self) -> Vec<f32> {
        self.background.iter().map(Texture2D::width).collect()
    }

    // ── Draw pass ────────────────────────────────────────────────────────────

    /// Screen-space backdrop; drawn before the camera transform is applied.
    pub fn draw_background(&self, background: &ParallaxBackground) {
        let screen = screen_width();
        for (layer, texture) in background.layers.iter().zip(&self.background) {
            for x in layer.tile_positions(screen) {
                draw_texture(texture, x, 0.0, WHITE);
            }
        }
    }

    pub fn draw_tilemap(&self, map: &TileMap) {
        for tile in map.iter() {
            if let Some(texture) = self.tiles.get(&tile.kind) {
                draw_texture(texture, tile.position.x, tile.position.y, WHITE);
            }
        }
    }

    pub fn draw_player(&self, player: &Player) {
        let texture = match player.current {
            PlayerAnim::Idle => &self.player_idle,
            PlayerAnim::Walk => &self.player_walk,
            PlayerAnim::Run => &self.player_run,
            PlayerAnim::Shoot => &self.player_shoot,
            PlayerAnim::Attack => &self.player_attack,
        };
        draw_texture_ex(
            texture,
            player.position.x,
            player.position.y,
            WHITE,
            DrawTextureParams {
                source: Some(player.animation().frame_rec),
                flip_x: player.facing_left,
                ..Default::default()
            },
        );
    }

    pub fn draw_enemy(&self, enemy: &Enemy, target_x: f32) {
        let texture = match enemy.state {
            EnemyState::Idle => &self.enemy_idle,
            EnemyState::Moving => &self.enemy_walk,
            EnemyState::Attacking => &self.enemy_attack,
        };
        draw_texture_ex(
            texture,
            enemy.position.x,
            enemy.position.y,
            WHITE,
            DrawTextureParams {
                source: Some(enemy.animation.frame_rec),
                flip_x: enemy.facing_left(target_x),
                ..Default::default()
            },
        );
    }

    pub fn draw_projectiles(&self, projectiles: &[Projectile]) {
        for projectile in projectiles {
            if projectile.active {
                draw_rectangle(
                    projectile.position.x,
                    projectile.position.y,
                    projectile.width,
                    projectile.height,
                    PROJECTILE_COLOR,
                );
            }
        }
    }
}
