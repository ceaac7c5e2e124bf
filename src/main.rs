use anyhow::{anyhow, Result};
use macroquad::prelude::*;

use outpost::config::Config;
use outpost::display::{Sprites, PARALLAX_FACTORS};
use outpost::enemy::Enemy;
use outpost::input::InputFrame;
use outpost::level::{LevelDescriptor, TileMap};
use outpost::parallax::ParallaxBackground;
use outpost::player::Player;

const WINDOW_WIDTH: i32 = 800;
const WINDOW_HEIGHT: i32 = 450;

const CONFIG_PATH: &str = "assets/config.json";
const LEVEL_PATH: &str = "assets/levels/level1.json";

fn window_conf() -> Conf {
    Conf {
        window_title: "Outpost".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(err) = run().await {
        error!("fatal: {err:#}");
    }
}

async fn run() -> Result<()> {
    let config = load_config().await?;

    let descriptor_text = load_string(LEVEL_PATH)
        .await
        .map_err(|err| anyhow!("reading {LEVEL_PATH}: {err:?}"))?;
    let descriptor = LevelDescriptor::from_json(&descriptor_text)?;
    let map = TileMap::from_descriptor(&descriptor);
    info!(
        "loaded level {:?} ({}x{} tiles)",
        descriptor.name,
        map.cols(),
        map.rows()
    );

    // Dropping `sprites` after the loop releases every texture exactly once.
    let sprites = Sprites::load().await?;

    let mut player = Player::new(
        vec2(screen_width() / 4.0 - 128.0, screen_height() / 2.0 - 64.0),
        sprites.player_sheets(),
        &config,
    );
    let mut enemy = Enemy::new(
        vec2(screen_width() - 128.0, screen_height() / 2.0 - 64.0),
        sprites.enemy_sheets(),
        &config.enemy,
    );
    let mut background = ParallaxBackground::new(&PARALLAX_FACTORS, &sprites.background_widths());

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        // ── Update pass ──────────────────────────────────────────────────────
        let camera_x = camera_target_x(&player, &map);
        let view = Rect::new(
            camera_x - screen_width() / 2.0,
            0.0,
            screen_width(),
            screen_height(),
        );

        let input = InputFrame::poll();
        player.update(&input, view);
        player.check_collisions(&map);
        enemy.update(player.position.x);
        background.update(camera_x);

        // ── Draw pass ────────────────────────────────────────────────────────
        clear_background(WHITE);
        sprites.draw_background(&background);

        let mut camera =
            Camera2D::from_display_rect(Rect::new(0.0, 0.0, screen_width(), screen_height()));
        camera.target = vec2(camera_x, screen_height() / 2.0);
        set_camera(&camera);

        sprites.draw_tilemap(&map);
        sprites.draw_projectiles(&player.projectiles);
        sprites.draw_player(&player);
        sprites.draw_enemy(&enemy, player.position.x);

        set_default_camera();
        next_frame().await;
    }

    Ok(())
}

/// Missing config is fine (defaults apply); a malformed one is a startup
/// error.
async fn load_config() -> Result<Config> {
    match load_string(CONFIG_PATH).await {
        Ok(text) => Config::from_json(&text),
        Err(_) => {
            info!("no {CONFIG_PATH}, using defaults");
            Ok(Config::default())
        }
    }
}

/// Camera follows the player's sprite centre, clamped so the view never
/// leaves the level.
fn camera_target_x(player: &Player, map: &TileMap) -> f32 {
    let half = screen_width() / 2.0;
    let center = player.position.x + player.frame_rect().w / 2.0;
    center.clamp(half, (map.pixel_width() - half).max(half))
}
