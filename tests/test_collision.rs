use macroquad::prelude::{vec2, Rect};

use outpost::animation::SheetInfo;
use outpost::config::Config;
use outpost::input::InputFrame;
use outpost::level::{TileMap, TILE_SIZE};
use outpost::player::{Player, PlayerSheets};

fn sheets() -> PlayerSheets {
    let strip = SheetInfo::new(896.0, 128.0); // 7 frames of 128x128
    PlayerSheets {
        idle: strip,
        walk: strip,
        run: strip,
        shoot: strip,
        attack: strip,
    }
}

fn make_player_at(x: f32, y: f32) -> Player {
    Player::new(vec2(x, y), sheets(), &Config::default())
}

/// 25 columns, ground tiles filling row 6 (tile tops at y = 192).
fn flat_map() -> TileMap {
    let mut rows = vec![vec![0u8; 25]; 6];
    rows.push(vec![1u8; 25]);
    TileMap::from_rows(&rows)
}

/// Empty 8x8 grid with a single tile at (row, col).
fn single_tile_map(row: usize, col: usize) -> TileMap {
    let mut rows = vec![vec![0u8; 8]; 8];
    rows[row][col] = 1;
    TileMap::from_rows(&rows)
}

const GROUND_TOP: f32 = 6.0 * TILE_SIZE; // 192
const FRAME_H: f32 = 128.0;

// ── Vertical pass ─────────────────────────────────────────────────────────────

#[test]
fn falling_player_lands_on_tile_top() {
    let map = flat_map();
    // Feet 3 px into the ground, falling.
    let mut p = make_player_at(64.0, GROUND_TOP - FRAME_H + 3.0);
    p.velocity.y = 2.0;

    p.check_collisions(&map);

    assert_eq!(p.velocity.y, 0.0);
    assert!(p.grounded);
    assert_eq!(p.position.y, GROUND_TOP - FRAME_H);
}

#[test]
fn rising_player_is_never_blocked() {
    let map = flat_map();
    let mut p = make_player_at(64.0, GROUND_TOP - FRAME_H + 3.0);
    p.velocity.y = -5.0;

    p.check_collisions(&map);

    assert_eq!(p.velocity.y, -5.0);
    assert_eq!(p.position.y, GROUND_TOP - FRAME_H + 3.0);
    assert!(!p.grounded);
}

#[test]
fn grounded_resets_when_nothing_is_hit() {
    let map = flat_map();
    let mut p = make_player_at(64.0, 0.0); // high in the air
    p.grounded = true;

    p.check_collisions(&map);

    assert!(!p.grounded);
}

// ── Horizontal pass ───────────────────────────────────────────────────────────

#[test]
fn moving_right_into_wall_snaps_and_stops() {
    // Wall tile at row 4, col 3: x in [96, 128), at body height for a player
    // standing near y = 64.
    let map = single_tile_map(4, 3);
    let mut p = make_player_at(40.0, 64.0);
    p.velocity.x = 2.0;

    p.check_collisions(&map);

    assert_eq!(p.velocity.x, 0.0);
    // Body's right edge flush with the tile's left edge.
    assert_eq!(p.position.x, 96.0 - 128.0 + p.trim.right);
}

#[test]
fn moving_left_into_wall_snaps_and_stops() {
    // Wall tile at row 4, col 5: x in [160, 192).
    let map = single_tile_map(4, 5);
    let mut p = make_player_at(120.0, 64.0);
    p.velocity.x = -1.0;

    p.check_collisions(&map);

    assert_eq!(p.velocity.x, 0.0);
    // Body's left edge flush with the tile's right edge.
    assert_eq!(p.position.x, 192.0 - p.trim.left);
}

#[test]
fn overlapping_wall_without_horizontal_velocity_is_left_alone() {
    let map = single_tile_map(4, 3);
    let mut p = make_player_at(40.0, 64.0);

    p.check_collisions(&map);

    assert_eq!(p.position.x, 40.0);
}

// ── Idempotence & robustness ─────────────────────────────────────────────────

#[test]
fn resolution_is_idempotent() {
    let map = flat_map();
    let mut p = make_player_at(64.0, GROUND_TOP - FRAME_H + 3.0);
    p.velocity.y = 2.0;
    p.velocity.x = 0.0;

    p.check_collisions(&map);
    let position = p.position;
    let velocity = p.velocity;

    p.check_collisions(&map);
    assert_eq!(p.position, position);
    assert_eq!(p.velocity, velocity);
}

#[test]
fn scan_beyond_level_edges_does_not_panic() {
    let map = flat_map();

    let mut p = make_player_at(-500.0, -500.0);
    p.velocity = vec2(-3.0, 4.0);
    p.check_collisions(&map);

    let mut p = make_player_at(10_000.0, 10_000.0);
    p.velocity = vec2(3.0, 4.0);
    p.check_collisions(&map);
    assert!(!p.grounded); // nothing down there to stand on
}

// ── Full update/resolve cycle ────────────────────────────────────────────────

#[test]
fn jump_arc_returns_to_the_ground() {
    let map = flat_map();
    let bounds = Rect::new(0.0, 0.0, 800.0, 450.0);
    let mut p = make_player_at(64.0, GROUND_TOP - FRAME_H + 1.0);
    p.velocity.y = 2.0;
    p.check_collisions(&map);
    assert!(p.grounded);

    let jump = InputFrame {
        jump: true,
        ..Default::default()
    };
    p.update(&jump, bounds);
    p.check_collisions(&map);
    assert!(p.velocity.y < 0.0);
    assert!(p.position.y < GROUND_TOP - FRAME_H);

    // Gravity 0.4 against impulse -8 brings him back within ~40 ticks.
    for _ in 0..100 {
        p.update(&InputFrame::default(), bounds);
        p.check_collisions(&map);
    }
    assert!(p.grounded);
    assert_eq!(p.position.y, GROUND_TOP - FRAME_H);
}

#[test]
fn standing_still_on_ground_stays_grounded_every_tick() {
    let map = flat_map();
    let bounds = Rect::new(0.0, 0.0, 800.0, 450.0);
    let mut p = make_player_at(64.0, GROUND_TOP - FRAME_H + 1.0);
    p.velocity.y = 2.0;
    p.check_collisions(&map);

    for _ in 0..10 {
        p.update(&InputFrame::default(), bounds);
        p.check_collisions(&map);
        assert!(p.grounded);
        assert_eq!(p.position.y, GROUND_TOP - FRAME_H);
    }
}
