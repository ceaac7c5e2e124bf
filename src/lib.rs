//! Core simulation for a 2D side-scrolling action game: a soldier with
//! walk/run/jump/shoot/melee actions, a raider that chases and corners him,
//! a tile map with gravity-driven collision, and a parallax backdrop.
//!
//! All gameplay logic lives in these modules and is exercised by the
//! integration tests under `tests/`.  Windowing, textures and input polling
//! are macroquad's job; `display` and `main` are the only places that talk
//! to it beyond plain math types.

pub mod animation;
pub mod config;
pub mod display;
pub mod enemy;
pub mod input;
pub mod level;
pub mod parallax;
pub mod player;
pub mod projectile;
