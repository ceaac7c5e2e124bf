//! Tile map construction and lookup.
//!
//! A level is an externally authored rectangular matrix of small integers:
//! 0 is empty, any other value indexes a tile texture.  The matrix is turned
//! into a row-major grid of optional tiles once at load; empty cells keep an
//! explicit `None` so every row stays the same length for indexed lookup.

use anyhow::{bail, Context, Result};
use macroquad::prelude::{vec2, Rect, Vec2};
use serde::Deserialize;

/// Tiles are square, in world pixels.
pub const TILE_SIZE: f32 = 32.0;

#[derive(Debug, Clone)]
pub struct Tile {
    /// Index into the tile texture lookup table (never 0).
    pub kind: u8,
    /// World position of the tile's top-left corner.
    pub position: Vec2,
}

impl Tile {
    pub fn rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, TILE_SIZE, TILE_SIZE)
    }
}

// ── Level descriptor ─────────────────────────────────────────────────────────

/// On-disk level format (JSON).
#[derive(Debug, Clone, Deserialize)]
pub struct LevelDescriptor {
    pub name: String,
    pub tiles: Vec<Vec<u8>>,
}

impl LevelDescriptor {
    pub fn from_json(text: &str) -> Result<Self> {
        let descriptor: LevelDescriptor =
            serde_json::from_str(text).context("parsing level descriptor")?;
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// A ragged matrix would break indexed lookup, so it is rejected at load
    /// rather than guarded per access.
    fn validate(&self) -> Result<()> {
        let Some(first) = self.tiles.first() else {
            bail!("level {:?} has no rows", self.name);
        };
        for (row, cells) in self.tiles.iter().enumerate() {
            if cells.len() != first.len() {
                bail!(
                    "level {:?}: row {} has {} cells, expected {}",
                    self.name,
                    row,
                    cells.len(),
                    first.len()
                );
            }
        }
        Ok(())
    }
}

// ── Tile map ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct TileMap {
    tiles: Vec<Vec<Option<Tile>>>,
}

impl TileMap {
    pub fn from_descriptor(descriptor: &LevelDescriptor) -> Self {
        TileMap::from_rows(&descriptor.tiles)
    }

    pub fn from_rows(rows: &[Vec<u8>]) -> Self {
        let tiles = rows
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, &kind)| {
                        if kind == 0 {
                            None
                        } else {
                            Some(Tile {
                                kind,
                                position: vec2(col as f32 * TILE_SIZE, row as f32 * TILE_SIZE),
                            })
                        }
                    })
                    .collect()
            })
            .collect();
        TileMap { tiles }
    }

    /// Bounds-checked read; out-of-range indices and empty cells both yield
    /// `None`.  The collision scan routinely reaches past the level edges.
    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        self.tiles.get(row)?.get(col)?.as_ref()
    }

    pub fn rows(&self) -> usize {
        self.tiles.len()
    }

    pub fn cols(&self) -> usize {
        self.tiles.first().map_or(0, Vec::len)
    }

    pub fn pixel_width(&self) -> f32 {
        self.cols() as f32 * TILE_SIZE
    }

    pub fn pixel_height(&self) -> f32 {
        self.rows() as f32 * TILE_SIZE
    }

    /// All solid tiles in row-major order (draw pass).
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().flatten().filter_map(Option::as_ref)
    }
}
