//! Parallax-scrolling backdrop.
//!
//! Purely cosmetic: each layer's horizontal offset is recomputed from the
//! camera position every tick, scaled by the layer's depth factor.  The
//! struct is owned by the game session and passed by reference to update
//! and draw — no globals.  Textures stay in `display`; a layer only knows
//! its texture's width so the wrap-around fill can be computed here.

#[derive(Debug, Clone)]
pub struct ParallaxLayer {
    /// Depth factor: larger scrolls faster (closer to the camera).
    pub factor: f32,
    /// Width of the backing texture in pixels.
    pub texture_width: f32,
    /// Current horizontal scroll offset, recomputed each tick.
    pub offset_x: f32,
}

impl ParallaxLayer {
    /// Screen-space x positions at which the layer texture must be drawn so
    /// copies cover `[0, screen_width)` seamlessly around `offset_x`.
    pub fn tile_positions(&self, screen_width: f32) -> Vec<f32> {
        if self.texture_width <= 0.0 {
            return Vec::new();
        }
        let mut positions = vec![self.offset_x];
        let mut x = self.offset_x + self.texture_width;
        while x < screen_width {
            positions.push(x);
            x += self.texture_width;
        }
        let mut x = self.offset_x - self.texture_width;
        while x > -self.texture_width {
            positions.push(x);
            x -= self.texture_width;
        }
        positions
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParallaxBackground {
    pub layers: Vec<ParallaxLayer>,
}

impl ParallaxBackground {
    /// One layer per `(factor, texture_width)` pair, farthest first.
    pub fn new(factors: &[f32], texture_widths: &[f32]) -> Self {
        let layers = factors
            .iter()
            .zip(texture_widths)
            .map(|(&factor, &texture_width)| ParallaxLayer {
                factor,
                texture_width,
                offset_x: 0.0,
            })
            .collect();
        ParallaxBackground { layers }
    }

    /// Derive every layer's offset from the camera's x position.
    pub fn update(&mut self, camera_x: f32) {
        for layer in &mut self.layers {
            layer.offset_x = -camera_x * (layer.factor * 0.5);
        }
    }
}
