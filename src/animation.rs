//! Frame-cursor state machine over a horizontal sprite strip.
//!
//! A strip is one texture containing N equal-width frames side by side.
//! The cursor advances by a fractional `frame_speed` per tick and wraps at
//! the strip length; callers that treat an animation as one-shot (shoot,
//! melee) watch the wrap signal from [`Animation::advance`] to clear their
//! behaviour flag.

use macroquad::prelude::Rect;

/// Nominal frame width of the character sheets (both agents use 128 px
/// frames; the frame count of a sheet is its width divided by this).
pub const NOMINAL_FRAME_WIDTH: f32 = 128.0;

/// Pixel dimensions of a sprite strip.  Plain data so the logic layer and
/// the tests never need a live texture; `display` derives one per loaded
/// texture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetInfo {
    pub width: f32,
    pub height: f32,
}

impl SheetInfo {
    pub fn new(width: f32, height: f32) -> Self {
        SheetInfo { width, height }
    }
}

#[derive(Debug, Clone)]
pub struct Animation {
    sheet: SheetInfo,
    /// Number of frames in the strip, always >= 1.
    pub frames: i32,
    /// Source rectangle of the current frame within the strip.
    pub frame_rec: Rect,
    /// Current frame index, always in `[0, frames)`.
    pub current_frame: i32,
    /// Fractional advance per tick.  Zero freezes the animation.
    pub frame_speed: f32,
    /// Accumulator in `[0, 1)`.
    pub frame_counter: f32,
}

impl Animation {
    pub fn new(sheet: SheetInfo, frame_width: f32, frame_speed: f32) -> Self {
        let frames = frame_count(sheet.width, frame_width);
        let width = sheet.width / frames as f32;
        Animation {
            sheet,
            frames,
            frame_rec: Rect::new(0.0, 0.0, width, sheet.height),
            current_frame: 0,
            frame_speed,
            frame_counter: 0.0,
        }
    }

    /// Advance the cursor by one tick.  Returns `true` when the frame index
    /// wrapped back to 0 this tick.
    pub fn advance(&mut self) -> bool {
        self.frame_counter += self.frame_speed;
        if self.frame_counter < 1.0 {
            return false;
        }
        self.frame_counter = 0.0;
        self.current_frame += 1;
        let mut wrapped = false;
        if self.current_frame >= self.frames {
            self.current_frame = 0;
            wrapped = true;
        }
        self.frame_rec.x = self.current_frame as f32 * self.frame_rec.w;
        wrapped
    }

    /// Rewind to frame 0 (used when a one-shot animation restarts).
    pub fn reset(&mut self) {
        self.current_frame = 0;
        self.frame_counter = 0.0;
        self.frame_rec.x = 0.0;
    }

    /// Recompute the frame rectangle from the backing sheet.  Called after
    /// the owning agent switches its animation selection.
    pub fn resize(&mut self) {
        self.frame_rec.w = self.sheet.width / self.frames as f32;
        self.frame_rec.h = self.sheet.height;
        self.frame_rec.x = self.current_frame as f32 * self.frame_rec.w;
    }

    /// Point the cursor at a different sheet, keeping the frame index where
    /// possible (the enemy switches sheets every tick with its behaviour
    /// state).  The index is clamped into the new strip's range.
    pub fn retarget(&mut self, sheet: SheetInfo, frame_width: f32) {
        self.sheet = sheet;
        self.frames = frame_count(sheet.width, frame_width);
        if self.current_frame >= self.frames {
            self.current_frame = 0;
        }
        self.frame_rec.w = sheet.width / self.frames as f32;
        self.frame_rec.h = sheet.height;
        self.frame_rec.x = self.current_frame as f32 * self.frame_rec.w;
    }

    pub fn sheet(&self) -> SheetInfo {
        self.sheet
    }
}

/// Frames in a strip of `sheet_width`, clamped to at least 1 so frame
/// geometry never divides by zero.
fn frame_count(sheet_width: f32, frame_width: f32) -> i32 {
    if frame_width <= 0.0 {
        return 1;
    }
    ((sheet_width / frame_width) as i32).max(1)
}
