use crate::config::PackerConfig;
use crate::model::Rect;

/// Sequential shelf/row packer: left-to-right, top-to-bottom.
///
/// Placements follow input order. The first sprite placed in a row fixes that
/// row's vertical step; later shorter or taller sprites never adjust it. A
/// sprite that would cross the right edge wraps to the next row before being
/// placed, unless it starts the row (then it is placed at `x = 0` regardless
/// of width). No check is made that a wrapped row still fits vertically; the
/// caller decides what an out-of-bounds placement means (see
/// [`crate::config::OverflowPolicy`]).
#[derive(Debug)]
pub struct ShelfPacker {
    canvas_width: u32,
    canvas_height: u32,
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
}

impl ShelfPacker {
    pub fn new(cfg: &PackerConfig) -> Self {
        Self {
            canvas_width: cfg.canvas_width,
            canvas_height: cfg.canvas_height,
            cursor_x: 0,
            cursor_y: 0,
            row_height: 0,
        }
    }

    /// Computes the placement for a `w`x`h` sprite and advances the cursor.
    pub fn place(&mut self, w: u32, h: u32) -> Rect {
        if self.cursor_x > 0 && self.cursor_x + w > self.canvas_width {
            self.cursor_x = 0;
            self.cursor_y += self.row_height;
        }
        let rect = Rect::new(self.cursor_x, self.cursor_y, w, h);
        if self.cursor_x == 0 {
            // first sprite in the row fixes the row step
            self.row_height = h;
        }
        self.cursor_x += w;
        rect
    }

    /// Returns true if `rect` lies fully within the canvas.
    pub fn in_bounds(&self, rect: &Rect) -> bool {
        rect.x + rect.w <= self.canvas_width && rect.y + rect.h <= self.canvas_height
    }
}
