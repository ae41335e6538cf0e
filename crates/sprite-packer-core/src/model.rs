use serde::{Deserialize, Serialize};

/// Axis-aligned placement rectangle (pixels). `x,y` is top-left; `w,h` are sizes.
/// Serializes with the atlas wire keys `X`/`Y`/`W`/`H`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
    /// Inclusive right edge coordinate (`x + w - 1`).
    pub fn right(&self) -> u32 {
        self.x + self.w.saturating_sub(1)
    }
    /// Inclusive bottom edge coordinate (`y + h - 1`).
    pub fn bottom(&self) -> u32 {
        self.y + self.h.saturating_sub(1)
    }
}

/// A placed sprite frame within the sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Frame {
    /// User-specified key (e.g., source file name). Unique within one sheet.
    pub key: String,
    /// Placed rectangle within the canvas.
    pub frame: Rect,
    /// Always false; rotation is unsupported.
    pub rotated: bool,
    /// Always false; trimming is unsupported.
    pub trimmed: bool,
}

/// A named spritesheet: frame records keyed uniquely by [`Frame::key`],
/// kept in packed (insertion) order for serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spritesheet {
    pub name: String,
    frames: Vec<Frame>,
}

impl Spritesheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frames: Vec::new(),
        }
    }

    /// Inserts a frame record. A record with the same key replaces the earlier
    /// one in place, so insertion order is stable.
    pub fn insert(&mut self, frame: Frame) {
        match self.frames.iter_mut().find(|f| f.key == frame.key) {
            Some(existing) => *existing = frame,
            None => self.frames.push(frame),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Frame> {
        self.frames.iter().find(|f| f.key == key)
    }

    /// Frame records in packed order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
