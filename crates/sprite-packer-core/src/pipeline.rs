use crate::config::{OverflowPolicy, PackerConfig};
use crate::error::{Result, SpritePackError};
use crate::model::{Frame, Spritesheet};
use crate::packer::ShelfPacker;
use image::{DynamicImage, RgbaImage, imageops};
use tracing::{debug, instrument, warn};

/// In-memory image to pack (key + decoded image).
pub struct InputImage {
    pub key: String,
    pub image: DynamicImage,
}

/// Output of a packing run: the sheet metadata and the composited RGBA canvas.
pub struct PackOutput {
    pub sheet: Spritesheet,
    pub canvas: RgbaImage,
}

/// Packs `inputs` onto a fixed-size canvas in input order and returns the
/// sheet metadata plus the composited RGBA canvas.
///
/// Notes:
/// - Placement is strictly sequential shelf/row packing; see [`ShelfPacker`].
/// - The canvas is always exactly `canvas_width` x `canvas_height`.
/// - Sprites are composited with alpha "over" blending.
/// - Zero inputs yield a blank transparent canvas and an empty sheet.
#[instrument(skip_all)]
pub fn pack_images(
    name: impl Into<String>,
    inputs: Vec<InputImage>,
    cfg: PackerConfig,
) -> Result<PackOutput> {
    cfg.validate()?;

    let mut packer = ShelfPacker::new(&cfg);
    let mut canvas = RgbaImage::new(cfg.canvas_width, cfg.canvas_height);
    let mut sheet = Spritesheet::new(name);

    for inp in inputs {
        let rgba = inp.image.to_rgba8();
        let (w, h) = rgba.dimensions();
        let rect = packer.place(w, h);
        if !packer.in_bounds(&rect) {
            match cfg.overflow_policy {
                OverflowPolicy::Error => {
                    return Err(SpritePackError::OutOfSpace { key: inp.key });
                }
                OverflowPolicy::Clip => {
                    warn!(key = %inp.key, x = rect.x, y = rect.y, w, h, "placement exceeds canvas; clipping");
                }
            }
        }
        imageops::overlay(&mut canvas, &rgba, rect.x as i64, rect.y as i64);
        debug!(key = %inp.key, x = rect.x, y = rect.y, w, h, "placed sprite");
        sheet.insert(Frame {
            key: inp.key,
            frame: rect,
            rotated: false,
            trimmed: false,
        });
    }

    Ok(PackOutput { sheet, canvas })
}

/// Packs sizes without compositing pixel data. Inputs are (key, width, height).
/// Returns the sheet metadata only; placement semantics match [`pack_images`].
pub fn pack_layout<K: Into<String>>(
    name: impl Into<String>,
    inputs: Vec<(K, u32, u32)>,
    cfg: PackerConfig,
) -> Result<Spritesheet> {
    cfg.validate()?;

    let mut packer = ShelfPacker::new(&cfg);
    let mut sheet = Spritesheet::new(name);

    for (key, w, h) in inputs {
        let key = key.into();
        let rect = packer.place(w, h);
        if !packer.in_bounds(&rect) {
            match cfg.overflow_policy {
                OverflowPolicy::Error => {
                    return Err(SpritePackError::OutOfSpace { key });
                }
                OverflowPolicy::Clip => {
                    warn!(key = %key, x = rect.x, y = rect.y, w, h, "placement exceeds canvas; clipping");
                }
            }
        }
        sheet.insert(Frame {
            key,
            frame: rect,
            rotated: false,
            trimmed: false,
        });
    }

    Ok(sheet)
}
