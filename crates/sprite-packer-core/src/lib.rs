//! Core library for packing sprite images into a spritesheet.
//!
//! - Algorithm: sequential shelf/row packing (left-to-right, top-to-bottom)
//! - Pipeline: `pack_images` takes in-memory images and returns the composited
//!   canvas plus sheet metadata; `pack_layout` computes placements only
//! - Codec: atlas JSON writer/reader in `export` (write-once, no merge)
//!
//! Quick example:
//! ```ignore
//! use image::ImageReader;
//! use sprite_packer_core::{InputImage, PackerConfig, pack_images};
//! # fn main() -> anyhow::Result<()> {
//! let img1 = ImageReader::open("a.png")?.decode()?;
//! let img2 = ImageReader::open("b.png")?.decode()?;
//! let inputs = vec![
//!   InputImage { key: "a.png".into(), image: img1 },
//!   InputImage { key: "b.png".into(), image: img2 },
//! ];
//! let cfg = PackerConfig { canvas_width: 1024, canvas_height: 1024, ..Default::default() };
//! let out = pack_images("example", inputs, cfg)?;
//! println!("frames: {}", out.sheet.len());
//! # Ok(()) }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod packer;
pub mod pipeline;

pub use config::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use packer::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `sprite_packer_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{OverflowPolicy, PackerConfig, PackerConfigBuilder};
    pub use crate::error::SpritePackError;
    pub use crate::export::{from_json_str, load_atlas, save_atlas, to_document, to_json_string};
    pub use crate::model::{Frame, Rect, Spritesheet};
    pub use crate::packer::ShelfPacker;
    pub use crate::{InputImage, PackOutput, pack_images, pack_layout};
}
