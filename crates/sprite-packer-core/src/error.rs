use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpritePackError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Atlas JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid canvas dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Sprite `{key}` does not fit on the canvas")]
    OutOfSpace { key: String },
}

pub type Result<T> = std::result::Result<T, SpritePackError>;
