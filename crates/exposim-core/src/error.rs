use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExposimError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Input directory {0} does not exist or is not a directory")]
    InputNotDirectory(PathBuf),

    #[error("No image files found in {0}")]
    NoImagesFound(PathBuf),

    #[error("Invalid gamma {0}: gamma must be a finite value greater than zero")]
    InvalidGamma(f32),

    #[error("Buffer shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: (usize, usize, usize),
        right: (usize, usize, usize),
    },

    #[error("Unsupported channel count: {0}")]
    UnsupportedChannelCount(usize),

    #[error("Invalid buffer: {len} bytes for shape {height}x{width}x{channels}")]
    InvalidBuffer {
        len: usize,
        height: usize,
        width: usize,
        channels: usize,
    },
}

pub type Result<T> = std::result::Result<T, ExposimError>;
