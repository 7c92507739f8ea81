use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PinviewError {
    #[error("Failed to read {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid image set file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Image set contains no images")]
    EmptyImageSet,

    #[error("Image entry {index} is invalid: {reason}")]
    InvalidImageEntry { index: usize, reason: String },

    #[error("Invalid viewer settings: {0}")]
    InvalidViewerSettings(String),

    #[error("Invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),

    #[error("Image index {index} out of range (total: {total})")]
    ImageIndexOutOfRange { index: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, PinviewError>;
