use std::path::Path;

use tracing::info;

use crate::error::{PinviewError, Result};

/// A decoded source image ready for upload as a texture.
#[derive(Clone, Debug)]
pub struct SourceImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8 pixels.
    pub rgba: Vec<u8>,
}

impl SourceImage {
    pub fn open(path: &Path) -> Result<Self> {
        let img = image::open(path)?;
        let source = Self::from_dynamic(img)?;
        info!(
            path = %path.display(),
            width = source.width,
            height = source.height,
            "Source image decoded"
        );
        Ok(source)
    }

    pub fn from_dynamic(img: image::DynamicImage) -> Result<Self> {
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(PinviewError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            rgba: rgba.into_raw(),
        })
    }

    /// Extent of normalized `y` for this image.
    pub fn aspect(&self) -> f64 {
        self.height as f64 / self.width as f64
    }
}
