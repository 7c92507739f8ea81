use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::consts::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM};
use crate::error::{PinviewError, Result};
use crate::geometry::{NormalizedPoint, NormalizedRect};
use crate::image_set::{ImageEntry, ImageSet};
use crate::markers::{default_palette, MarkerColor};

/// Viewer-wide settings from the `[viewer]` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    pub show_reference_pin: bool,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub marker_palette: Vec<MarkerColor>,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            show_reference_pin: true,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            marker_palette: default_palette(),
        }
    }
}

impl ViewerSettings {
    pub fn validate(&self) -> Result<()> {
        if !(self.min_zoom.is_finite() && self.min_zoom > 0.0) {
            return Err(PinviewError::InvalidViewerSettings(format!(
                "min_zoom must be positive, got {}",
                self.min_zoom
            )));
        }
        if !(self.max_zoom.is_finite() && self.max_zoom > self.min_zoom) {
            return Err(PinviewError::InvalidViewerSettings(format!(
                "max_zoom ({}) must exceed min_zoom ({})",
                self.max_zoom, self.min_zoom
            )));
        }
        if self.marker_palette.is_empty() {
            return Err(PinviewError::InvalidViewerSettings(
                "marker_palette must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Contents of an image-set TOML file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ImageSetConfig {
    #[serde(default)]
    pub viewer: ViewerSettings,
    #[serde(default)]
    pub images: Vec<ImageEntry>,
}

impl ImageSetConfig {
    /// Read, resolve and validate an image-set file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| PinviewError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let config = Self::parse(&text, base_dir)?;
        info!(
            path = %path.display(),
            images = config.images.len(),
            "Image set loaded"
        );
        Ok(config)
    }

    /// Parse TOML text; relative `source` paths are joined onto `base_dir`.
    pub fn parse(text: &str, base_dir: &Path) -> Result<Self> {
        let mut config: Self = toml::from_str(text)?;
        for entry in &mut config.images {
            if entry.source.is_relative() {
                entry.source = base_dir.join(&entry.source);
            }
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.viewer.validate()?;
        if self.images.is_empty() {
            return Err(PinviewError::EmptyImageSet);
        }
        for (index, entry) in self.images.iter().enumerate() {
            validate_entry(entry)
                .map_err(|reason| PinviewError::InvalidImageEntry { index, reason })?;
        }
        Ok(())
    }

    pub fn into_parts(self) -> Result<(ViewerSettings, ImageSet)> {
        Ok((self.viewer, ImageSet::new(self.images)?))
    }
}

fn validate_entry(entry: &ImageEntry) -> std::result::Result<(), String> {
    if entry.source.as_os_str().is_empty() {
        return Err("source path is empty".into());
    }
    validate_rect(&entry.reference_square)?;
    if let Some(pin) = entry.reference_pin {
        validate_point(&pin).map_err(|e| format!("reference_pin {e}"))?;
    }
    Ok(())
}

fn validate_rect(rect: &NormalizedRect) -> std::result::Result<(), String> {
    validate_point(&rect.min()).map_err(|e| format!("reference_square {e}"))?;
    let positive = |v: f64| v.is_finite() && v > 0.0;
    if !(positive(rect.width) && positive(rect.height)) {
        return Err(format!(
            "reference_square must have positive size, got {}x{}",
            rect.width, rect.height
        ));
    }
    Ok(())
}

fn validate_point(p: &NormalizedPoint) -> std::result::Result<(), String> {
    if !p.is_finite() {
        return Err("has non-finite coordinates".into());
    }
    if p.x < 0.0 || p.y < 0.0 {
        return Err(format!("has negative coordinates ({}, {})", p.x, p.y));
    }
    Ok(())
}
