use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PinviewError, Result};
use crate::geometry::{NormalizedPoint, NormalizedRect};

/// One image of the set with its fixed reference overlays.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageEntry {
    /// Display name; the file stem is used when left empty.
    #[serde(default)]
    pub name: String,
    pub source: PathBuf,
    pub reference_square: NormalizedRect,
    #[serde(default)]
    pub reference_pin: Option<NormalizedPoint>,
}

impl ImageEntry {
    pub fn display_name(&self) -> String {
        if !self.name.is_empty() {
            return self.name.clone();
        }
        self.source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }
}

/// Fixed, ordered image sequence with a wrapping cursor.
#[derive(Clone, Debug)]
pub struct ImageSet {
    entries: Vec<ImageEntry>,
    active: usize,
}

impl ImageSet {
    pub fn new(entries: Vec<ImageEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(PinviewError::EmptyImageSet);
        }
        Ok(Self { entries, active: 0 })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ImageEntry] {
        &self.entries
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &ImageEntry {
        &self.entries[self.active]
    }

    /// Advance to the following image, wrapping to the first.
    pub fn next(&mut self) -> usize {
        self.active = (self.active + 1) % self.entries.len();
        debug!(index = self.active, "Next image");
        self.active
    }

    /// Step back to the previous image, wrapping to the last.
    pub fn prev(&mut self) -> usize {
        self.active = (self.active + self.entries.len() - 1) % self.entries.len();
        debug!(index = self.active, "Previous image");
        self.active
    }

    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.entries.len() {
            return Err(PinviewError::ImageIndexOutOfRange {
                index,
                total: self.entries.len(),
            });
        }
        self.active = index;
        Ok(())
    }
}
