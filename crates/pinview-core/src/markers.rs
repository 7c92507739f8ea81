use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::consts::DEFAULT_MARKER_PALETTE;
use crate::error::PinviewError;
use crate::geometry::{NormalizedPoint, PixelPoint};
use crate::session::ViewerSession;
use crate::translate::to_normalized;
use crate::viewport::ViewTransform;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkerId(pub u64);

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// RGB marker color, written as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MarkerColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl MarkerColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for MarkerColor {
    type Err = PinviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PinviewError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for MarkerColor {
    type Error = PinviewError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MarkerColor> for String {
    fn from(color: MarkerColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for MarkerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Palette used when none is configured.
pub fn default_palette() -> Vec<MarkerColor> {
    DEFAULT_MARKER_PALETTE
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect()
}

/// A user-placed marker pinned to an image location.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub id: MarkerId,
    pub position: NormalizedPoint,
    pub label: String,
    pub color: MarkerColor,
}

/// What the sidebar needs to list a marker.
#[derive(Clone, Debug, PartialEq)]
pub struct SidebarEntry {
    pub id: MarkerId,
    pub label: String,
    pub color: MarkerColor,
}

/// Marker lists, one per image index, plus the id counter shared by all.
pub struct MarkerBoard {
    lists: BTreeMap<usize, Vec<Marker>>,
    active: usize,
    next_id: u64,
    palette: Vec<MarkerColor>,
}

impl Default for MarkerBoard {
    fn default() -> Self {
        Self::new(default_palette())
    }
}

impl MarkerBoard {
    pub fn new(palette: Vec<MarkerColor>) -> Self {
        let palette = if palette.is_empty() {
            default_palette()
        } else {
            palette
        };
        Self {
            lists: BTreeMap::new(),
            active: 0,
            next_id: 1,
            palette,
        }
    }

    /// Translate `pixel` through the session and append a marker there.
    ///
    /// Returns `None` without side effects when the session is not ready.
    pub fn add_marker<V: ViewTransform>(
        &mut self,
        pixel: PixelPoint,
        label: Option<String>,
        session: &ViewerSession<V>,
    ) -> Option<Marker> {
        let Some(position) = to_normalized(pixel, session) else {
            debug!(x = pixel.x, y = pixel.y, "Session not ready, marker not placed");
            return None;
        };
        Some(self.place(position, label))
    }

    /// Append a marker at an image-space position.
    pub fn place(&mut self, position: NormalizedPoint, label: Option<String>) -> Marker {
        let id = MarkerId(self.next_id);
        self.next_id += 1;
        let color = self.palette[((id.0 - 1) as usize) % self.palette.len()];
        let marker = Marker {
            id,
            position,
            label: label.unwrap_or_else(|| format!("Marker {id}")),
            color,
        };
        info!(
            id = %id,
            image = self.active,
            x = position.x,
            y = position.y,
            "Marker placed"
        );
        self.lists.entry(self.active).or_default().push(marker.clone());
        marker
    }

    /// Remove the marker with `id` from the active image. Absent ids are ignored.
    pub fn delete_marker(&mut self, id: MarkerId) -> bool {
        let Some(list) = self.lists.get_mut(&self.active) else {
            return false;
        };
        let before = list.len();
        list.retain(|m| m.id != id);
        let removed = list.len() != before;
        if removed {
            info!(id = %id, image = self.active, "Marker deleted");
        }
        removed
    }

    /// Empty the active image's list; other images keep their markers.
    pub fn clear_all(&mut self) {
        if let Some(list) = self.lists.get_mut(&self.active) {
            info!(image = self.active, count = list.len(), "Markers cleared");
            list.clear();
        }
    }

    pub fn set_active_image(&mut self, index: usize) {
        self.active = index;
    }

    pub fn active_image(&self) -> usize {
        self.active
    }

    pub fn markers(&self) -> &[Marker] {
        self.lists.get(&self.active).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn markers_for(&self, index: usize) -> &[Marker] {
        self.lists.get(&index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn sidebar_entries(&self) -> Vec<SidebarEntry> {
        self.markers()
            .iter()
            .map(|m| SidebarEntry {
                id: m.id,
                label: m.label.clone(),
                color: m.color,
            })
            .collect()
    }

    pub fn total_len(&self) -> usize {
        self.lists.values().map(Vec::len).sum()
    }
}
