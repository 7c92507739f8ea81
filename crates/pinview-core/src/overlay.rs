use tracing::debug;

use crate::geometry::{NormalizedPoint, NormalizedRect};
use crate::image_set::ImageEntry;
use crate::markers::{Marker, MarkerColor, MarkerId};
use crate::session::ViewerSession;
use crate::viewport::ViewTransform;

/// Handle issued by an overlay surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OverlayId(pub u64);

/// Element positioned over the viewer in image space.
#[derive(Clone, Debug, PartialEq)]
pub enum Overlay {
    ReferenceSquare(NormalizedRect),
    ReferencePin(NormalizedPoint),
    Marker {
        id: MarkerId,
        position: NormalizedPoint,
        label: String,
        color: MarkerColor,
    },
}

impl From<&Marker> for Overlay {
    fn from(m: &Marker) -> Self {
        Overlay::Marker {
            id: m.id,
            position: m.position,
            label: m.label.clone(),
            color: m.color,
        }
    }
}

/// The viewer's overlay layer.
pub trait OverlaySurface {
    fn add_overlay(&mut self, overlay: Overlay) -> OverlayId;
    fn remove_overlay(&mut self, id: OverlayId);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedrawOutcome {
    /// Session not ready; nothing touched.
    Skipped,
    Drawn { overlays: usize },
}

/// Keeps the overlays on a surface equal to the current marker state.
///
/// Only overlays this synchronizer created are ever removed.
#[derive(Debug, Default)]
pub struct OverlaySynchronizer {
    owned: Vec<OverlayId>,
    generation: Option<u64>,
}

impl OverlaySynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every owned overlay with the reference square, the reference
    /// pin (when present and `show_reference_pin`), and one per marker.
    pub fn redraw<V: ViewTransform, S: OverlaySurface>(
        &mut self,
        markers: &[Marker],
        image: &ImageEntry,
        show_reference_pin: bool,
        session: &ViewerSession<V>,
        surface: &mut S,
    ) -> RedrawOutcome {
        if !session.is_ready() {
            debug!(state = ?session.state(), "Skipping overlay redraw");
            return RedrawOutcome::Skipped;
        }

        if self.generation == Some(session.generation()) {
            for id in self.owned.drain(..) {
                surface.remove_overlay(id);
            }
        } else {
            // Handles from an earlier session belong to a surface that is gone.
            self.owned.clear();
        }
        self.generation = Some(session.generation());

        self.owned
            .push(surface.add_overlay(Overlay::ReferenceSquare(image.reference_square)));
        if show_reference_pin {
            if let Some(pin) = image.reference_pin {
                self.owned.push(surface.add_overlay(Overlay::ReferencePin(pin)));
            }
        }
        for marker in markers {
            self.owned.push(surface.add_overlay(marker.into()));
        }

        debug!(overlays = self.owned.len(), "Overlays redrawn");
        RedrawOutcome::Drawn {
            overlays: self.owned.len(),
        }
    }

    /// Remove every owned overlay from `surface`.
    pub fn clear<S: OverlaySurface>(&mut self, surface: &mut S) {
        for id in self.owned.drain(..) {
            surface.remove_overlay(id);
        }
        self.generation = None;
    }

    pub fn len(&self) -> usize {
        self.owned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owned.is_empty()
    }
}
