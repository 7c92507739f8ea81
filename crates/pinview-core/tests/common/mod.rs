#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::PathBuf;

use pinview_core::geometry::{NormalizedPoint, NormalizedRect, PixelPoint, PixelRect};
use pinview_core::image_set::ImageEntry;
use pinview_core::overlay::{Overlay, OverlayId, OverlaySurface};
use pinview_core::session::ViewerSession;
use pinview_core::viewport::ZoomPanViewport;

/// A 1000x1000 image filling a 1000x1000 canvas at 1:1 zoom.
pub fn square_viewport() -> ZoomPanViewport {
    ZoomPanViewport::new(
        PixelRect::from_min_size(PixelPoint::new(0.0, 0.0), 1000.0, 1000.0),
        (1000.0, 1000.0),
    )
}

/// A session opened and attached to `viewport`.
pub fn open_session(viewport: ZoomPanViewport) -> ViewerSession<ZoomPanViewport> {
    let mut session = ViewerSession::new();
    let generation = session.open();
    assert!(session.attach(generation, viewport));
    session.drain_events();
    session
}

pub fn entry_with_pin() -> ImageEntry {
    ImageEntry {
        name: "slide".into(),
        source: PathBuf::from("slide.png"),
        reference_square: NormalizedRect::new(0.1, 0.1, 0.2, 0.2),
        reference_pin: Some(NormalizedPoint::new(0.5, 0.3)),
    }
}

pub fn entry_without_pin() -> ImageEntry {
    ImageEntry {
        reference_pin: None,
        ..entry_with_pin()
    }
}

/// Overlay surface that records what is currently shown.
#[derive(Default)]
pub struct RecordingSurface {
    next: u64,
    pub shown: BTreeMap<OverlayId, Overlay>,
    pub removed_unknown: usize,
}

impl RecordingSurface {
    pub fn count(&self, pred: impl Fn(&Overlay) -> bool) -> usize {
        self.shown.values().filter(|&o| pred(o)).count()
    }

    pub fn pins(&self) -> usize {
        self.count(|o| matches!(o, Overlay::ReferencePin(_)))
    }

    pub fn squares(&self) -> usize {
        self.count(|o| matches!(o, Overlay::ReferenceSquare(_)))
    }

    pub fn markers(&self) -> usize {
        self.count(|o| matches!(o, Overlay::Marker { .. }))
    }
}

impl OverlaySurface for RecordingSurface {
    fn add_overlay(&mut self, overlay: Overlay) -> OverlayId {
        self.next += 1;
        let id = OverlayId(self.next);
        self.shown.insert(id, overlay);
        id
    }

    fn remove_overlay(&mut self, id: OverlayId) {
        if self.shown.remove(&id).is_none() {
            self.removed_unknown += 1;
        }
    }
}
