use std::collections::BTreeMap;

use pinview_core::overlay::{Overlay, OverlayId, OverlaySurface};

/// Overlays currently shown over the viewport, painted in insertion order.
#[derive(Default)]
pub struct OverlayLayer {
    next_id: u64,
    items: BTreeMap<OverlayId, Overlay>,
}

impl OverlayLayer {
    pub fn iter(&self) -> impl Iterator<Item = &Overlay> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Drop everything; called when the viewer session is torn down.
    pub fn reset(&mut self) {
        self.items.clear();
    }
}

impl OverlaySurface for OverlayLayer {
    fn add_overlay(&mut self, overlay: Overlay) -> OverlayId {
        self.next_id += 1;
        let id = OverlayId(self.next_id);
        self.items.insert(id, overlay);
        id
    }

    fn remove_overlay(&mut self, id: OverlayId) {
        self.items.remove(&id);
    }
}
