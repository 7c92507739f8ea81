use tracing::debug;

use crate::viewport::ViewTransform;

/// Lifecycle phase of a viewer session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    /// `open` was called but the viewer has not reported its transform yet.
    Opening,
    Open,
}

/// Lifecycle notifications, drained by the owner once per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    Opened { generation: u64 },
    Closed { generation: u64 },
}

/// Explicit owner of a viewer's live state.
///
/// Translator and overlay code receive the session by reference and check
/// `is_ready` before touching the viewer. Every `open` bumps the generation so
/// results that arrive for an earlier open can be recognized and dropped.
pub struct ViewerSession<V> {
    state: SessionState,
    generation: u64,
    viewport: Option<V>,
    events: Vec<SessionEvent>,
}

impl<V: ViewTransform> Default for ViewerSession<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ViewTransform> ViewerSession<V> {
    pub fn new() -> Self {
        Self {
            state: SessionState::Closed,
            generation: 0,
            viewport: None,
            events: Vec::new(),
        }
    }

    /// Begin opening a new source, tearing down any current one.
    /// Returns the generation that `attach` must present.
    pub fn open(&mut self) -> u64 {
        self.close();
        self.generation += 1;
        self.state = SessionState::Opening;
        debug!(generation = self.generation, "Viewer session opening");
        self.generation
    }

    /// Hand the session its live transform once the source is displayable.
    ///
    /// Ignored (returns `false`) when `generation` is not the pending open.
    pub fn attach(&mut self, generation: u64, viewport: V) -> bool {
        if generation != self.generation || self.state != SessionState::Opening {
            debug!(
                generation,
                current = self.generation,
                "Ignoring attach for stale session"
            );
            return false;
        }
        self.viewport = Some(viewport);
        self.state = SessionState::Open;
        self.events.push(SessionEvent::Opened { generation });
        debug!(generation, "Viewer session open");
        true
    }

    pub fn close(&mut self) {
        if self.state == SessionState::Closed {
            return;
        }
        self.viewport = None;
        self.state = SessionState::Closed;
        self.events.push(SessionEvent::Closed {
            generation: self.generation,
        });
        debug!(generation = self.generation, "Viewer session closed");
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_ready(&self) -> bool {
        self.state == SessionState::Open && self.viewport.is_some()
    }

    pub fn viewport(&self) -> Option<&V> {
        if self.is_ready() {
            self.viewport.as_ref()
        } else {
            None
        }
    }

    pub fn viewport_mut(&mut self) -> Option<&mut V> {
        if self.is_ready() {
            self.viewport.as_mut()
        } else {
            None
        }
    }

    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }
}
