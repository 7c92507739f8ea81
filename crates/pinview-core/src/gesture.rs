use crate::consts::DRAG_THRESHOLD_PX;
use crate::geometry::PixelPoint;

#[derive(Clone, Copy, Debug, PartialEq)]
enum State {
    Idle,
    /// "Add marker" was chosen; the next press starts a placement.
    Armed,
    Pressed {
        current: PixelPoint,
        start: PixelPoint,
        dragging: bool,
    },
}

/// Turns pointer input into marker placements.
///
/// Ctrl-press places at once. An armed press follows the pointer while
/// dragged and commits on release, then disarms.
#[derive(Clone, Debug)]
pub struct PlacementGesture {
    state: State,
    drag_threshold: f64,
}

impl Default for PlacementGesture {
    fn default() -> Self {
        Self::new(DRAG_THRESHOLD_PX)
    }
}

impl PlacementGesture {
    pub fn new(drag_threshold: f64) -> Self {
        Self {
            state: State::Idle,
            drag_threshold,
        }
    }

    pub fn arm(&mut self) {
        if self.state == State::Idle {
            self.state = State::Armed;
        }
    }

    pub fn disarm(&mut self) {
        self.state = State::Idle;
    }

    pub fn is_armed(&self) -> bool {
        !matches!(self.state, State::Idle)
    }

    /// True while a placement press is in progress.
    pub fn is_placing(&self) -> bool {
        matches!(self.state, State::Pressed { .. })
    }

    /// Pointer pressed at `at`; returns a point to commit for Ctrl-presses.
    pub fn press(&mut self, at: PixelPoint, ctrl: bool) -> Option<PixelPoint> {
        if ctrl {
            return Some(at);
        }
        if self.state == State::Armed {
            self.state = State::Pressed {
                current: at,
                start: at,
                dragging: false,
            };
        }
        None
    }

    pub fn drag(&mut self, to: PixelPoint) {
        let threshold = self.drag_threshold;
        if let State::Pressed {
            current,
            start,
            dragging,
        } = &mut self.state
        {
            *current = to;
            if start.distance(to) > threshold {
                *dragging = true;
            }
        }
    }

    /// Pointer released; returns the committed point for an armed placement.
    pub fn release(&mut self, at: PixelPoint) -> Option<PixelPoint> {
        match self.state {
            State::Pressed { .. } => {
                self.state = State::Idle;
                Some(at)
            }
            _ => None,
        }
    }

    /// In-flight drag position, once the pointer has moved past the threshold.
    pub fn preview(&self) -> Option<PixelPoint> {
        match self.state {
            State::Pressed {
                current,
                dragging: true,
                ..
            } => Some(current),
            _ => None,
        }
    }
}
