/// Zoom limits used when an image set does not override them.
pub const DEFAULT_MIN_ZOOM: f64 = 0.1;
pub const DEFAULT_MAX_ZOOM: f64 = 20.0;

/// Pointer movement (in screen pixels) below which a press/release pair is
/// treated as a click rather than a drag.
pub const DRAG_THRESHOLD_PX: f64 = 3.0;

/// Screen-space radius within which a pointer hits a marker.
pub const MARKER_HIT_RADIUS_PX: f64 = 8.0;

/// Marker colors cycled through when an image set does not define a palette.
pub const DEFAULT_MARKER_PALETTE: [&str; 8] = [
    "#e6194b", "#3cb44b", "#ffe119", "#4363d8", "#f58231", "#911eb4", "#42d4f4", "#f032e6",
];
