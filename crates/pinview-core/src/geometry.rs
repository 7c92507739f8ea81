use serde::{Deserialize, Serialize};

/// A point in the image's own coordinate space.
///
/// `x` runs from 0.0 to 1.0 across the image width, `y` from 0.0 to
/// `height / width`. Zoom and pan never change these values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A point on the viewer canvas, in screen pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: PixelPoint) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A rectangle in normalized image space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl NormalizedRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn min(&self) -> NormalizedPoint {
        NormalizedPoint::new(self.x, self.y)
    }

    pub fn max(&self) -> NormalizedPoint {
        NormalizedPoint::new(self.x + self.width, self.y + self.height)
    }
}

/// An axis-aligned rectangle on the viewer canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelRect {
    pub min: PixelPoint,
    pub max: PixelPoint,
}

impl PixelRect {
    pub fn from_min_size(min: PixelPoint, width: f64, height: f64) -> Self {
        Self {
            min,
            max: PixelPoint::new(min.x + width, min.y + height),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> PixelPoint {
        PixelPoint::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }
}
