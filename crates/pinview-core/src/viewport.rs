use crate::geometry::{NormalizedPoint, PixelPoint, PixelRect};

/// Live pixel <-> image transform exposed by a viewer.
///
/// Implementations must compute from current state on every call; callers rely
/// on results tracking zoom and pan changes immediately.
pub trait ViewTransform {
    fn pixel_to_image(&self, pixel: PixelPoint) -> NormalizedPoint;
    fn image_to_pixel(&self, point: NormalizedPoint) -> PixelPoint;
}

/// Zoom/pan state of a single image drawn on a canvas.
///
/// The image is centered in the canvas, scaled by `zoom` (screen pixels per
/// image pixel) and shifted by `pan`.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomPanViewport {
    pub canvas: PixelRect,
    /// Source image size in image pixels.
    pub image_size: (f64, f64),
    pub zoom: f64,
    pub pan: (f64, f64),
}

impl ZoomPanViewport {
    pub fn new(canvas: PixelRect, image_size: (f64, f64)) -> Self {
        Self {
            canvas,
            image_size,
            zoom: 1.0,
            pan: (0.0, 0.0),
        }
    }

    /// On-screen rectangle covered by the image.
    pub fn image_rect(&self) -> PixelRect {
        let w = self.image_size.0 * self.zoom;
        let h = self.image_size.1 * self.zoom;
        let center = self.canvas.center();
        PixelRect::from_min_size(
            PixelPoint::new(center.x + self.pan.0 - w / 2.0, center.y + self.pan.1 - h / 2.0),
            w,
            h,
        )
    }

    /// Image height divided by width; the extent of normalized `y`.
    pub fn aspect(&self) -> f64 {
        if self.image_size.0 > 0.0 {
            self.image_size.1 / self.image_size.0
        } else {
            0.0
        }
    }

    pub fn set_canvas(&mut self, canvas: PixelRect) {
        self.canvas = canvas;
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan.0 += dx;
        self.pan.1 += dy;
    }

    /// Multiply zoom by `factor`, keeping the image point under `cursor` fixed.
    pub fn zoom_at(&mut self, cursor: PixelPoint, factor: f64, min_zoom: f64, max_zoom: f64) {
        let new_zoom = (self.zoom * factor).clamp(min_zoom, max_zoom);
        let center = self.canvas.center();
        let rel_x = cursor.x - (center.x + self.pan.0);
        let rel_y = cursor.y - (center.y + self.pan.1);
        let scale_change = new_zoom / self.zoom;
        self.pan.0 += rel_x * (1.0 - scale_change);
        self.pan.1 += rel_y * (1.0 - scale_change);
        self.zoom = new_zoom;
    }

    /// Scale the image to fit the canvas and re-center it.
    pub fn fit(&mut self, min_zoom: f64, max_zoom: f64) {
        let (w, h) = self.image_size;
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let fit_x = self.canvas.width() / w;
        let fit_y = self.canvas.height() / h;
        self.zoom = fit_x.min(fit_y).clamp(min_zoom, max_zoom);
        self.pan = (0.0, 0.0);
    }
}

impl ViewTransform for ZoomPanViewport {
    fn pixel_to_image(&self, pixel: PixelPoint) -> NormalizedPoint {
        let rect = self.image_rect();
        let scale = rect.width();
        NormalizedPoint::new(
            (pixel.x - rect.min.x) / scale,
            (pixel.y - rect.min.y) / scale,
        )
    }

    fn image_to_pixel(&self, point: NormalizedPoint) -> PixelPoint {
        let rect = self.image_rect();
        let scale = rect.width();
        PixelPoint::new(point.x * scale + rect.min.x, point.y * scale + rect.min.y)
    }
}
