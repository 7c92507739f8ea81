use crate::geometry::{NormalizedPoint, PixelPoint};
use crate::markers::{Marker, MarkerId};
use crate::session::ViewerSession;
use crate::viewport::ViewTransform;

/// Map a canvas pixel to image space. `None` while the session is not ready.
pub fn to_normalized<V: ViewTransform>(
    pixel: PixelPoint,
    session: &ViewerSession<V>,
) -> Option<NormalizedPoint> {
    let point = session.viewport()?.pixel_to_image(pixel);
    point.is_finite().then_some(point)
}

/// Map an image-space point back to canvas pixels.
pub fn to_pixel<V: ViewTransform>(
    point: NormalizedPoint,
    session: &ViewerSession<V>,
) -> Option<PixelPoint> {
    let pixel = session.viewport()?.image_to_pixel(point);
    (pixel.x.is_finite() && pixel.y.is_finite()).then_some(pixel)
}

/// Nearest marker whose on-screen position lies within `radius_px` of `pixel`.
pub fn hit_test<V: ViewTransform>(
    pixel: PixelPoint,
    markers: &[Marker],
    radius_px: f64,
    session: &ViewerSession<V>,
) -> Option<MarkerId> {
    let viewport = session.viewport()?;
    markers
        .iter()
        .map(|m| (m.id, viewport.image_to_pixel(m.position).distance(pixel)))
        .filter(|(_, d)| *d <= radius_px)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}
